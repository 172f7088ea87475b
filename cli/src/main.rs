use calculi_cli::{Cli, Commands, Source, print};
use calculi_driver::{Conf, MachineDef, Result, Session, builtin_machine, demo, load_machine};
use calculi_turing::Outcome;
use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
    match run(cli) {
        | Ok(code) => code,
        | Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

fn load(Source { file, builtin }: Source) -> Result<MachineDef> {
    match builtin {
        | Some(name) => builtin_machine(&name),
        | None => load_machine(file.unwrap_or_default()),
    }
}

fn run(Cli { conf, verbose: _, command }: Cli) -> Result<ExitCode> {
    let conf = match conf {
        | Some(path) => Conf::load(path)?,
        | None => Conf::default(),
    };
    match command {
        | Commands::Tm { source, input, step_limit } => {
            let session = Session::new(conf.merge(Conf { step_limit, search_limit: None }))?;
            let machine = load(source)?;
            let run = session.run_machine(&machine, &input)?;
            print!("{}", print::RunReport { program: &machine.program, run: &run });
            if let Outcome::StepLimitExceeded { .. } = run.report.outcome {
                return Ok(ExitCode::from(2));
            }
        }
        | Commands::Mu { expr, args, defs, search_limit } => {
            let mut session = Session::new(conf.merge(Conf { step_limit: None, search_limit }))?;
            for path in defs {
                session.load_defs(path)?;
            }
            let func = session.parse(&expr)?;
            log::debug!("{} has arity {}", expr, func.arity());
            println!("{}", session.evaluate(&func, &args)?);
        }
        | Commands::Demo => {
            let session = Session::new(conf)?;
            for d in demo::machine_demos(&session)? {
                println!("{}", print::DemoReport(&d));
            }
            println!("Mu-recursive arithmetic:");
            println!("========================");
            print!("{}", print::ArithTable(&demo::arithmetic_table(&session)?));
        }
    }
    Ok(ExitCode::SUCCESS)
}
