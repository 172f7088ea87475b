use crate::{
    conf::Conf,
    err::{DriverError, Result},
    machine::MachineDef,
};
use calculi_mu::{Evaluator, Func, Library, parse_func, parse_library};
use calculi_turing::{Report, Symbol, Tape, run_turing_machine, run_turing_machine_bounded};
use std::{io, path::Path};

/// Read `def` lines from `path` on top of `base`.
pub fn load_library(path: impl AsRef<Path>, base: &Library) -> Result<Library> {
    let path = path.as_ref();
    let src = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        | io::ErrorKind::NotFound => DriverError::FileNotFound(path.to_path_buf()),
        | _ => e.into(),
    })?;
    Ok(parse_library(&src, base)?)
}

/// One machine run: the tape it started on and how it ended.
#[derive(Clone, Debug)]
pub struct Run {
    pub initial: Tape,
    pub report: Report,
}

/// Runs machines and evaluates functions under the configured bounds.
pub struct Session {
    pub conf: Conf,
    /// names visible to [`Session::parse`]
    pub lib: Library,
}

impl Session {
    pub fn new(conf: Conf) -> Result<Self> {
        Ok(Session { conf, lib: Library::standard()? })
    }
    pub fn load_defs(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.lib = load_library(path, &self.lib)?;
        Ok(())
    }
    pub fn run_machine(&self, machine: &MachineDef, input: &str) -> Result<Run> {
        let symbols = Symbol::parse_all(input)?;
        let initial = Tape::new(symbols.iter().copied());
        let MachineDef { name, program, start } = machine;
        log::debug!("running `{}` on {}", name, initial);
        let report = match self.conf.step_limit {
            | Some(limit) => run_turing_machine_bounded(program, *start, symbols, limit),
            | None => run_turing_machine(program, *start, symbols),
        };
        Ok(Run { initial, report })
    }
    pub fn parse(&self, expr: &str) -> Result<Func> {
        Ok(parse_func(expr, &self.lib)?)
    }
    pub fn evaluator(&self) -> Evaluator {
        match self.conf.search_limit {
            | Some(limit) => Evaluator::with_search_limit(limit),
            | None => Evaluator::new(),
        }
    }
    pub fn evaluate(&self, func: &Func, args: &[u64]) -> Result<u64> {
        Ok(self.evaluator().evaluate(func, args)?)
    }
}
