//! Plain-text reports for the terminal.

use calculi_driver::{
    Run,
    demo::{ArithRow, MachineDemo},
};
use calculi_mu::MuError;
use calculi_turing::{Outcome, Program};
use colored::Colorize;
use std::fmt;

const RULE: &str = "-------------";

/// The initial tape, the verdict, and the last configuration of one run.
pub struct RunReport<'a> {
    pub program: &'a Program,
    pub run: &'a Run,
}

impl fmt::Display for RunReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Run { initial, report } = self.run;
        writeln!(f, "{}", RULE)?;
        writeln!(f, "Initial tape:\n{}", initial)?;
        match report.outcome {
            | Outcome::Halted(_) if report.accepted() => writeln!(f, "Input {}.", "accepted".green())?,
            | Outcome::Halted(_) => writeln!(f, "Input {}.", "not accepted".yellow())?,
            | Outcome::StepLimitExceeded { limit } => {
                writeln!(f, "{}", format!("Step limit of {} exceeded.", limit).red())?
            }
        }
        let state = self.program.name(report.state);
        let verb = if report.halted_normally() { "halted" } else { "stopped" };
        writeln!(f, "Machine {} in state {} after {} steps", verb, state.bold(), report.steps)?;
        writeln!(f, "Final tape configuration:\n{}", report.tape)
    }
}

pub struct DemoReport<'a>(pub &'a MachineDemo);

impl fmt::Display for DemoReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let DemoReport(demo) = self;
        writeln!(f, "{}:", demo.title)?;
        writeln!(f, "{}", "=".repeat(demo.title.chars().count() + 1))?;
        for run in &demo.runs {
            write!(f, "{}", RunReport { program: &demo.machine.program, run })?;
        }
        Ok(())
    }
}

pub struct Value<'a>(pub &'a Result<u64, MuError>);

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            | Ok(n) => write!(f, "{}", n),
            | Err(MuError::SearchLimitExceeded { .. }) => write!(f, "{}", "search limit exceeded".red()),
            | Err(err) => write!(f, "{}", err.to_string().red()),
        }
    }
}

pub struct ArithTable<'a>(pub &'a [ArithRow]);

impl fmt::Display for ArithTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.0 {
            writeln!(f, "{:<9}= {}", row.label, Value(&row.value))?;
        }
        Ok(())
    }
}
