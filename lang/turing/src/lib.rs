//! A single-tape Turing machine interpreter.
//!
//! A [`Program`] is an ordered instruction table over states it owns. A
//! [`Machine`] pairs the program with a state and a [`Tape`] and is stepped
//! until the state is final or no instruction matches.

#![allow(clippy::style)]

pub mod err;
pub mod syntax;
pub mod tape;
pub mod eval;
pub mod fmt;

pub use err::{Result, TuringError};
pub use eval::{Eval, Halt, Machine, Outcome, Report};
pub use syntax::*;
pub use tape::{Cell, Tape};

pub use calculi_utils::fuel::{Fuel, Step};

/// Write `input` onto a fresh tape starting at the head and run `program`
/// from `start` until it halts. May not return if the machine never halts.
pub fn run_turing_machine(
    program: &Program, start: StateId, input: impl IntoIterator<Item = Symbol>,
) -> Report {
    Machine::new(program, start, Tape::new(input)).run()
}

/// [`run_turing_machine`] giving up after `limit` steps with
/// [`Outcome::StepLimitExceeded`].
pub fn run_turing_machine_bounded(
    program: &Program, start: StateId, input: impl IntoIterator<Item = Symbol>, limit: u64,
) -> Report {
    Machine::new(program, start, Tape::new(input)).run_bounded(Fuel::limited(limit))
}
