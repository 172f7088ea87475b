use crate::{fmt::*, syntax::*, tape::*};
use calculi_utils::fuel::{Fuel, Step};

pub trait Eval: Sized {
    type Out;
    fn step(self) -> Step<Self, Self::Out>;
    fn eval(self) -> Self::Out {
        let mut res = self;
        loop {
            match res.step() {
                | Step::Done(out) => break out,
                | Step::Step(next) => res = next,
            }
        }
    }
}

/// Why a machine stopped on its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Halt {
    /// The current state is final; checked before any instruction is looked up.
    Final,
    /// No instruction matches the current state and symbol.
    NoMatch,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Halted(Halt),
    /// A caller-imposed bound ran out; the machine may or may not halt later.
    StepLimitExceeded { limit: u64 },
}

/// A configuration: the current state and tape, plus the fixed program.
#[derive(Clone, Debug)]
pub struct Machine<'p> {
    pub program: &'p Program,
    pub state: StateId,
    pub tape: Tape,
    pub steps: u64,
}

/// The last configuration of a run and how it ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    pub state: StateId,
    pub tape: Tape,
    pub steps: u64,
    pub outcome: Outcome,
}

impl Report {
    /// Halted in a final state.
    pub fn accepted(&self) -> bool {
        self.outcome == Outcome::Halted(Halt::Final)
    }
    /// Halted at all, final state or not.
    pub fn halted_normally(&self) -> bool {
        matches!(self.outcome, Outcome::Halted(_))
    }
}

impl<'p> Machine<'p> {
    pub fn new(program: &'p Program, state: StateId, tape: Tape) -> Self {
        Machine { program, state, tape, steps: 0 }
    }
    /// The instruction to apply next, or the reason there is none.
    pub fn next_instruction(&self) -> Result<&'p Instruction, Halt> {
        let program: &'p Program = self.program;
        if program.is_final(self.state) {
            return Err(Halt::Final);
        }
        program.find_match(self.state, self.tape.read()).ok_or(Halt::NoMatch)
    }
    fn apply(self, ins: &Instruction) -> Machine<'p> {
        let Machine { program, state: _, tape, steps } = self;
        if log::log_enabled!(log::Level::Trace) {
            let fmt = Formatter::new(program);
            log::trace!("[step {}] {} on {}", steps, ins.ugly(&fmt), tape);
        }
        let tape = tape.write(ins.write).shift(ins.movement);
        Machine { program, state: ins.to, tape, steps: steps + 1 }
    }
    fn finish(self, outcome: Outcome) -> Report {
        if let Outcome::Halted(halt) = outcome {
            log::debug!(
                "halted ({:?}) in `{}` after {} steps",
                halt,
                self.program.name(self.state),
                self.steps
            );
        }
        Report { state: self.state, tape: self.tape, steps: self.steps, outcome }
    }
    /// Run until the machine halts. There is no bound: this may never return.
    pub fn run(self) -> Report {
        self.eval()
    }
    /// Run until the machine halts or `fuel` runs out, whichever comes first.
    pub fn run_bounded(self, mut fuel: Fuel) -> Report {
        let mut machine = self;
        loop {
            let ins = match machine.next_instruction() {
                | Ok(ins) => ins,
                | Err(halt) => break machine.finish(Outcome::Halted(halt)),
            };
            if let Err(exhausted) = fuel.burn() {
                let limit = exhausted.limit;
                break machine.finish(Outcome::StepLimitExceeded { limit });
            }
            machine = machine.apply(ins);
        }
    }
}

impl<'p> Eval for Machine<'p> {
    type Out = Report;
    fn step(self) -> Step<Self, Self::Out> {
        match self.next_instruction() {
            | Ok(ins) => Step::Step(self.apply(ins)),
            | Err(halt) => Step::Done(self.finish(Outcome::Halted(halt))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn mark(c: char) -> Symbol {
        Symbol::Mark(c)
    }

    #[test]
    fn final_state_halts_before_matching() {
        let mut prog = Program::new();
        let done = prog.final_state("done");
        let other = prog.state("other");
        prog.instruction(done, Read::Any, other, mark('x'), Move::Right);
        let tape = Tape::new([mark('a')]);
        let report = Machine::new(&prog, done, tape.clone()).run();
        assert_eq!(report.outcome, Outcome::Halted(Halt::Final));
        assert_eq!(report.tape, tape);
        assert_eq!(report.steps, 0);
        assert!(report.accepted());
    }

    #[test]
    fn no_match_halts_without_accepting() {
        let mut prog = Program::new();
        let q = prog.state("q");
        let r = prog.state("r");
        prog.instruction(q, mark('a'), r, mark('b'), Move::Right);
        let report = Machine::new(&prog, q, Tape::new([mark('a')])).run();
        assert_eq!(report.state, r);
        assert_eq!(report.outcome, Outcome::Halted(Halt::NoMatch));
        assert_eq!(report.tape.contents(), vec![mark('b')]);
        assert!(report.halted_normally());
        assert!(!report.accepted());
    }

    #[test]
    fn step_by_step() {
        let mut prog = Program::new();
        let q = prog.state("q");
        prog.instruction(q, mark('a'), q, Write::Keep, Move::Right);
        let machine = Machine::new(&prog, q, Tape::new([mark('a'), mark('a')]));
        let Step::Step(machine) = machine.step() else { panic!("expected a step") };
        assert_eq!(machine.steps, 1);
        let Step::Step(machine) = machine.step() else { panic!("expected a step") };
        let Step::Done(report) = machine.step() else { panic!("expected a halt") };
        assert_eq!(report.steps, 2);
        assert_eq!(report.tape.read(), Symbol::Blank);
    }

    #[test]
    fn step_limit_is_its_own_outcome() {
        let mut prog = Program::new();
        let q = prog.state("forever");
        prog.instruction(q, Read::Any, q, Write::Keep, Move::Right);
        let report = Machine::new(&prog, q, Tape::default()).run_bounded(Fuel::limited(50));
        assert_eq!(report.outcome, Outcome::StepLimitExceeded { limit: 50 });
        assert_eq!(report.steps, 50);
        assert!(!report.halted_normally());
        assert!(!report.accepted());
    }

    #[test]
    fn bound_does_not_change_a_halting_run() {
        let mut prog = Program::new();
        let q = prog.state("q");
        let done = prog.final_state("done");
        prog.instruction(q, mark('a'), q, mark('b'), Move::Right);
        prog.instruction(q, Symbol::Blank, done, Write::Keep, Move::Left);
        let tape = Tape::new([mark('a'), mark('a'), mark('a')]);
        let free = Machine::new(&prog, q, tape.clone()).run();
        let bounded = Machine::new(&prog, q, tape).run_bounded(Fuel::limited(4));
        assert_eq!(free, bounded);
        assert_eq!(free.steps, 4);
        assert!(free.accepted());
    }
}
