//! Behaviour of the interpreter on small hand-built machines.

use calculi_turing::*;
use pretty_assertions::assert_eq;

fn mark(c: char) -> Symbol {
    Symbol::Mark(c)
}

#[test]
fn first_matching_instruction_wins() {
    let mut prog = Program::new();
    let q = prog.state("q");
    let wild = prog.final_state("wild");
    let exact = prog.final_state("exact");
    prog.instruction(q, Read::Any, wild, Write::Keep, Move::Stay)
        .instruction(q, mark('a'), exact, Write::Keep, Move::Stay);
    let report = run_turing_machine(&prog, q, [mark('a')]);
    assert_eq!(report.state, wild);
    assert_eq!(report.steps, 1);
}

#[test]
fn no_match_is_a_normal_halt() {
    let mut prog = Program::new();
    let q = prog.state("q");
    let report = run_turing_machine(&prog, q, [mark('a'), mark('b')]);
    assert_eq!(report.outcome, Outcome::Halted(Halt::NoMatch));
    assert!(!report.accepted());
    assert_eq!(report.steps, 0);
    assert_eq!(report.tape.to_string(), "[a] b");
}

#[test]
fn starting_final_never_steps() {
    let mut prog = Program::new();
    let done = prog.final_state("done");
    prog.instruction(done, Read::Any, done, mark('x'), Move::Right);
    let report = run_turing_machine(&prog, done, [mark('a')]);
    assert!(report.accepted());
    assert_eq!(report.tape.to_string(), "[a]");
}

#[test]
fn same_names_are_different_states() {
    let mut prog = Program::new();
    let first = prog.state("q");
    let second = prog.final_state("q");
    assert!(first != second);
    prog.instruction(first, Read::Any, second, Write::Keep, Move::Right);
    let report = run_turing_machine(&prog, first, []);
    assert_eq!(report.state, second);
    assert!(report.accepted());
}

#[test]
fn step_limit_is_an_outcome() {
    // walks right forever
    let mut prog = Program::new();
    let q = prog.state("q");
    prog.instruction(q, Read::Any, q, Write::Keep, Move::Right);
    let report = run_turing_machine_bounded(&prog, q, [], 25);
    assert_eq!(report.outcome, Outcome::StepLimitExceeded { limit: 25 });
    assert_eq!(report.steps, 25);
    assert!(!report.halted_normally());
    // every visited cell is kept
    assert_eq!(report.tape.cells().len(), 26);
}

#[test]
fn bound_large_enough_changes_nothing() {
    let mut prog = Program::new();
    let q = prog.state("q");
    let done = prog.final_state("done");
    prog.instruction(q, mark('a'), q, mark('b'), Move::Right)
        .instruction(q, Symbol::Blank, done, Write::Keep, Move::Left);
    let input = Symbol::parse_all("aaaa").unwrap();
    let free = run_turing_machine(&prog, q, input.clone());
    let bounded = run_turing_machine_bounded(&prog, q, input, free.steps);
    assert_eq!(free, bounded);
    assert_eq!(free.tape.to_string(), "b b b [b] #");
}

#[test]
fn machines_are_values() {
    let mut prog = Program::new();
    let q = prog.state("q");
    prog.instruction(q, Read::Any, q, mark('x'), Move::Right);
    let start = Machine::new(&prog, q, Tape::new([mark('a'), mark('b')]));
    let Step::Step(next) = start.clone().step() else { panic!("should step") };
    assert_eq!(start.tape.to_string(), "[a] b");
    assert_eq!(next.tape.to_string(), "x [b]");
    assert_eq!(next.steps, 1);
}

#[test]
fn halting_at_once_leaves_input_alone() {
    let mut prog = Program::new();
    let done = prog.final_state("done");
    prog.instruction(done, Read::Any, done, Write::Keep, Move::Stay);
    for s in ["", "a", "abc", "a#b", "x y z", "##a"] {
        let input = Symbol::parse_all(s).unwrap();
        let report = run_turing_machine(&prog, done, input.clone());
        assert!(report.halted_normally());
        let trimmed = Tape::new(input).contents();
        assert_eq!(report.tape.contents(), trimmed, "input {:?}", s);
    }
}

#[test]
fn write_then_read_across_the_tape() {
    let t = Tape::new(Symbol::parse_all("abc").unwrap()).shift(Move::Right);
    for symbol in [Symbol::Blank, mark('z')] {
        assert_eq!(t.write(Write::Put(symbol)).read(), symbol);
    }
    assert_eq!(t.write(Write::Keep).read(), t.read());
}
