//! The bundled demonstrations: both machines on their sample inputs and a
//! table of derived arithmetic.

use crate::{
    err::Result,
    machine::{MachineDef, builtin_machine},
    session::{Run, Session},
};
use calculi_mu::MuError;

pub const REVERSE_INPUTS: &[&str] = &["abaabba", "a", "ab", ""];
pub const ANBNCN_INPUTS: &[&str] = &["aaabbbccc", "abc", "", "aabcc", "aabbccc", "aabbc", "abcabc"];

/// `sqrt(6)` never finds a root, so the table always runs under some bound.
pub const DEMO_SEARCH_LIMIT: u64 = 20;

/// `(label, expression, arguments)`
pub const ARITHMETIC: &[(&str, &str, &[u64])] = &[
    ("5", "const(5, 0)", &[]),
    ("2 + 3", "sum", &[2, 3]),
    ("2 -' 1", "pred", &[2]),
    ("0 -' 1", "pred", &[0]),
    ("8 -' 3", "sub", &[8, 3]),
    ("5 -' 9", "sub", &[5, 9]),
    ("2 * 4", "mul", &[2, 4]),
    ("3 * 0", "mul", &[3, 0]),
    ("0 * 9", "mul", &[0, 9]),
    ("9 * 25", "mul", &[9, 25]),
    ("sgn(0)", "sgn", &[0]),
    ("sgn(5)", "sgn", &[5]),
    ("2 < 3", "lt", &[2, 3]),
    ("9 < 1", "lt", &[9, 1]),
    ("5 > 3", "gt", &[5, 3]),
    ("8 > 12", "gt", &[8, 12]),
    ("5 = 5", "eq", &[5, 5]),
    ("3 = 2", "eq", &[3, 2]),
    ("8 =/= 9", "neq", &[8, 9]),
    ("5 =/= 5", "neq", &[5, 5]),
    ("7^2", "square", &[7]),
    ("0^2", "square", &[0]),
    ("sqrt(0)", "sqrt", &[0]),
    ("sqrt(1)", "sqrt", &[1]),
    ("sqrt(25)", "sqrt", &[25]),
    ("sqrt(6)", "sqrt", &[6]),
];

pub struct MachineDemo {
    pub title: &'static str,
    pub machine: MachineDef,
    pub runs: Vec<Run>,
}

pub struct ArithRow {
    pub label: &'static str,
    pub value: std::result::Result<u64, MuError>,
}

pub fn machine_demos(session: &Session) -> Result<Vec<MachineDemo>> {
    let table: [(&'static str, &str, &[&str]); 2] = [
        ("Input reversal machine", "reverse", REVERSE_INPUTS),
        ("Acceptor of { a^n b^n c^n : n >= 0 }", "anbncn", ANBNCN_INPUTS),
    ];
    table
        .into_iter()
        .map(|(title, name, inputs)| {
            let machine = builtin_machine(name)?;
            let runs = inputs
                .iter()
                .map(|input| session.run_machine(&machine, input))
                .collect::<Result<Vec<_>>>()?;
            Ok(MachineDemo { title, machine, runs })
        })
        .collect()
}

/// Evaluation failures are rows of the table; a bad expression is an error.
pub fn arithmetic_table(session: &Session) -> Result<Vec<ArithRow>> {
    let ev = match session.conf.search_limit {
        | Some(_) => session.evaluator(),
        | None => calculi_mu::Evaluator::with_search_limit(DEMO_SEARCH_LIMIT),
    };
    ARITHMETIC
        .iter()
        .map(|&(label, expr, args)| {
            let func = session.parse(expr)?;
            Ok(ArithRow { label, value: ev.evaluate(&func, args) })
        })
        .collect()
}
