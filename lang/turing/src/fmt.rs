//! Textual views of tapes and instructions.

use crate::{syntax::*, tape::*};
use std::fmt;

/// Formatting that needs the program around it, e.g. to name states.
pub trait Ugly<'a, Fmter> {
    fn ugly(&self, f: &'a Fmter) -> String;
}

pub struct Formatter<'a> {
    program: &'a Program,
}
impl<'a> Formatter<'a> {
    pub fn new(program: &'a Program) -> Self {
        Formatter { program }
    }
}

impl<'a> Ugly<'a, Formatter<'a>> for StateId {
    fn ugly(&self, f: &'a Formatter) -> String {
        f.program.name(*self).to_string()
    }
}

impl<'a> Ugly<'a, Formatter<'a>> for Instruction {
    fn ugly(&self, f: &'a Formatter) -> String {
        let Instruction { from, read, to, write, movement } = self;
        format!("({}, {}) -> ({}, {}, {})", from.ugly(f), read, to.ugly(f), write, movement)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl fmt::Display for Read {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            | Read::Any => write!(f, "{}", WILDCARD),
            | Read::Is(symbol) => write!(f, "{}", symbol),
        }
    }
}

impl fmt::Display for Write {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            | Write::Keep => write!(f, "{}", WILDCARD),
            | Write::Put(symbol) => write!(f, "{}", symbol),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            | Move::Left => 'L',
            | Move::Right => 'R',
            | Move::Stay => '0',
        };
        write!(f, "{}", c)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.head { write!(f, "[{}]", self.symbol) } else { write!(f, "{}", self.symbol) }
    }
}

/// Cells separated by spaces with the head in brackets, e.g. `# a [b] c`.
impl fmt::Display for Tape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells = self.cells().iter().map(Cell::to_string).collect::<Vec<_>>();
        write!(f, "{}", cells.join(" "))
    }
}
