use crate::err::{Result, TuringError};
use calculi_utils::arena::{ArenaDense, new_key_type};

/// Printed form of [`Symbol::Blank`].
pub const BLANK: char = '#';
/// Printed form of the read and write wildcards.
pub const WILDCARD: char = '?';

/* --------------------------------- Symbol --------------------------------- */

/// A tape cell. The wildcard is not a symbol, so it can never land on a tape.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Symbol {
    Blank,
    Mark(char),
}

impl Symbol {
    pub fn parse(c: char) -> Result<Symbol> {
        match c {
            | BLANK => Ok(Symbol::Blank),
            | WILDCARD => Err(TuringError::ReservedSymbol(c)),
            | c => Ok(Symbol::Mark(c)),
        }
    }
    pub fn as_char(&self) -> char {
        match self {
            | Symbol::Blank => BLANK,
            | Symbol::Mark(c) => *c,
        }
    }
    /// Parse every non-whitespace character of `s` as one symbol.
    pub fn parse_all(s: &str) -> Result<Vec<Symbol>> {
        s.chars().filter(|c| !c.is_whitespace()).map(Symbol::parse).collect()
    }
}

/* ------------------------------- Instruction ------------------------------ */

/// What an instruction expects under the head.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Read {
    Any,
    Is(Symbol),
}

impl From<Symbol> for Read {
    fn from(symbol: Symbol) -> Self {
        Read::Is(symbol)
    }
}

impl Read {
    pub fn parse(c: char) -> Result<Read> {
        match c {
            | WILDCARD => Ok(Read::Any),
            | c => Symbol::parse(c).map(Read::Is),
        }
    }
    pub fn matches(&self, symbol: Symbol) -> bool {
        match self {
            | Read::Any => true,
            | Read::Is(expected) => *expected == symbol,
        }
    }
}

/// What an instruction leaves under the head.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Write {
    Keep,
    Put(Symbol),
}

impl From<Symbol> for Write {
    fn from(symbol: Symbol) -> Self {
        Write::Put(symbol)
    }
}

impl Write {
    pub fn parse(c: char) -> Result<Write> {
        match c {
            | WILDCARD => Ok(Write::Keep),
            | c => Symbol::parse(c).map(Write::Put),
        }
    }
}

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Move {
    Left,
    Right,
    Stay,
}

impl Move {
    pub fn parse(c: char) -> Result<Move> {
        match c {
            | 'L' | 'l' => Ok(Move::Left),
            | 'R' | 'r' => Ok(Move::Right),
            | '0' | 'S' | 's' => Ok(Move::Stay),
            | c => Err(TuringError::UnknownMove(c)),
        }
    }
}

new_key_type! {
    pub struct StateId;
}

#[derive(Clone, Debug)]
pub struct StateInfo {
    pub name: String,
    pub is_final: bool,
}

/// `(from, read) -> (to, write, movement)`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Instruction {
    pub from: StateId,
    pub read: Read,
    pub to: StateId,
    pub write: Write,
    pub movement: Move,
}

/* --------------------------------- Program -------------------------------- */

/// The states of a machine together with its ordered instruction table.
///
/// States are compared by the id the program hands out, never by name; two
/// states declared with the same name are still different states.
#[derive(Clone, Debug, Default)]
pub struct Program {
    pub states: ArenaDense<StateId, StateInfo>,
    pub instructions: Vec<Instruction>,
}

impl Program {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn state(&mut self, name: impl Into<String>) -> StateId {
        self.states.alloc(StateInfo { name: name.into(), is_final: false })
    }
    pub fn final_state(&mut self, name: impl Into<String>) -> StateId {
        self.states.alloc(StateInfo { name: name.into(), is_final: true })
    }
    /// Append an instruction; order is significant, see [`Program::find_match`].
    pub fn instruction(
        &mut self, from: StateId, read: impl Into<Read>, to: StateId, write: impl Into<Write>,
        movement: Move,
    ) -> &mut Self {
        let (read, write) = (read.into(), write.into());
        self.instructions.push(Instruction { from, read, to, write, movement });
        self
    }
    pub fn is_final(&self, state: StateId) -> bool {
        self.states[&state].is_final
    }
    pub fn name(&self, state: StateId) -> &str {
        &self.states[&state].name
    }
    /// The first declared state carrying `name`.
    pub fn lookup(&self, name: &str) -> Option<StateId> {
        self.states.iter().find(|(_, info)| info.name == name).map(|(id, _)| id)
    }
    /// The first instruction, in table order, whose source state is `state` and
    /// whose read field accepts `symbol`.
    ///
    /// A wildcard rule shadows every later rule for the same state, so specific
    /// rules have to be listed first. Nothing checks for this.
    pub fn find_match(&self, state: StateId, symbol: Symbol) -> Option<&Instruction> {
        self.instructions.iter().find(|ins| ins.from == state && ins.read.matches(symbol))
    }
}
