use crate::syntax::*;

/// An unbounded tape as two stacks around the head.
///
/// Reading past either end yields [`Symbol::Blank`]. A cell becomes part of the
/// tape once the head has visited it and stays there even if nothing was ever
/// written to it. Every operation returns a new tape; the old one stays valid
/// and shares its cells with the new one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tape {
    /// cells left of the head, nearest last
    left: im::Vector<Symbol>,
    head: Symbol,
    /// cells right of the head, nearest first
    right: im::Vector<Symbol>,
}

/// One cell of a rendered tape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub symbol: Symbol,
    pub head: bool,
}

impl Default for Tape {
    fn default() -> Self {
        Tape { left: im::Vector::new(), head: Symbol::Blank, right: im::Vector::new() }
    }
}

impl FromIterator<Symbol> for Tape {
    fn from_iter<I: IntoIterator<Item = Symbol>>(iter: I) -> Self {
        Tape::new(iter)
    }
}

impl Tape {
    /// The first symbol goes under the head and the rest to its right, in order.
    pub fn new(symbols: impl IntoIterator<Item = Symbol>) -> Self {
        let mut symbols = symbols.into_iter();
        match symbols.next() {
            | Some(head) => Tape { left: im::Vector::new(), head, right: symbols.collect() },
            | None => Tape::default(),
        }
    }
    pub fn read(&self) -> Symbol {
        self.head
    }
    pub fn write(&self, write: Write) -> Tape {
        match write {
            | Write::Keep => self.clone(),
            | Write::Put(symbol) => self.put(symbol),
        }
    }
    pub fn put(&self, symbol: Symbol) -> Tape {
        Tape { head: symbol, ..self.clone() }
    }
    pub fn shift(&self, movement: Move) -> Tape {
        let Tape { mut left, head, mut right } = self.clone();
        match movement {
            | Move::Left => {
                right.push_front(head);
                let head = left.pop_back().unwrap_or(Symbol::Blank);
                Tape { left, head, right }
            }
            | Move::Right => {
                left.push_back(head);
                let head = right.pop_front().unwrap_or(Symbol::Blank);
                Tape { left, head, right }
            }
            | Move::Stay => Tape { left, head, right },
        }
    }
    /// Every materialised cell, left to right.
    pub fn cells(&self) -> Vec<Cell> {
        let left = self.left.iter().map(|&symbol| Cell { symbol, head: false });
        let head = std::iter::once(Cell { symbol: self.head, head: true });
        let right = self.right.iter().map(|&symbol| Cell { symbol, head: false });
        left.chain(head).chain(right).collect()
    }
    /// The cells from the leftmost to the rightmost non-blank one, widened
    /// just enough to keep the head in view.
    pub fn display_sequence(&self) -> Vec<Cell> {
        let cells = self.cells();
        let keep = |cell: &Cell| cell.head || cell.symbol != Symbol::Blank;
        let Some(start) = cells.iter().position(keep) else { return Vec::new() };
        let end = cells.iter().rposition(keep).map_or(start, |end| end + 1);
        cells[start..end].to_vec()
    }
    /// The written symbols between the leftmost and the rightmost non-blank
    /// cell, regardless of where the head is.
    pub fn contents(&self) -> Vec<Symbol> {
        let cells = self.cells();
        let written = |cell: &Cell| cell.symbol != Symbol::Blank;
        let Some(start) = cells.iter().position(written) else { return Vec::new() };
        let end = cells.iter().rposition(written).map_or(start, |end| end + 1);
        cells[start..end].iter().map(|cell| cell.symbol).collect()
    }
    /// Same visible content with the head on the same cell; materialised
    /// blanks at the edges do not count.
    pub fn equivalent(&self, other: &Tape) -> bool {
        self.display_sequence() == other.display_sequence()
    }
}
