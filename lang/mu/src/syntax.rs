use derive_more::From;
use std::rc::Rc;

/* ------------------------------- Elementary ------------------------------- */

/// `zero(x_1, .., x_k) = 0`
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Zero {
    pub arity: usize,
}
/// `succ(x) = x + 1`
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Succ;
/// `proj_i(x_1, .., x_k) = x_i`, counting from one
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Proj {
    pub arity: usize,
    pub index: usize,
}

/* ------------------------------- Combinators ------------------------------ */

/// `h(g_1(xs), .., g_m(xs))`
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Subst {
    pub outer: Func,
    pub inner: Vec<Func>,
}
/// `f(0, xs) = base(xs)`, `f(y + 1, xs) = step(y, f(y, xs), xs)`
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Rec {
    pub base: Func,
    pub step: Func,
}
/// the least `z` with `body(z, xs) = 0`
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Min {
    pub body: Func,
}

#[derive(From, Clone, Debug, Hash, PartialEq, Eq)]
pub enum FuncKind {
    Zero(Zero),
    Succ(Succ),
    Proj(Proj),
    Subst(Subst),
    Rec(Rec),
    Min(Min),
}

/* ---------------------------------- Func ---------------------------------- */

/// Trees deeper than this are refused when built or parsed; evaluating,
/// printing and dropping them all recurse once per level.
pub const MAX_DEPTH: usize = 256;

/// A function expression whose arities are known to line up.
///
/// Only the constructors in [`crate::registry`] make these, and each of them
/// checks its operands, so an ill-formed tree cannot exist. Cloning is cheap;
/// subtrees are shared.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Func {
    arity: usize,
    depth: usize,
    kind: Rc<FuncKind>,
}

impl Func {
    pub(crate) fn new(arity: usize, kind: impl Into<FuncKind>) -> Self {
        let kind = kind.into();
        let below = match &kind {
            | FuncKind::Zero(_) | FuncKind::Succ(_) | FuncKind::Proj(_) => 0,
            | FuncKind::Subst(Subst { outer, inner }) => {
                inner.iter().map(Func::depth).fold(outer.depth, usize::max)
            }
            | FuncKind::Rec(Rec { base, step }) => base.depth.max(step.depth),
            | FuncKind::Min(Min { body }) => body.depth,
        };
        Func { arity, depth: below + 1, kind: Rc::new(kind) }
    }
    pub fn arity(&self) -> usize {
        self.arity
    }
    /// Nodes on the longest path from the root down to an elementary function.
    pub fn depth(&self) -> usize {
        self.depth
    }
    pub fn kind(&self) -> &FuncKind {
        &self.kind
    }
}
