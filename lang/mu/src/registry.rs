//! The elementary functions and the three combinators.
//!
//! These are the only ways to build a [`Func`]. Arity problems are reported
//! here, before anything is evaluated.

use crate::{
    err::{ArityMismatch, MuError, Result},
    syntax::*,
};

fn combine(arity: usize, kind: impl Into<FuncKind>) -> Result<Func> {
    let func = Func::new(arity, kind);
    if func.depth() > MAX_DEPTH {
        Err(MuError::TooDeep { limit: MAX_DEPTH })?
    }
    Ok(func)
}

pub fn zero(arity: usize) -> Func {
    Func::new(arity, Zero { arity })
}

pub fn successor() -> Func {
    Func::new(1, Succ)
}

/// Picks argument `index` out of `arity`; `1 <= index <= arity`.
pub fn projection(arity: usize, index: usize) -> Result<Func> {
    if index == 0 || index > arity {
        Err(ArityMismatch::Projection { arity, index })?
    }
    Ok(Func::new(arity, Proj { arity, index }))
}

/// Feeds the results of `inner` to `outer`. `outer` must take one argument
/// per inner function, and the inner functions must all take the same number
/// of arguments, which becomes the arity of the result.
pub fn substitution(outer: Func, inner: impl IntoIterator<Item = Func>) -> Result<Func> {
    let inner: Vec<Func> = inner.into_iter().collect();
    let Some(first) = inner.first() else { return Err(ArityMismatch::EmptySubstitution.into()) };
    let arity = first.arity();
    if outer.arity() != inner.len() {
        Err(ArityMismatch::SubstitutionOuter { expected: outer.arity(), found: inner.len() })?
    }
    for (position, g) in inner.iter().enumerate() {
        if g.arity() != arity {
            let (expected, found) = (arity, g.arity());
            Err(ArityMismatch::SubstitutionInner { position: position + 1, expected, found })?
        }
    }
    combine(arity, Subst { outer, inner })
}

/// Recursion on the first argument: `base` takes `k` arguments, `step` takes
/// `k + 2` (the counter, the previous result, then the rest), and the result
/// takes `k + 1`.
pub fn primitive_recursion(base: Func, step: Func) -> Result<Func> {
    let expected = base.arity() + 2;
    if step.arity() != expected {
        Err(ArityMismatch::RecursionStep { expected, found: step.arity() })?
    }
    combine(base.arity() + 1, Rec { base, step })
}

/// Unbounded search on the first argument of `body`.
pub fn minimisation(body: Func) -> Result<Func> {
    let Some(arity) = body.arity().checked_sub(1) else {
        return Err(ArityMismatch::Minimisation.into());
    };
    combine(arity, Min { body })
}
