//! Arithmetic built from nothing but the elementary functions and the
//! combinators, plus a named collection of them.

use crate::{err::Result, registry::*, syntax::Func};

/// `constant_n(x_1, .., x_k) = n`
pub fn constant(n: u64, arity: usize) -> Result<Func> {
    let mut f = zero(arity);
    for _ in 0..n {
        f = substitution(successor(), [f])?;
    }
    Ok(f)
}

/// `sum(x, y) = x + y`
pub fn sum() -> Result<Func> {
    // sum(0, y) = y; sum(x + 1, y) = succ(sum(x, y))
    primitive_recursion(projection(1, 1)?, substitution(successor(), [projection(3, 2)?])?)
}

/// `pred(x) = x - 1`, and `pred(0) = 0`
pub fn pred() -> Result<Func> {
    primitive_recursion(zero(0), projection(2, 1)?)
}

/// `sub1(y, x) = x - y`, floored at zero
pub fn sub1() -> Result<Func> {
    primitive_recursion(projection(1, 1)?, substitution(pred()?, [projection(3, 2)?])?)
}

/// `sub(x, y) = x - y`, floored at zero
pub fn sub() -> Result<Func> {
    substitution(sub1()?, [projection(2, 2)?, projection(2, 1)?])
}

/// `mul(x, y) = x * y`
pub fn mul() -> Result<Func> {
    // mul(x + 1, y) = sum(mul(x, y), y)
    let step = substitution(sum()?, [projection(3, 2)?, projection(3, 3)?])?;
    primitive_recursion(zero(1), step)
}

/// `sgn(x)` is 0 for 0 and 1 otherwise
pub fn sgn() -> Result<Func> {
    primitive_recursion(zero(0), constant(1, 2)?)
}

/// `cosgn(x)` is 1 for 0 and 0 otherwise
pub fn cosgn() -> Result<Func> {
    primitive_recursion(constant(1, 0)?, zero(2))
}

/// `lt(x, y)` is 1 iff `x < y`
pub fn lt() -> Result<Func> {
    let flipped = substitution(sub()?, [projection(2, 2)?, projection(2, 1)?])?;
    substitution(sgn()?, [flipped])
}

/// `gt(x, y)` is 1 iff `x > y`
pub fn gt() -> Result<Func> {
    substitution(sgn()?, [sub()?])
}

/// `eq(x, y)` is 1 iff `x = y`
pub fn eq() -> Result<Func> {
    let either = substitution(sum()?, [lt()?, gt()?])?;
    substitution(cosgn()?, [either])
}

/// `neq(x, y)` is 1 iff `x != y`
pub fn neq() -> Result<Func> {
    substitution(cosgn()?, [eq()?])
}

/// `square(x) = x * x`
pub fn square() -> Result<Func> {
    substitution(mul()?, [projection(1, 1)?, projection(1, 1)?])
}

/// `sqrt(x)` is the natural `z` with `z * z = x`. Undefined, so the search
/// never ends, when `x` is not a perfect square.
pub fn sqrt() -> Result<Func> {
    let z_squared = substitution(square()?, [projection(2, 1)?])?;
    minimisation(substitution(neq()?, [z_squared, projection(2, 2)?])?)
}

/// Named functions, kept in name order.
#[derive(Clone, Debug, Default)]
pub struct Library {
    defs: im::OrdMap<String, Func>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }
    /// Everything in this module under its own name.
    pub fn standard() -> Result<Self> {
        let mut lib = Library::new();
        lib.define("zero", zero(1));
        lib.define("succ", successor());
        for (name, f) in [
            ("sum", sum as fn() -> Result<Func>),
            ("pred", pred),
            ("sub1", sub1),
            ("sub", sub),
            ("mul", mul),
            ("sgn", sgn),
            ("cosgn", cosgn),
            ("lt", lt),
            ("gt", gt),
            ("eq", eq),
            ("neq", neq),
            ("square", square),
            ("sqrt", sqrt),
        ] {
            lib.define(name, f()?);
        }
        Ok(lib)
    }
    /// Bind `name`, returning whatever it was bound to before.
    pub fn define(&mut self, name: impl Into<String>, func: Func) -> Option<Func> {
        self.defs.insert(name.into(), func)
    }
    pub fn get(&self, name: &str) -> Option<&Func> {
        self.defs.get(name)
    }
    pub fn contains(&self, name: &str) -> bool {
        self.defs.contains_key(name)
    }
    pub fn len(&self) -> usize {
        self.defs.len()
    }
    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Func)> {
        self.defs.iter()
    }
}
