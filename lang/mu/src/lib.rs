//! Mu-recursive functions over the naturals.
//!
//! Functions are built from [`zero`], [`successor`] and [`projection`] with
//! the combinators [`substitution`], [`primitive_recursion`] and
//! [`minimisation`], each of which checks arities up front. The
//! [`Evaluator`] computes them; [`library`] derives ordinary arithmetic;
//! [`parse`] reads them from text.

#![allow(clippy::style)]

pub mod err;
pub mod syntax;
pub mod registry;
pub mod eval;
pub mod library;
pub mod lexer;
pub mod parse;
pub mod fmt;

pub use err::{ArityMismatch, MuError, Result};
pub use eval::Evaluator;
pub use library::Library;
pub use parse::{ParseError, parse_func, parse_library};
pub use registry::*;
pub use syntax::{Func, FuncKind, MAX_DEPTH};

/// Evaluate `func` on `args` with no bound on minimisation. May not return
/// if a search never finds a zero.
pub fn evaluate_mu_recursive(func: &Func, args: &[u64]) -> Result<u64> {
    Evaluator::new().evaluate(func, args)
}
