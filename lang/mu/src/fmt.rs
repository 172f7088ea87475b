//! Prints function expressions in the syntax [`crate::parse`] reads.
//!
//! Names are not kept in the tree, so library functions print fully
//! expanded.

use crate::syntax::*;
use std::fmt::{Display, Formatter, Result};

impl Display for Func {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self.kind() {
            | FuncKind::Zero(Zero { arity }) => write!(f, "zero({})", arity),
            | FuncKind::Succ(Succ) => write!(f, "succ"),
            | FuncKind::Proj(Proj { arity, index }) => write!(f, "proj({}, {})", arity, index),
            | FuncKind::Subst(Subst { outer, inner }) => {
                write!(f, "comp({}", outer)?;
                for g in inner {
                    write!(f, ", {}", g)?;
                }
                write!(f, ")")
            }
            | FuncKind::Rec(Rec { base, step }) => write!(f, "rec({}, {})", base, step),
            | FuncKind::Min(Min { body }) => write!(f, "min({})", body),
        }
    }
}
