use crate::{
    err::{ArityMismatch, MuError, Result},
    syntax::*,
};
use calculi_utils::fuel::Fuel;

/// Evaluates function expressions on natural numbers.
///
/// Nothing is memoised; shared subtrees are evaluated again wherever they
/// occur. Minimisation searches without end unless a search limit is set.
#[derive(Clone, Copy, Debug, Default)]
pub struct Evaluator {
    search_limit: Option<u64>,
}

impl Evaluator {
    pub fn new() -> Self {
        Evaluator { search_limit: None }
    }
    /// Any single minimisation that tries `limit` candidates without finding
    /// a zero fails with [`MuError::SearchLimitExceeded`].
    pub fn with_search_limit(limit: u64) -> Self {
        Evaluator { search_limit: Some(limit) }
    }
    pub fn search_limit(&self) -> Option<u64> {
        self.search_limit
    }
    pub fn evaluate(&self, func: &Func, args: &[u64]) -> Result<u64> {
        if func.arity() != args.len() {
            Err(ArityMismatch::Arguments { expected: func.arity(), found: args.len() })?
        }
        self.apply(func, args)
    }
    fn apply(&self, func: &Func, args: &[u64]) -> Result<u64> {
        match func.kind() {
            | FuncKind::Zero(Zero { .. }) => Ok(0),
            | FuncKind::Succ(Succ) => args[0].checked_add(1).ok_or(MuError::Overflow),
            | FuncKind::Proj(Proj { index, .. }) => Ok(args[index - 1]),
            | FuncKind::Subst(Subst { outer, inner }) => {
                let args = inner.iter().map(|g| self.apply(g, args)).collect::<Result<Vec<_>>>()?;
                self.apply(outer, &args)
            }
            | FuncKind::Rec(Rec { base, step }) => {
                let [y, xs @ ..] = args else { unreachable!("recursion takes a counter") };
                // bottom-up from zero, the same values the recursive definition gives
                let mut acc = self.apply(base, xs)?;
                let mut buf = Vec::with_capacity(args.len() + 1);
                for i in 0..*y {
                    buf.clear();
                    buf.push(i);
                    buf.push(acc);
                    buf.extend_from_slice(xs);
                    acc = self.apply(step, &buf)?;
                }
                Ok(acc)
            }
            | FuncKind::Min(Min { body }) => {
                let mut fuel = Fuel::new(self.search_limit);
                let mut buf = Vec::with_capacity(args.len() + 1);
                buf.push(0);
                buf.extend_from_slice(args);
                loop {
                    fuel.burn().map_err(|e| MuError::SearchLimitExceeded { limit: e.limit })?;
                    let value = self.apply(body, &buf)?;
                    log::trace!("minimisation candidate {} gives {}", buf[0], value);
                    if value == 0 {
                        break Ok(buf[0]);
                    }
                    buf[0] = buf[0].checked_add(1).ok_or(MuError::Overflow)?;
                }
            }
        }
    }
}
