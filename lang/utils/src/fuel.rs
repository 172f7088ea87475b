//! Caller-imposed bounds on evaluation.
//!
//! Neither evaluator bounds itself. A caller that wants an answer in finite
//! time hands one of these in and gets [`Exhausted`] back instead of a hang.

/// The result of a single small step.
pub enum Step<T, Out> {
    Done(Out),
    Step(T),
}

/// The bound ran out before evaluation finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Exhausted {
    pub limit: u64,
}

/// A countdown of permitted steps; `None` means unbounded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Fuel {
    limit: Option<u64>,
    spent: u64,
}

impl Fuel {
    pub fn unbounded() -> Self {
        Fuel { limit: None, spent: 0 }
    }
    pub fn limited(limit: u64) -> Self {
        Fuel { limit: Some(limit), spent: 0 }
    }
    pub fn new(limit: Option<u64>) -> Self {
        Fuel { limit, spent: 0 }
    }
    pub fn limit(&self) -> Option<u64> {
        self.limit
    }
    pub fn spent(&self) -> u64 {
        self.spent
    }
    /// Spend one unit.
    pub fn burn(&mut self) -> Result<(), Exhausted> {
        if let Some(limit) = self.limit {
            if self.spent >= limit {
                log::warn!("bound of {} exhausted", limit);
                return Err(Exhausted { limit });
            }
        }
        self.spent += 1;
        Ok(())
    }
}
