use thiserror::Error;

/// A combinator was given operands whose arities do not line up.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArityMismatch {
    #[error("projection index {index} is out of range for {arity} arguments")]
    Projection { arity: usize, index: usize },
    #[error("substitution needs at least one inner function")]
    EmptySubstitution,
    #[error("outer function takes {expected} arguments but {found} inner functions were given")]
    SubstitutionOuter { expected: usize, found: usize },
    #[error("inner function #{position} takes {found} arguments, expected {expected}")]
    SubstitutionInner { position: usize, expected: usize, found: usize },
    #[error("recursion step takes {found} arguments, expected {expected}")]
    RecursionStep { expected: usize, found: usize },
    #[error("minimisation needs a function of at least one argument")]
    Minimisation,
    #[error("function takes {expected} arguments but {found} were given")]
    Arguments { expected: usize, found: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MuError {
    #[error("arity mismatch: {0}")]
    ArityMismatch(#[from] ArityMismatch),
    #[error("minimisation gave up after {limit} candidates")]
    SearchLimitExceeded { limit: u64 },
    #[error("natural number overflow")]
    Overflow,
    #[error("function expression nests deeper than {limit} levels")]
    TooDeep { limit: usize },
}

pub type Result<T> = std::result::Result<T, MuError>;
