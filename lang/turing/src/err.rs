use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TuringError {
    #[error("`{0}` is reserved for instruction wildcards and cannot be a tape symbol")]
    ReservedSymbol(char),
    #[error("unknown head movement `{0}`; expected `L`, `R`, `0` or `S`")]
    UnknownMove(char),
}

pub type Result<T> = std::result::Result<T, TuringError>;
