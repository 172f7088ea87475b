use calculi_mu::{MuError, ParseError};
use calculi_turing::TuringError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DriverError {
    #[error("File not found: `{}`", .0.display())]
    FileNotFound(PathBuf),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Invalid TOML: {0}")]
    TomlError(#[from] toml::de::Error),
    #[error("State `{0}` is not declared")]
    UnknownState(String),
    #[error("State `{0}` is declared twice")]
    DuplicateState(String),
    #[error("Expected a single character, found `{0}`")]
    NotASymbol(String),
    #[error("No built-in machine named `{0}`")]
    UnknownBuiltin(String),
    #[error("{0}")]
    TuringError(#[from] TuringError),
    #[error("{0}")]
    MuError(#[from] MuError),
    #[error("Parse error:\n\t{0}")]
    ParseError(#[from] ParseError),
}

pub type Result<T> = std::result::Result<T, DriverError>;
