pub mod cli;
pub mod print;

pub use cli::{Cli, Commands, Source};
