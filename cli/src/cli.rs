use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "calculi", version, about, long_about = None)]
pub struct Cli {
    /// Configuration file setting `step_limit` and `search_limit`
    #[arg(long, global = true, value_name = "FILE")]
    pub conf: Option<PathBuf>,
    /// Level of verbosity
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a Turing machine
    Tm {
        #[command(flatten)]
        source: Source,
        /// Initial tape, one symbol per character; `#` is blank
        #[arg(short, long, default_value = "")]
        input: String,
        /// Give up after this many steps
        #[arg(long)]
        step_limit: Option<u64>,
    },
    /// Evaluate a mu-recursive function
    Mu {
        /// Function expression or library name, e.g. `sum` or `comp(succ, proj(2, 1))`
        expr: String,
        /// Natural number arguments
        args: Vec<u64>,
        /// Files of `def NAME = EXPR;` to load first
        #[arg(long, value_name = "FILE")]
        defs: Vec<PathBuf>,
        /// Give up on a minimisation after this many candidates
        #[arg(long)]
        search_limit: Option<u64>,
    },
    /// Run the bundled demonstrations
    Demo,
}

#[derive(Args)]
#[group(required = true, multiple = false)]
pub struct Source {
    /// Machine description file
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
    /// Bundled machine: `reverse` or `anbncn`
    #[arg(long, value_name = "NAME")]
    pub builtin: Option<String>,
}
