use clap::{CommandFactory, ValueEnum};
use clap_complete::{Shell, generate_to};
use std::io;

include!("src/cli.rs");

fn main() -> Result<(), io::Error> {
    println!("cargo:rerun-if-changed=src/cli.rs");
    let mut app = Cli::command();

    let outdir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("completions");
    std::fs::create_dir_all(&outdir)?;
    for &shell in Shell::value_variants() {
        generate_to(shell, &mut app, "calculi", &outdir)?;
    }

    Ok(())
}
