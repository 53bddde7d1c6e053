use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser as _;
use tracing::Level;

/// Runs a binalg program and prints each `print` result in binary.
#[derive(clap::Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Program file to run.
    #[arg(default_value = "binfile.txt")]
    path: PathBuf,
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let source = fs::read_to_string(&args.path)
        .with_context(|| format!("failed to read program file '{}'", args.path.display()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match binalg::execute(&source, &mut out) {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            tracing::warn!(kind = ?err.classify(), "program failed");
            writeln!(out, "{}", err.diagnostic())?;
            Ok(ExitCode::FAILURE)
        }
    }
}
