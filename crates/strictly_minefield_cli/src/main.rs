//! Strictly Minefield - terminal game.

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use strictly_minefield_cli::{Cli, run};
use tracing_subscriber::EnvFilter;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut stdout = std::io::stdout();
    let outcome = run(&cli, &mut stdout)?;
    Ok(outcome.exit_code())
}
