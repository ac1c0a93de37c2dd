use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use covbadge::cli;

/// covbadge — Generate JaCoCo coverage badges for CI pipelines.
#[derive(Parser)]
#[command(name = "covbadge", version, about)]
struct Cli {
    /// Path to the jacoco.csv coverage report.
    report: PathBuf,

    /// Output path prefix for the generated badge files (e.g. "badges/").
    output_prefix: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let output = cli::cmd_generate(&cli.report, &cli.output_prefix)
        .context("Failed to generate coverage badges")?;
    print!("{}", output);

    Ok(())
}
