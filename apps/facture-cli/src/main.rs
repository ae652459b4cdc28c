//! # Facture Entry Point
//!
//! ## Startup Sequence
//! 1. Parse arguments
//! 2. Initialize tracing (stderr)
//! 3. Load configuration (`FACTURE_*`, `--output`)
//! 4. Dispatch the subcommand

use std::process::ExitCode;

use clap::Parser;
use facture_cli::cli::Cli;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    // The actual dispatch is in lib.rs for testability
    facture_cli::init_tracing();
    facture_cli::run(cli)
}
