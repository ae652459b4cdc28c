//! # Facture CLI Library
//!
//! Presentation layer of the textbook invoice generator: owns the order
//! being edited, shows the live total and writes `facture.pdf`.
//!
//! ## Module Organization
//! ```text
//! facture_cli/
//! ├── lib.rs          ◄─── You are here (tracing setup & dispatch)
//! ├── cli.rs          ◄─── clap argument definitions
//! ├── session.rs      ◄─── Interactive form loop
//! ├── view.rs         ◄─── Terminal output
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── order.rs    ◄─── OrderSession (form + last invoice)
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── catalog.rs  ◄─── Textbook picker
//! │   ├── order.rs    ◄─── Form edits and order files
//! │   └── invoice.rs  ◄─── Submission and PDF output
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  edit ──► OrderSession ──► compute_total ──► "Total de la commande"     │
//! │                 │                                                       │
//! │              submit                                                     │
//! │                 ▼                                                       │
//! │  validate_order ──► render_with_style ──► to_pdf ──► facture.pdf        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod session;
pub mod state;
pub mod view;

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use chrono::Local;
use facture_core::Catalog;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};
use commands::{catalog, invoice, order};
use error::ErrorCode;
use state::{ConfigState, OrderSession};

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=facture=debug` - Show every command
/// - Default: warnings, plus info from the facture crates
///
/// Logs go to stderr so command output on stdout stays clean.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,facture=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Runs one CLI invocation.
pub fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let textbooks = Catalog::textbooks();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Catalog => {
            view::write_catalog(&mut out, &catalog::list_catalog(textbooks))?;
        }

        Command::Total { order: path } => {
            let loaded = order::load_order(&path)
                .with_context(|| format!("Could not load order {}", path.display()))?;
            writeln!(out, "{}", order::format_total(loaded.total(textbooks)))?;
        }

        Command::Render {
            order: path,
            output,
        } => {
            let loaded = order::load_order(&path)
                .with_context(|| format!("Could not load order {}", path.display()))?;
            let config = ConfigState::from_env().with_output(output.as_deref());

            match invoice::render_order(loaded, textbooks, &config, &Local::now()) {
                Ok(response) => {
                    writeln!(out, "{}", response.path.display())?;
                }
                Err(err) if err.code == ErrorCode::ValidationError => {
                    view::write_error(&mut io::stderr(), &err)?;
                    return Ok(ExitCode::FAILURE);
                }
                Err(err) => return Err(err.into()),
            }
        }

        Command::Session { output } => {
            let config = ConfigState::from_env().with_output(output.as_deref());
            info!(output = %config.output_path().display(), "Starting order session");

            let mut session = OrderSession::new();
            session::run_session(io::stdin().lock(), &mut out, &mut session, textbooks, &config)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
