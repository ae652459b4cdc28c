use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "facture")]
#[command(about = "Textbook order form and invoice generator", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the textbooks that can be ordered
    Catalog,

    /// Print the live total of an order file
    Total {
        /// Order JSON: { "clientName": ..., "lines": [{ "itemId": ..., "quantity": ... }] }
        #[arg(long)]
        order: PathBuf,
    },

    /// Validate an order file and write the invoice PDF
    Render {
        #[arg(long)]
        order: PathBuf,

        /// Output file or directory (default: download directory)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Fill in the order form interactively
    Session {
        /// Output file or directory (default: download directory)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}
