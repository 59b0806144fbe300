//! Command-line interface for screensage.
//!
//! ## Commands
//!
//! - **`init`**: interactive configuration wizard, or `--delete` to reset
//! - **`predict`**: run every predictor against a usage history file
//! - **`patterns`**: show the statistics extracted from a usage history file
//! - **`export`**: write predictions, patterns or feedback to CSV/JSON

pub mod export;
pub mod init;
pub mod patterns;
pub mod predict;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Generate predictions for the current usage")]
    Predict(predict::PredictArgs),
    #[command(about = "Show usage patterns extracted from history")]
    Patterns(patterns::PatternsArgs),
    #[command(about = "Export predictions, patterns or feedback")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Predict(args) => predict::cmd(args),
            Commands::Patterns(args) => patterns::cmd(args),
            Commands::Export(args) => export::cmd(args),
        }
    }
}
