//! Data export command.
//!
//! Writes the result of an analysis run to a file for external tooling.
//!
//! ## Data Types
//!
//! - **predictions**: the predictions of one run
//! - **patterns**: the statistics extracted from the history
//! - **learning**: feedback recorded with `--feedback`

use super::predict::UsageArgs;
use crate::{
    libs::{
        config::Config,
        export::{ExportData, ExportFormat, Exporter},
        history::History,
        messages::Message,
        patterns::extract_patterns_with_peaks,
    },
    msg_bail_anyhow, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[command(flatten)]
    usage: UsageArgs,

    /// Type of data to export
    #[arg(long, value_enum, default_value = "predictions")]
    data: ExportData,

    /// Output format for the exported data
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    /// Output file path; defaults to `screensage_export_<timestamp>.<ext>`
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    if args.data == ExportData::Learning && args.usage.feedback.is_none() {
        msg_bail_anyhow!(Message::ExportNothing);
    }

    let exporter = Exporter::new(args.format, args.output);

    match args.data {
        ExportData::Predictions => {
            let analysis = args.usage.analyze()?;
            exporter.export_predictions(&analysis.predictions)?;
        }
        ExportData::Patterns => {
            let config = Config::read()?;
            let history = History::load(&args.usage.history)?;
            let patterns = extract_patterns_with_peaks(&history, config.predictor_config().peak_hours)?;
            exporter.export_patterns(&patterns)?;
        }
        ExportData::Learning => {
            let analysis = args.usage.analyze()?;
            exporter.export_learning(analysis.predictor.learning_data())?;
        }
    }

    msg_success!(Message::ExportCompleted(exporter.output_path().display().to_string()));
    Ok(())
}
