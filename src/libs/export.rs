//! Export of predictions, patterns and learning feedback.
//!
//! ## Features
//!
//! - **Export Formats**: CSV for spreadsheets, pretty JSON for tooling
//! - **Data Types**: prediction lists, extracted usage patterns, learning log
//! - **File Naming**: `screensage_export_<YYYYmmdd_HHMMSS>.<ext>` unless a
//!   path is given
//!
//! ## Usage
//!
//! ```rust,no_run
//! use screensage::libs::export::{ExportFormat, Exporter};
//!
//! let exporter = Exporter::new(ExportFormat::Json, None);
//! exporter.export_predictions(&[])?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::libs::formatter::format_hour;
use crate::libs::messages::Message;
use crate::libs::patterns::UsagePatterns;
use crate::libs::prediction::{LearningEntry, Prediction};
use crate::msg_debug;
use anyhow::Result;
use chrono::Local;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Supported export output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values, one row per item
    Csv,
    /// Pretty-printed JSON mirroring the in-memory structures
    Json,
}

/// Data types available for export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportData {
    /// Predictions of one analysis run
    Predictions,
    /// Patterns extracted from the usage history
    Patterns,
    /// Feedback recorded for the predictions
    Learning,
}

/// Writes analysis results to a file in the chosen format.
pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Creates an exporter, generating a timestamped file name when no path
    /// is given.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let default_name = format!("screensage_export_{}", Local::now().format("%Y%m%d_%H%M%S"));

        let extension = match format {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        };

        let output_path = output_path.unwrap_or_else(|| PathBuf::from(format!("{}.{}", default_name, extension)));

        Self { format, output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn export_predictions(&self, predictions: &[Prediction]) -> Result<()> {
        match self.format {
            ExportFormat::Csv => {
                let mut wtr = csv::Writer::from_path(&self.output_path)?;
                wtr.write_record(["ID", "Type", "Title", "Message", "Confidence", "Priority", "Suggestion", "Timestamp"])?;
                for prediction in predictions {
                    wtr.write_record([
                        prediction.id.to_string(),
                        prediction.kind.to_string(),
                        prediction.title.clone(),
                        prediction.message.clone(),
                        prediction.confidence.to_string(),
                        prediction.priority.to_string(),
                        prediction.action_suggestion.clone(),
                        prediction.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
                    ])?;
                }
                wtr.flush()?;
            }
            ExportFormat::Json => self.write_json(predictions)?,
        }

        msg_debug!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    /// Exports patterns; the CSV layout has one section per statistic.
    pub fn export_patterns(&self, patterns: &UsagePatterns) -> Result<()> {
        match self.format {
            ExportFormat::Csv => {
                let mut wtr = csv::Writer::from_path(&self.output_path)?;

                wtr.write_record(["DAILY AVERAGES", "", "", ""])?;
                wtr.write_record(["Weekday", "Average", "", ""])?;
                for (weekday, average) in &patterns.daily_averages {
                    wtr.write_record([weekday.clone(), format!("{:.1}", average), String::new(), String::new()])?;
                }

                wtr.write_record(["", "", "", ""])?;
                wtr.write_record(["HOURLY DISTRIBUTION", "", "", ""])?;
                wtr.write_record(["Hour", "Average", "", ""])?;
                for (hour, average) in &patterns.hourly_distribution {
                    wtr.write_record([format_hour(*hour), format!("{:.1}", average), String::new(), String::new()])?;
                }

                wtr.write_record(["", "", "", ""])?;
                wtr.write_record(["APP USAGE", "", "", ""])?;
                wtr.write_record(["App", "Average", "Total", "Days"])?;
                for (name, stats) in &patterns.app_usage_patterns {
                    wtr.write_record([
                        name.clone(),
                        format!("{:.1}", stats.average),
                        format!("{:.1}", stats.total),
                        stats.frequency.to_string(),
                    ])?;
                }

                wtr.write_record(["", "", "", ""])?;
                wtr.write_record(["PEAK HOURS", "", "", ""])?;
                wtr.write_record(["Hour", "Total", "", ""])?;
                for peak in &patterns.peak_usage_times {
                    wtr.write_record([format_hour(peak.hour), format!("{:.1}", peak.usage), String::new(), String::new()])?;
                }

                let trend = &patterns.weekly_trends;
                wtr.write_record(["", "", "", ""])?;
                wtr.write_record(["WEEKLY TREND", "", "", ""])?;
                wtr.write_record(["This Week", "Last Week", "Trend", "Change %"])?;
                wtr.write_record([
                    format!("{:.1}", trend.this_week),
                    format!("{:.1}", trend.last_week),
                    trend.trend.to_string(),
                    trend.percent_change.map(|change| format!("{:.1}", change)).unwrap_or_default(),
                ])?;

                wtr.flush()?;
            }
            ExportFormat::Json => self.write_json(patterns)?,
        }

        msg_debug!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    pub fn export_learning(&self, entries: &[LearningEntry]) -> Result<()> {
        match self.format {
            ExportFormat::Csv => {
                let mut wtr = csv::Writer::from_path(&self.output_path)?;
                wtr.write_record(["Timestamp", "Prediction ID", "Type", "Message", "Action"])?;
                for entry in entries {
                    wtr.write_record([
                        entry.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
                        entry.prediction.id.to_string(),
                        entry.prediction.kind.to_string(),
                        entry.prediction.message.clone(),
                        entry.user_action.to_string(),
                    ])?;
                }
                wtr.flush()?;
            }
            ExportFormat::Json => self.write_json(entries)?,
        }

        msg_debug!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    fn write_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        File::create(&self.output_path)?.write_all(json.as_bytes())?;
        Ok(())
    }
}
