//! Usage history source.
//!
//! Loads daily usage records from a JSON file holding an array of records in
//! the layout described in [`crate::libs::usage`]. Records are returned
//! ordered oldest to newest, which is the order the pattern extractor relies
//! on for its weekly windows.

use crate::libs::messages::Message;
use crate::libs::usage::DailyUsageRecord;
use crate::msg_debug;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub struct History;

impl History {
    /// Reads and orders the usage history stored at `path`.
    ///
    /// Records sharing a date keep their file order.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read or is not a JSON array
    /// of usage records.
    pub fn load(path: &Path) -> Result<Vec<DailyUsageRecord>> {
        let content = fs::read_to_string(path).with_context(|| Message::HistoryReadFailed(path.display().to_string()))?;
        let records = Self::parse(&content).with_context(|| Message::HistoryParseFailed(path.display().to_string()))?;

        msg_debug!(Message::HistoryLoaded(records.len(), path.display().to_string()));
        Ok(records)
    }

    /// Parses a JSON array of usage records and sorts it by date.
    pub fn parse(content: &str) -> Result<Vec<DailyUsageRecord>> {
        let mut records: Vec<DailyUsageRecord> = serde_json::from_str(content)?;
        records.sort_by_key(|record| record.date);
        Ok(records)
    }
}
