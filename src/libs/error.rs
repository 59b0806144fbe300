//! Error types for the usage prediction core.
//!
//! Pattern extraction and the individual predictors validate the usage data
//! they consume and report malformed values through [`PredictorError`]. A
//! daily limit that cannot serve as a divisor is not an error: the
//! limit-based predictors simply do not fire. The orchestrator
//! in [`crate::libs::predictor`] is the only place these errors are turned
//! into a degraded result (an empty prediction list).

use chrono::NaiveDate;
use thiserror::Error;

/// Failure raised while extracting patterns or evaluating a predictor.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PredictorError {
    /// An hourly breakdown entry uses an hour outside of 0..=23.
    #[error("usage record for {date} has hour {hour} outside of 0-23")]
    InvalidHour { date: NaiveDate, hour: u32 },

    /// A minute value is negative or not finite.
    #[error("{field} must be a non-negative number of minutes, got {value}")]
    InvalidMinutes { field: String, value: f64 },
}

/// Result type alias for the prediction core
pub type Result<T> = std::result::Result<T, PredictorError>;

/// Validates a minute quantity, naming the offending field on failure.
pub(crate) fn check_minutes(field: &str, value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(PredictorError::InvalidMinutes {
            field: field.to_string(),
            value,
        })
    }
}
