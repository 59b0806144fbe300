//! Minute formatting utilities for user-friendly display.
//!
//! Usage figures are kept as fractional minutes internally and rounded to
//! whole minutes for display.
//!
//! ## Formats
//!
//! - [`format_minutes`]: compact form for tables, "45m", "2h", "1h 30m"
//! - [`format_detailed_minutes`]: prose form, "45 minutes", "1 hour",
//!   "2 hours 5 minutes"
//!
//! Negative and non-finite values are treated as zero.
//!
//! ```rust
//! use screensage::libs::formatter::{format_detailed_minutes, format_minutes};
//!
//! assert_eq!(format_minutes(90.0), "1h 30m");
//! assert_eq!(format_detailed_minutes(65.0), "1 hour 5 minutes");
//! ```

fn whole_minutes(minutes: f64) -> u64 {
    if minutes.is_finite() && minutes > 0.0 {
        minutes.round() as u64
    } else {
        0
    }
}

fn plural(count: u64, unit: &str) -> String {
    if count == 1 {
        unit.to_string()
    } else {
        format!("{}s", unit)
    }
}

/// Formats minutes as "45m", "2h" or "1h 30m".
pub fn format_minutes(minutes: f64) -> String {
    let minutes = whole_minutes(minutes);
    if minutes < 60 {
        return format!("{}m", minutes);
    }

    let hours = minutes / 60;
    let remaining = minutes % 60;
    if remaining == 0 {
        format!("{}h", hours)
    } else {
        format!("{}h {}m", hours, remaining)
    }
}

/// Formats minutes as "45 minutes", "1 hour" or "2 hours 5 minutes".
pub fn format_detailed_minutes(minutes: f64) -> String {
    let minutes = whole_minutes(minutes);
    if minutes < 60 {
        return format!("{} {}", minutes, plural(minutes, "minute"));
    }

    let hours = minutes / 60;
    let remaining = minutes % 60;
    if remaining == 0 {
        format!("{} {}", hours, plural(hours, "hour"))
    } else {
        format!("{} {} {} {}", hours, plural(hours, "hour"), remaining, plural(remaining, "minute"))
    }
}

/// Formats an hour of day as "09:00".
pub fn format_hour(hour: u32) -> String {
    format!("{:02}:00", hour)
}
