//! Usage pattern extraction from daily usage history.
//!
//! Turns an oldest-to-newest sequence of [`DailyUsageRecord`]s into the
//! aggregate statistics the predictors consume. Patterns are recomputed from
//! the full history on every call; nothing is cached between calls.
//!
//! ## Derived Statistics
//!
//! - **Daily averages**: mean total usage per weekday name, only for weekdays
//!   present in the history
//! - **Hourly distribution**: every hour 0-23, mean minutes over the records
//!   that define that hour, zero for hours never observed
//! - **App usage**: average, total and number of days per app
//! - **Weekly trend**: last 7 records against the 7 before them
//! - **Peak usage times**: hours with the highest summed usage
//!
//! An empty history is not an error: the weekday and app maps are empty,
//! every hour averages zero, the trend is flat and there are no peak hours.

use super::error::{check_minutes, PredictorError, Result};
use super::usage::DailyUsageRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

/// Number of peak hours reported when no other count is configured.
pub const DEFAULT_PEAK_HOURS: usize = 3;

/// Number of records that make up one week in trend comparison.
const WEEK_LEN: usize = 7;

const HOURS_PER_DAY: u32 = 24;

/// Aggregate usage of a single app across the history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppStats {
    /// Mean minutes per day over the days the app appears
    pub average: f64,
    /// Summed minutes over all days
    pub total: f64,
    /// Number of days the app appears
    pub frequency: usize,
}

/// Direction of week-over-week usage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Increasing,
    Decreasing,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trend::Increasing => write!(f, "increasing"),
            Trend::Decreasing => write!(f, "decreasing"),
        }
    }
}

/// Comparison of the last week of usage against the week before.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyTrend {
    /// Average daily usage of the last 7 records
    pub this_week: f64,
    /// Average daily usage of the 7 records before those
    pub last_week: f64,
    pub trend: Trend,
    /// Relative change in percent, `None` when last week averaged zero
    pub percent_change: Option<f64>,
}

/// Summed usage of one hour across the whole history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeakUsage {
    pub hour: u32,
    pub usage: f64,
}

/// Statistics derived from a usage history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsagePatterns {
    /// Weekday name ("Monday") to average total minutes
    pub daily_averages: BTreeMap<String, f64>,
    /// Hour of day (all of 0-23) to average minutes
    pub hourly_distribution: BTreeMap<u32, f64>,
    pub app_usage_patterns: BTreeMap<String, AppStats>,
    /// App names in the order they first appear in the history
    #[serde(default)]
    pub app_order: Vec<String>,
    pub weekly_trends: WeeklyTrend,
    /// Highest usage hours, most used first
    pub peak_usage_times: Vec<PeakUsage>,
}

impl UsagePatterns {
    /// Average minutes recorded for `hour`, zero when never observed.
    pub fn hourly_average(&self, hour: u32) -> f64 {
        self.hourly_distribution.get(&hour).copied().unwrap_or(0.0)
    }

    /// Average total minutes for a weekday name, zero when absent.
    pub fn daily_average(&self, weekday: &str) -> f64 {
        self.daily_averages.get(weekday).copied().unwrap_or(0.0)
    }

    /// The app with the highest total usage.
    ///
    /// Ties resolve to the app seen first in the history.
    pub fn top_app(&self) -> Option<(&str, &AppStats)> {
        let mut top: Option<(&str, &AppStats)> = None;
        for name in &self.app_order {
            let Some(stats) = self.app_usage_patterns.get(name) else {
                continue;
            };
            match top {
                Some((_, best)) if stats.total <= best.total => {}
                _ => top = Some((name.as_str(), stats)),
            }
        }
        top
    }
}

/// Extracts patterns reporting [`DEFAULT_PEAK_HOURS`] peak hours.
pub fn extract_patterns(history: &[DailyUsageRecord]) -> Result<UsagePatterns> {
    extract_patterns_with_peaks(history, DEFAULT_PEAK_HOURS)
}

/// Extracts patterns from `history`, keeping at most `peak_hours` peaks.
///
/// # Errors
///
/// Returns an error when a record carries negative or non-finite minutes or
/// an hourly breakdown key outside 0-23.
pub fn extract_patterns_with_peaks(history: &[DailyUsageRecord], peak_hours: usize) -> Result<UsagePatterns> {
    validate_history(history)?;

    let (app_usage_patterns, app_order) = app_usage(history);
    let patterns = UsagePatterns {
        daily_averages: daily_averages(history),
        hourly_distribution: hourly_distribution(history),
        app_usage_patterns,
        app_order,
        weekly_trends: weekly_trends(history),
        peak_usage_times: peak_usage_times(history, peak_hours),
    };

    debug!(
        records = history.len(),
        weekdays = patterns.daily_averages.len(),
        apps = patterns.app_usage_patterns.len(),
        peaks = patterns.peak_usage_times.len(),
        "Extracted usage patterns"
    );

    Ok(patterns)
}

fn validate_history(history: &[DailyUsageRecord]) -> Result<()> {
    for day in history {
        check_minutes("totalTime", day.total_time)?;
        for app in &day.apps {
            check_minutes(&format!("apps[{}].time", app.name), app.time)?;
        }
        for (&hour, &minutes) in &day.hourly_breakdown {
            if hour > 23 {
                return Err(PredictorError::InvalidHour { date: day.date, hour });
            }
            check_minutes(&format!("hourlyBreakdown[{}]", hour), minutes)?;
        }
    }
    Ok(())
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn daily_averages(history: &[DailyUsageRecord]) -> BTreeMap<String, f64> {
    let mut totals: BTreeMap<String, Vec<f64>> = BTreeMap::new();
    for day in history {
        let weekday = day.date.format("%A").to_string();
        totals.entry(weekday).or_default().push(day.total_time);
    }

    totals.into_iter().map(|(weekday, values)| (weekday, mean(&values))).collect()
}

fn hourly_distribution(history: &[DailyUsageRecord]) -> BTreeMap<u32, f64> {
    let mut samples: BTreeMap<u32, Vec<f64>> = BTreeMap::new();
    for day in history {
        for (&hour, &minutes) in &day.hourly_breakdown {
            samples.entry(hour).or_default().push(minutes);
        }
    }

    (0..HOURS_PER_DAY)
        .map(|hour| {
            let average = samples.get(&hour).map(|values| mean(values)).unwrap_or(0.0);
            (hour, average)
        })
        .collect()
}

fn app_usage(history: &[DailyUsageRecord]) -> (BTreeMap<String, AppStats>, Vec<String>) {
    let mut per_app: BTreeMap<String, Vec<f64>> = BTreeMap::new();
    let mut order = Vec::new();
    for day in history {
        for app in &day.apps {
            let times = per_app.entry(app.name.clone()).or_insert_with(|| {
                order.push(app.name.clone());
                Vec::new()
            });
            times.push(app.time);
        }
    }

    let stats = per_app
        .into_iter()
        .map(|(name, times)| {
            let total: f64 = times.iter().sum();
            let stats = AppStats {
                average: total / times.len() as f64,
                total,
                frequency: times.len(),
            };
            (name, stats)
        })
        .collect();
    (stats, order)
}

fn weekly_trends(history: &[DailyUsageRecord]) -> WeeklyTrend {
    let len = history.len();
    let this_week_start = len.saturating_sub(WEEK_LEN);
    let last_week_start = len.saturating_sub(WEEK_LEN * 2);

    // Both windows average over a full week even when fewer records exist
    let this_week = history[this_week_start..].iter().map(|day| day.total_time).sum::<f64>() / WEEK_LEN as f64;
    let last_week = history[last_week_start..this_week_start].iter().map(|day| day.total_time).sum::<f64>() / WEEK_LEN as f64;

    let percent_change = if last_week == 0.0 {
        None
    } else {
        Some((this_week - last_week) / last_week * 100.0)
    };

    WeeklyTrend {
        this_week,
        last_week,
        trend: if this_week > last_week { Trend::Increasing } else { Trend::Decreasing },
        percent_change,
    }
}

fn peak_usage_times(history: &[DailyUsageRecord], limit: usize) -> Vec<PeakUsage> {
    let mut totals: BTreeMap<u32, f64> = BTreeMap::new();
    for day in history {
        for (&hour, &minutes) in &day.hourly_breakdown {
            *totals.entry(hour).or_insert(0.0) += minutes;
        }
    }

    // Stable sort over ascending hours keeps the lower hour first on ties
    let mut peaks: Vec<PeakUsage> = totals.into_iter().map(|(hour, usage)| PeakUsage { hour, usage }).collect();
    peaks.sort_by(|a, b| b.usage.total_cmp(&a.usage));
    peaks.truncate(limit);
    peaks
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(d: u32, total: f64) -> DailyUsageRecord {
        DailyUsageRecord::new(NaiveDate::from_ymd_opt(2024, 1, d).unwrap(), total)
    }

    #[test]
    fn test_mean_of_single_value() {
        assert_eq!(mean(&[42.0]), 42.0);
    }

    #[test]
    fn test_short_history_has_no_baseline() {
        let history: Vec<_> = (1..=5).map(|d| day(d, 100.0)).collect();
        let trend = weekly_trends(&history);
        assert!((trend.this_week - 500.0 / 7.0).abs() < 1e-9);
        assert_eq!(trend.last_week, 0.0);
        assert_eq!(trend.percent_change, None);
        assert_eq!(trend.trend, Trend::Increasing);
    }

    #[test]
    fn test_top_app_tie_prefers_first_seen() {
        let history = vec![day(1, 60.0).with_app("Zoom", 30.0).with_app("Chess", 30.0)];
        let patterns = extract_patterns(&history).unwrap();
        assert_eq!(patterns.app_order, vec!["Zoom".to_string(), "Chess".to_string()]);
        assert_eq!(patterns.top_app().map(|(name, _)| name), Some("Zoom"));
    }

    #[test]
    fn test_hourly_distribution_covers_every_hour() {
        let history = vec![day(1, 60.0).with_hour(9, 20.0)];
        let distribution = hourly_distribution(&history);
        assert_eq!(distribution.len(), 24);
        assert_eq!(distribution[&9], 20.0);
        assert_eq!(distribution[&0], 0.0);
        assert_eq!(distribution[&23], 0.0);
    }
}
