//! Usage data model consumed by the prediction core.
//!
//! These types describe the shape of data handed over by the history source,
//! the current-usage sampler and the goal settings. All durations are minutes
//! stored as `f64` since averages over them are fractional.
//!
//! ## JSON Shape
//!
//! Records deserialize from the camelCase layout used by the companion app:
//!
//! ```json
//! {
//!   "date": "2024-01-15",
//!   "totalTime": 185,
//!   "apps": [{ "name": "Instagram", "time": 60 }],
//!   "hourlyBreakdown": { "9": 20, "21": 45 }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;

/// Minutes spent in a single app on a given day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppUsage {
    pub name: String,
    pub time: f64,
}

/// One day of aggregated device usage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyUsageRecord {
    /// Calendar date the record describes
    pub date: NaiveDate,
    /// Total minutes of usage that day
    pub total_time: f64,
    /// Per-app minutes, app names are unique within a day
    #[serde(default)]
    pub apps: Vec<AppUsage>,
    /// Minutes used per hour of day (0-23); hours may be missing
    #[serde(default)]
    pub hourly_breakdown: BTreeMap<u32, f64>,
}

impl DailyUsageRecord {
    pub fn new(date: NaiveDate, total_time: f64) -> Self {
        Self {
            date,
            total_time,
            apps: Vec::new(),
            hourly_breakdown: BTreeMap::new(),
        }
    }

    pub fn with_app(mut self, name: &str, time: f64) -> Self {
        self.apps.push(AppUsage {
            name: name.to_string(),
            time,
        });
        self
    }

    pub fn with_hour(mut self, hour: u32, minutes: f64) -> Self {
        self.hourly_breakdown.insert(hour, minutes);
        self
    }
}

/// Information about the ongoing usage session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentActivity {
    /// Minutes of uninterrupted use, zero when unknown
    #[serde(default)]
    pub continuous_minutes: f64,
}

/// Snapshot of today's usage so far.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUsage {
    pub total_time: f64,
    #[serde(default)]
    pub recent_activity: RecentActivity,
}

impl CurrentUsage {
    pub fn new(total_time: f64, continuous_minutes: f64) -> Self {
        Self {
            total_time,
            recent_activity: RecentActivity { continuous_minutes },
        }
    }
}

/// User-defined usage targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserGoals {
    /// Target ceiling for one day in minutes, must be positive
    pub daily_limit: f64,
}

/// Coarse classification of today's usage relative to the daily limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UsageLevel {
    Low,
    Moderate,
    High,
    Excessive,
}

impl UsageLevel {
    /// Buckets `minutes / limit`: up to 0.8 is low, up to 1.0 moderate,
    /// up to 1.5 high, anything above is excessive. A zero limit makes any
    /// usage excessive.
    pub fn from_usage(minutes: f64, limit: f64) -> Self {
        let ratio = minutes / limit;
        if ratio <= 0.8 {
            UsageLevel::Low
        } else if ratio <= 1.0 {
            UsageLevel::Moderate
        } else if ratio <= 1.5 {
            UsageLevel::High
        } else {
            UsageLevel::Excessive
        }
    }
}

impl fmt::Display for UsageLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            UsageLevel::Low => "low",
            UsageLevel::Moderate => "moderate",
            UsageLevel::High => "high",
            UsageLevel::Excessive => "excessive",
        };
        write!(f, "{}", label)
    }
}

/// Part of the day an hour belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDay {
    pub fn from_hour(hour: u32) -> Self {
        if hour < 12 {
            TimeOfDay::Morning
        } else if hour < 17 {
            TimeOfDay::Afternoon
        } else if hour < 21 {
            TimeOfDay::Evening
        } else {
            TimeOfDay::Night
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TimeOfDay::Morning => "morning",
            TimeOfDay::Afternoon => "afternoon",
            TimeOfDay::Evening => "evening",
            TimeOfDay::Night => "night",
        };
        write!(f, "{}", label)
    }
}

/// Percentage of `target` reached by `current`, capped at 100.
///
/// Returns 0 for a non-positive target.
pub fn progress_percent(current: f64, target: f64) -> f64 {
    if target <= 0.0 {
        return 0.0;
    }
    (current / target * 100.0).min(100.0)
}

/// Progress of the summed usage of `days` towards a weekly target.
pub fn weekly_progress(days: &[DailyUsageRecord], weekly_target: f64) -> f64 {
    let week_total: f64 = days.iter().map(|day| day.total_time).sum();
    progress_percent(week_total, weekly_target)
}
