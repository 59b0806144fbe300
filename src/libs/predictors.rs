//! Heuristic predictors producing wellness advisories.
//!
//! Each predictor inspects the extracted [`UsagePatterns`], today's
//! [`CurrentUsage`] and the [`UserGoals`] and yields at most one
//! [`Prediction`]. Predictors are independent of each other; the
//! orchestrator in [`crate::libs::predictor`] runs them in a fixed order.
//!
//! ## Predictors
//!
//! - **Overuse**: projects end-of-day usage from the hourly distribution
//! - **Break**: flags long continuous sessions
//! - **Goal achievement**: nudges when usage is close to the daily limit
//! - **Habit insight**: picks one qualifying observation about the history
//! - **Wellness tip**: always offers a tip matched to today's usage level
//!
//! Random choices (habit insight, wellness tip, prediction ids) draw from the
//! random source carried by [`PredictionContext`], so a seeded source makes
//! the output reproducible.

use super::config::PredictorConfig;
use super::error::{check_minutes, Result};
use super::messages::Message;
use super::patterns::UsagePatterns;
use super::prediction::{Confidence, Prediction, PredictionType, Priority};
use super::usage::{CurrentUsage, DailyUsageRecord, TimeOfDay, UsageLevel, UserGoals};
use chrono::{NaiveDateTime, Timelike};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;
use uuid::Builder;

const WEEKDAYS: [&str; 5] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"];
const WEEKEND: [&str; 2] = ["Saturday", "Sunday"];

/// Records considered by the consistency analysis.
const CONSISTENCY_WINDOW: usize = 7;

const LOW_USAGE_TIPS: [&str; 3] = [
    "Great job maintaining healthy screen time! Your pet is thriving!",
    "You're showing excellent digital wellness habits. Keep it up!",
    "Your balanced usage is setting a great example for mindful technology use.",
];

const MODERATE_USAGE_TIPS: [&str; 3] = [
    "You're doing well! Consider adding a few more breaks to optimize your wellness.",
    "Good balance! Try the Pomodoro technique for even better focus.",
    "You're on track! Remember to blink more often to rest your eyes.",
];

const HIGH_USAGE_TIPS: [&str; 3] = [
    "High usage detected. Try switching to offline activities for the next hour.",
    "Consider using Do Not Disturb mode to reduce distractions.",
    "Take a 10-minute walk to reset your focus and energy.",
];

const EXCESSIVE_USAGE_TIPS: [&str; 3] = [
    "Excessive usage alert! Time for a digital detox break.",
    "Your pet needs attention! Step away from the screen for a while.",
    "Consider setting app time limits to help manage your usage.",
];

/// Shared inputs for one predictor pass: thresholds, clock and random source.
pub struct PredictionContext<'a, R: Rng + ?Sized> {
    pub config: &'a PredictorConfig,
    /// Local time the predictions are generated for
    pub now: NaiveDateTime,
    pub rng: &'a mut R,
}

impl<'a, R: Rng + ?Sized> PredictionContext<'a, R> {
    pub fn new(config: &'a PredictorConfig, now: NaiveDateTime, rng: &'a mut R) -> Self {
        Self { config, now, rng }
    }

    fn prediction(
        &mut self,
        kind: PredictionType,
        title: Message,
        message: String,
        confidence: Confidence,
        priority: Priority,
        action_suggestion: String,
    ) -> Prediction {
        let bytes: [u8; 16] = self.rng.gen();
        Prediction {
            id: Builder::from_random_bytes(bytes).into_uuid(),
            kind,
            title: title.to_string(),
            message,
            confidence,
            priority,
            action_suggestion,
            timestamp: self.now,
        }
    }
}

/// Candidate observation produced by a habit sub-analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct HabitInsight {
    pub message: String,
    pub confidence: Confidence,
    pub suggestion: String,
}

/// The daily limit when it can serve as a divisor.
///
/// Limit-based predictors stay silent for a zero, negative or non-finite
/// limit; the other predictors of the run are unaffected.
fn usable_daily_limit(goals: &UserGoals) -> Option<f64> {
    let limit = goals.daily_limit;
    if limit.is_finite() && limit > 0.0 {
        Some(limit)
    } else {
        debug!(daily_limit = limit, "Skipping limit-based predictor");
        None
    }
}

/// Projects end-of-day usage for the current clock hour.
///
/// The hourly rate falls back to the configured default when the hour was
/// never observed or averaged zero.
pub fn project_daily_usage(current: &CurrentUsage, patterns: &UsagePatterns, current_hour: u32, config: &PredictorConfig) -> f64 {
    let remaining_hours = 24u32.saturating_sub(current_hour) as f64;
    let observed = patterns.hourly_average(current_hour);
    let hourly_rate = if observed > 0.0 { observed } else { config.default_hourly_rate };
    current.total_time + hourly_rate * remaining_hours
}

/// Warns when the projected usage exceeds the limit by the overuse multiplier.
pub fn predict_overuse<R: Rng + ?Sized>(
    ctx: &mut PredictionContext<'_, R>,
    current: &CurrentUsage,
    patterns: &UsagePatterns,
    goals: &UserGoals,
) -> Result<Option<Prediction>> {
    check_minutes("totalTime", current.total_time)?;
    let Some(daily_limit) = usable_daily_limit(goals) else {
        return Ok(None);
    };
    let projected = project_daily_usage(current, patterns, ctx.now.hour(), ctx.config);
    if projected <= daily_limit * ctx.config.overuse_multiplier {
        return Ok(None);
    }

    let overage = (projected - daily_limit).round() as i64;
    Ok(Some(ctx.prediction(
        PredictionType::OveruseWarning,
        Message::OveruseTitle,
        Message::OveruseMessage(overage).to_string(),
        Confidence::High,
        Priority::High,
        Message::OveruseAction.to_string(),
    )))
}

/// Suggests a break after a long continuous session.
pub fn suggest_break<R: Rng + ?Sized>(ctx: &mut PredictionContext<'_, R>, current: &CurrentUsage) -> Result<Option<Prediction>> {
    let continuous = check_minutes("recentActivity.continuousMinutes", current.recent_activity.continuous_minutes)?;
    if continuous <= ctx.config.break_threshold {
        return Ok(None);
    }

    let confidence = if continuous > ctx.config.long_break_threshold {
        Confidence::High
    } else {
        Confidence::Medium
    };

    Ok(Some(ctx.prediction(
        PredictionType::BreakSuggestion,
        Message::BreakTitle,
        Message::BreakMessage(continuous.round() as i64).to_string(),
        confidence,
        Priority::Medium,
        Message::BreakAction.to_string(),
    )))
}

/// Nudges when today's usage sits inside the goal window of the daily limit.
pub fn predict_goal_achievement<R: Rng + ?Sized>(
    ctx: &mut PredictionContext<'_, R>,
    current: &CurrentUsage,
    goals: &UserGoals,
) -> Result<Option<Prediction>> {
    let total_time = check_minutes("totalTime", current.total_time)?;
    let Some(daily_limit) = usable_daily_limit(goals) else {
        return Ok(None);
    };

    let progress = total_time / daily_limit * 100.0;
    if progress < ctx.config.goal_window_start || progress >= ctx.config.goal_window_end {
        return Ok(None);
    }

    let remaining = (100.0 - progress).round() as i64;
    Ok(Some(ctx.prediction(
        PredictionType::GoalAchievement,
        Message::GoalTitle,
        Message::GoalMessage(remaining).to_string(),
        Confidence::High,
        Priority::Low,
        Message::GoalAction.to_string(),
    )))
}

/// Compares average weekend usage against average weekday usage.
///
/// Weekdays missing from the history count as zero.
pub fn analyze_weekend_vs_weekday(patterns: &UsagePatterns, config: &PredictorConfig) -> Option<HabitInsight> {
    let weekday_avg = WEEKDAYS.iter().map(|day| patterns.daily_average(day)).sum::<f64>() / WEEKDAYS.len() as f64;
    let weekend_avg = WEEKEND.iter().map(|day| patterns.daily_average(day)).sum::<f64>() / WEEKEND.len() as f64;

    if (weekend_avg - weekday_avg).abs() <= config.weekend_gap {
        return None;
    }

    let message = if weekend_avg > weekday_avg {
        Message::WeekendMore((weekend_avg - weekday_avg).round() as i64)
    } else {
        Message::WeekendLess((weekday_avg - weekend_avg).round() as i64)
    };

    Some(HabitInsight {
        message: message.to_string(),
        confidence: Confidence::High,
        suggestion: Message::WeekendSuggestion.to_string(),
    })
}

/// Reports the app with the highest total usage.
pub fn analyze_most_used_apps(patterns: &UsagePatterns) -> Option<HabitInsight> {
    let (name, stats) = patterns.top_app()?;
    Some(HabitInsight {
        message: Message::TopApp(name.to_string(), stats.average.round() as i64).to_string(),
        confidence: Confidence::High,
        suggestion: Message::TopAppSuggestion.to_string(),
    })
}

/// Flags day-to-day variation of the most recent week.
///
/// Qualifies when the population standard deviation of the last seven daily
/// totals exceeds the configured share of their mean.
pub fn analyze_usage_consistency(history: &[DailyUsageRecord], config: &PredictorConfig) -> Option<HabitInsight> {
    let recent = &history[history.len().saturating_sub(CONSISTENCY_WINDOW)..];
    if recent.is_empty() {
        return None;
    }

    let times: Vec<f64> = recent.iter().map(|day| day.total_time).collect();
    let avg = times.iter().sum::<f64>() / times.len() as f64;
    let variance = times.iter().map(|time| (time - avg).powi(2)).sum::<f64>() / times.len() as f64;
    let standard_deviation = variance.sqrt();

    if standard_deviation <= avg * config.variability_ratio {
        return None;
    }

    Some(HabitInsight {
        message: Message::InconsistentUsage.to_string(),
        confidence: Confidence::Medium,
        suggestion: Message::InconsistentUsageSuggestion.to_string(),
    })
}

/// Labels the top peak hour with its part of the day.
pub fn analyze_peak_usage(patterns: &UsagePatterns) -> Option<HabitInsight> {
    let top = patterns.peak_usage_times.first()?;
    Some(HabitInsight {
        message: Message::PeakUsage(TimeOfDay::from_hour(top.hour), top.hour).to_string(),
        confidence: Confidence::High,
        suggestion: Message::PeakUsageSuggestion.to_string(),
    })
}

/// Every habit observation that qualifies for the given history.
pub fn habit_insights(patterns: &UsagePatterns, history: &[DailyUsageRecord], config: &PredictorConfig) -> Vec<HabitInsight> {
    [
        analyze_weekend_vs_weekday(patterns, config),
        analyze_most_used_apps(patterns),
        analyze_usage_consistency(history, config),
        analyze_peak_usage(patterns),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Emits one qualifying habit insight chosen uniformly at random.
pub fn generate_habit_insight<R: Rng + ?Sized>(
    ctx: &mut PredictionContext<'_, R>,
    patterns: &UsagePatterns,
    history: &[DailyUsageRecord],
) -> Result<Option<Prediction>> {
    let insights = habit_insights(patterns, history, ctx.config);
    let Some(insight) = insights.choose(&mut *ctx.rng).cloned() else {
        return Ok(None);
    };

    Ok(Some(ctx.prediction(
        PredictionType::HabitInsight,
        Message::InsightTitle,
        insight.message,
        insight.confidence,
        Priority::Low,
        insight.suggestion,
    )))
}

/// Fixed pool of tips for a usage level.
pub fn wellness_tips(level: UsageLevel) -> &'static [&'static str] {
    match level {
        UsageLevel::Low => &LOW_USAGE_TIPS,
        UsageLevel::Moderate => &MODERATE_USAGE_TIPS,
        UsageLevel::High => &HIGH_USAGE_TIPS,
        UsageLevel::Excessive => &EXCESSIVE_USAGE_TIPS,
    }
}

/// Picks a tip for today's usage level; fires whenever today's usage is valid.
pub fn generate_wellness_tip<R: Rng + ?Sized>(
    ctx: &mut PredictionContext<'_, R>,
    current: &CurrentUsage,
    goals: &UserGoals,
) -> Result<Option<Prediction>> {
    let total_time = check_minutes("totalTime", current.total_time)?;

    let level = UsageLevel::from_usage(total_time, goals.daily_limit);
    let tips = wellness_tips(level);
    let tip = tips.choose(&mut *ctx.rng).copied().unwrap_or(MODERATE_USAGE_TIPS[0]);

    Ok(Some(ctx.prediction(
        PredictionType::WellnessTip,
        Message::WellnessTitle,
        tip.to_string(),
        Confidence::Medium,
        Priority::Low,
        Message::WellnessAction.to_string(),
    )))
}
