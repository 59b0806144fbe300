//! Display implementation for screensage messages.
//!
//! Every user-facing string, including the titles and texts of the
//! predictions, is produced here so the wording lives in one place.
//!
//! ## Message Categories
//!
//! - **Prediction Messages**: overuse, break, goal, habit insight and
//!   wellness texts embedded into [`crate::libs::prediction::Prediction`]
//! - **Analysis Messages**: headers and summaries printed by the commands
//! - **History Messages**: loading of usage history files
//! - **Configuration Messages**: setup wizard prompts and validation errors
//! - **Export Messages**: export results

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === OVERUSE PREDICTION ===
            Message::OveruseTitle => "⚠️ Overuse Alert".to_string(),
            Message::OveruseMessage(minutes) => format!("You're on track to exceed your daily limit by {} minutes", minutes),
            Message::OveruseAction => "Consider taking a break or switching to a productivity app".to_string(),

            // === BREAK PREDICTION ===
            Message::BreakTitle => "💡 Break Time".to_string(),
            Message::BreakMessage(minutes) => {
                format!("You've been using your device for {} minutes straight. Time for a break!", minutes)
            }
            Message::BreakAction => "Try the 20-20-20 rule: Look at something 20 feet away for 20 seconds".to_string(),

            // === GOAL PREDICTION ===
            Message::GoalTitle => "🎯 Goal Almost Reached".to_string(),
            Message::GoalMessage(percent) => format!("You're {}% away from your daily goal!", percent),
            Message::GoalAction => "You can reach your goal with mindful usage for the rest of the day".to_string(),

            // === HABIT INSIGHTS ===
            Message::InsightTitle => "📊 Usage Insight".to_string(),
            Message::WeekendMore(minutes) => format!("You use your device {} minutes more on weekends", minutes),
            Message::WeekendLess(minutes) => format!("You use your device {} minutes less on weekends", minutes),
            Message::WeekendSuggestion => "Consider maintaining consistent usage patterns throughout the week".to_string(),
            Message::TopApp(name, average) => {
                format!("Your most used app is {} with an average of {} minutes per day", name, average)
            }
            Message::TopAppSuggestion => "Consider setting specific time limits for your most-used apps".to_string(),
            Message::InconsistentUsage => "Your usage patterns vary significantly day-to-day".to_string(),
            Message::InconsistentUsageSuggestion => {
                "Try to establish more consistent daily routines for better digital wellness".to_string()
            }
            Message::PeakUsage(time_of_day, hour) => format!("Your peak usage time is in the {} around {}:00", time_of_day, hour),
            Message::PeakUsageSuggestion => "Consider scheduling important tasks during your low-usage periods".to_string(),

            // === WELLNESS TIPS ===
            Message::WellnessTitle => "💚 Wellness Tip".to_string(),
            Message::WellnessAction => "Small changes lead to big improvements in digital wellness".to_string(),

            // === ANALYSIS MESSAGES ===
            Message::PredictionsHeader(at) => format!("Predictions for {}", at),
            Message::NoPredictions => "No predictions for the current usage".to_string(),
            Message::PatternsHeader(count) => format!("Usage patterns from {} days of history", count),
            Message::DailyAveragesHeader => "Daily averages:".to_string(),
            Message::HourlyDistributionHeader => "Hourly distribution:".to_string(),
            Message::AppUsageHeader => "App usage:".to_string(),
            Message::PeakHoursHeader => "Peak hours:".to_string(),
            Message::WeeklyTrend {
                this_week,
                last_week,
                trend,
                change,
            } => match change {
                Some(change) => format!(
                    "This week: {} per day, last week: {} per day ({}, {:+.1}%)",
                    this_week, last_week, trend, change
                ),
                None => format!(
                    "This week: {} per day, last week: {} per day ({}, not enough history for a change)",
                    this_week, last_week, trend
                ),
            },
            Message::AnalysisFailed(error) => format!("Failed to analyze usage: {}", error),
            Message::LearningRecorded(kind, action) => format!("Recorded feedback '{}' for {}", action, kind),

            // === HISTORY MESSAGES ===
            Message::HistoryLoaded(count, path) => format!("Loaded {} days of usage history from {}", count, path),
            Message::HistoryReadFailed(path) => format!("Failed to read usage history from {}", path),
            Message::HistoryParseFailed(path) => format!("Failed to parse usage history in {}", path),
            Message::HistoryEmpty => "Usage history is empty, patterns will be blank".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigNotFound => "No configuration to remove".to_string(),
            Message::ConfigModuleGoals => "Goals settings".to_string(),
            Message::ConfigModulePredictor => "Predictor thresholds".to_string(),
            Message::InvalidDailyLimit(limit) => format!("Daily limit must be a positive number of minutes, got {}", limit),
            Message::InvalidGoalWindow(start, end) => {
                format!("Goal window start ({}%) must be below its end ({}%)", start, end)
            }
            Message::InvalidBreakThresholds(threshold, long) => {
                format!("Long break threshold ({} min) must not be below the break threshold ({} min)", long, threshold)
            }
            Message::InvalidHour(hour) => format!("Hour must be between 0 and 23, got {}", hour),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Export completed: {}", path),
            Message::ExportNothing => "Nothing to export".to_string(),

            // === PROMPTS ===
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptDailyLimit => "Enter daily screen-time limit (minutes)".to_string(),
            Message::PromptOveruseMultiplier => "Enter overuse multiplier of the daily limit".to_string(),
            Message::PromptDefaultHourlyRate => "Enter assumed usage for hours without history (minutes)".to_string(),
            Message::PromptBreakThreshold => "Enter continuous usage before suggesting a break (minutes)".to_string(),
            Message::PromptLongBreakThreshold => "Enter continuous usage for an urgent break (minutes)".to_string(),
            Message::PromptGoalWindowStart => "Enter goal nudge window start (% of limit)".to_string(),
            Message::PromptGoalWindowEnd => "Enter goal nudge window end (% of limit)".to_string(),
            Message::PromptWeekendGap => "Enter notable weekend/weekday difference (minutes)".to_string(),
            Message::PromptVariabilityRatio => "Enter variability ratio for inconsistent usage".to_string(),
            Message::PromptPeakHours => "Enter number of peak hours to report".to_string(),
        };

        write!(f, "{}", text)
    }
}
