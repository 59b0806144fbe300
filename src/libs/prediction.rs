//! Prediction records emitted by the predictors.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Kind of advisory a prediction carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredictionType {
    OveruseWarning,
    BreakSuggestion,
    GoalAchievement,
    HabitInsight,
    WellnessTip,
}

impl fmt::Display for PredictionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PredictionType::OveruseWarning => "overuse_warning",
            PredictionType::BreakSuggestion => "break_suggestion",
            PredictionType::GoalAchievement => "goal_achievement",
            PredictionType::HabitInsight => "habit_insight",
            PredictionType::WellnessTip => "wellness_tip",
        };
        write!(f, "{}", label)
    }
}

/// Qualitative certainty label, not a probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Confidence::Low => write!(f, "low"),
            Confidence::Medium => write!(f, "medium"),
            Confidence::High => write!(f, "high"),
        }
    }
}

/// Display priority of a prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::Low => write!(f, "low"),
            Priority::Medium => write!(f, "medium"),
            Priority::High => write!(f, "high"),
        }
    }
}

/// A single heuristic advisory with its metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    /// Unique within one orchestration run
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: PredictionType,
    pub title: String,
    pub message: String,
    pub confidence: Confidence,
    pub priority: Priority,
    pub action_suggestion: String,
    pub timestamp: NaiveDateTime,
}

/// How the user responded to a prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum UserAction {
    Accepted,
    Dismissed,
    Snoozed,
}

impl fmt::Display for UserAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserAction::Accepted => write!(f, "accepted"),
            UserAction::Dismissed => write!(f, "dismissed"),
            UserAction::Snoozed => write!(f, "snoozed"),
        }
    }
}

/// Feedback entry appended to the learning log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningEntry {
    pub prediction: Prediction,
    pub user_action: UserAction,
    pub timestamp: NaiveDateTime,
}
