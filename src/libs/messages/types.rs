use crate::libs::usage::TimeOfDay;

#[derive(Debug, Clone)]
pub enum Message {
    // === OVERUSE PREDICTION ===
    OveruseTitle,
    OveruseMessage(i64), // projected minutes over the limit
    OveruseAction,

    // === BREAK PREDICTION ===
    BreakTitle,
    BreakMessage(i64), // continuous minutes
    BreakAction,

    // === GOAL PREDICTION ===
    GoalTitle,
    GoalMessage(i64), // percent left to the goal
    GoalAction,

    // === HABIT INSIGHTS ===
    InsightTitle,
    WeekendMore(i64), // minutes
    WeekendLess(i64), // minutes
    WeekendSuggestion,
    TopApp(String, i64), // app name, average minutes
    TopAppSuggestion,
    InconsistentUsage,
    InconsistentUsageSuggestion,
    PeakUsage(TimeOfDay, u32), // time of day, hour
    PeakUsageSuggestion,

    // === WELLNESS TIPS ===
    WellnessTitle,
    WellnessAction,

    // === ANALYSIS MESSAGES ===
    PredictionsHeader(String), // date and time
    NoPredictions,
    PatternsHeader(usize), // record count
    DailyAveragesHeader,
    HourlyDistributionHeader,
    AppUsageHeader,
    PeakHoursHeader,
    WeeklyTrend {
        this_week: String,
        last_week: String,
        trend: String,
        change: Option<f64>,
    },
    AnalysisFailed(String),
    LearningRecorded(String, String), // prediction kind, action

    // === HISTORY MESSAGES ===
    HistoryLoaded(usize, String), // record count, path
    HistoryReadFailed(String),
    HistoryParseFailed(String),
    HistoryEmpty,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigNotFound,
    ConfigModuleGoals,
    ConfigModulePredictor,
    InvalidDailyLimit(f64),
    InvalidGoalWindow(f64, f64),
    InvalidBreakThresholds(f64, f64),
    InvalidHour(u32),

    // === EXPORT MESSAGES ===
    ExportCompleted(String),
    ExportNothing,

    // === PROMPTS ===
    PromptSelectModules,
    PromptDailyLimit,
    PromptOveruseMultiplier,
    PromptDefaultHourlyRate,
    PromptBreakThreshold,
    PromptLongBreakThreshold,
    PromptGoalWindowStart,
    PromptGoalWindowEnd,
    PromptWeekendGap,
    PromptVariabilityRatio,
    PromptPeakHours,
}
