//! Prediction orchestrator.
//!
//! [`Predictor`] runs pattern extraction once per call and then every
//! heuristic predictor in a fixed order:
//!
//! ```text
//! history ──▶ extract_patterns ──▶ overuse ──▶ break ──▶ goal ──▶ habit insight ──▶ wellness tip
//!                                     │          │         │            │                │
//!                                     └──────────┴─────────┴────────────┴────────────────┘
//!                                                    non-empty results, in order
//! ```
//!
//! A predictor value is owned by the caller. It keeps the list produced by
//! the last successful run and an append-only learning log of user feedback;
//! separate instances share nothing.
//!
//! ## Failure Handling
//!
//! [`Predictor::try_analyze`] reports invalid input as a [`PredictorError`].
//! [`Predictor::analyze_usage_patterns`] logs such failures and returns an
//! empty list instead, leaving the previous predictions in place.
//!
//! ## Usage
//!
//! ```rust
//! use screensage::libs::config::PredictorConfig;
//! use screensage::libs::predictor::Predictor;
//! use screensage::libs::usage::{CurrentUsage, UserGoals};
//!
//! let mut predictor = Predictor::with_seed(PredictorConfig::default(), 7);
//! let predictions = predictor.analyze_usage_patterns(
//!     &[],
//!     &CurrentUsage::new(150.0, 90.0),
//!     &UserGoals { daily_limit: 180.0 },
//! );
//! assert!(!predictions.is_empty());
//! ```

use super::config::PredictorConfig;
use super::error::Result;
use super::patterns::extract_patterns_with_peaks;
use super::prediction::{LearningEntry, Prediction, UserAction};
use super::predictors::{
    generate_habit_insight, generate_wellness_tip, predict_goal_achievement, predict_overuse, suggest_break, PredictionContext,
};
use super::usage::{CurrentUsage, DailyUsageRecord, UserGoals};
use chrono::{Local, NaiveDateTime};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, error};

/// Caller-owned prediction engine.
pub struct Predictor<R: Rng = StdRng> {
    config: PredictorConfig,
    rng: R,
    predictions: Vec<Prediction>,
    learning_data: Vec<LearningEntry>,
}

impl Predictor<StdRng> {
    /// Creates a predictor with an entropy-seeded random source.
    pub fn new(config: PredictorConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Creates a predictor whose random choices are reproducible.
    pub fn with_seed(config: PredictorConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Predictor<R> {
    pub fn with_rng(config: PredictorConfig, rng: R) -> Self {
        Self {
            config,
            rng,
            predictions: Vec::new(),
            learning_data: Vec::new(),
        }
    }

    pub fn config(&self) -> &PredictorConfig {
        &self.config
    }

    /// Analyzes usage at the current local time.
    ///
    /// Never fails: invalid input is logged and yields an empty list.
    pub fn analyze_usage_patterns(&mut self, history: &[DailyUsageRecord], current: &CurrentUsage, goals: &UserGoals) -> Vec<Prediction> {
        self.analyze_at(history, current, goals, Local::now().naive_local())
    }

    /// Analyzes usage as of `now`, degrading to an empty list on failure.
    pub fn analyze_at(&mut self, history: &[DailyUsageRecord], current: &CurrentUsage, goals: &UserGoals, now: NaiveDateTime) -> Vec<Prediction> {
        match self.try_analyze(history, current, goals, now) {
            Ok(predictions) => predictions,
            Err(e) => {
                error!(error = %e, records = history.len(), "Error analyzing usage patterns");
                Vec::new()
            }
        }
    }

    /// Runs extraction and all predictors as of `now`.
    ///
    /// On success the list also becomes the current predictions.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure raised by extraction or a
    /// predictor; no partial list is kept.
    pub fn try_analyze(&mut self, history: &[DailyUsageRecord], current: &CurrentUsage, goals: &UserGoals, now: NaiveDateTime) -> Result<Vec<Prediction>> {
        let patterns = extract_patterns_with_peaks(history, self.config.peak_hours)?;
        let mut ctx = PredictionContext::new(&self.config, now, &mut self.rng);

        let candidates = [
            predict_overuse(&mut ctx, current, &patterns, goals)?,
            suggest_break(&mut ctx, current)?,
            predict_goal_achievement(&mut ctx, current, goals)?,
            generate_habit_insight(&mut ctx, &patterns, history)?,
            generate_wellness_tip(&mut ctx, current, goals)?,
        ];
        let predictions: Vec<Prediction> = candidates.into_iter().flatten().collect();

        debug!(
            records = history.len(),
            predictions = predictions.len(),
            kinds = ?predictions.iter().map(|p| p.kind).collect::<Vec<_>>(),
            "Generated predictions"
        );

        self.predictions = predictions.clone();
        Ok(predictions)
    }

    /// Predictions produced by the last successful run.
    pub fn current_predictions(&self) -> &[Prediction] {
        &self.predictions
    }

    /// Appends user feedback about a prediction, stamped with the local time.
    pub fn add_learning_data(&mut self, prediction: Prediction, user_action: UserAction) {
        self.add_learning_data_at(prediction, user_action, Local::now().naive_local());
    }

    pub fn add_learning_data_at(&mut self, prediction: Prediction, user_action: UserAction, timestamp: NaiveDateTime) {
        debug!(prediction = %prediction.id, kind = %prediction.kind, action = %user_action, "Recorded learning data");
        self.learning_data.push(LearningEntry {
            prediction,
            user_action,
            timestamp,
        });
    }

    /// The learning log, oldest entry first.
    pub fn learning_data(&self) -> &[LearningEntry] {
        &self.learning_data
    }
}
