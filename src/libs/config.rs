//! Configuration management for the screensage application.
//!
//! Holds the user's goals and the thresholds the predictors work with. The
//! configuration is stored as a JSON document in the platform data directory
//! and can be edited by hand or through the interactive setup wizard.
//!
//! ## Configuration Structure
//!
//! - **Goals Config**: the daily screen-time limit
//! - **Predictor Config**: thresholds for overuse, breaks, goal nudges and
//!   habit analysis
//!
//! Both sections are optional. A missing section falls back to its defaults,
//! so a fresh installation works without running `screensage init`.
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use screensage::libs::config::Config;
//!
//! let config = Config::read()?;
//! let predictor = config.predictor_config();
//! println!("Break after {} minutes", predictor.break_threshold);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::libs::patterns::DEFAULT_PEAK_HOURS;
use crate::libs::usage::UserGoals;
use crate::{msg_bail_anyhow, msg_print};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Daily limit in minutes used when no goal is configured.
pub const DEFAULT_DAILY_LIMIT: f64 = 180.0;

/// Represents a configurable module in the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    /// Unique identifier for the module used in configuration routing
    pub key: String,
    /// Display name shown to users during interactive setup
    pub name: String,
}

/// User goal settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GoalsConfig {
    /// Target ceiling for one day of screen time, in minutes.
    pub daily_limit: f64,
}

impl Default for GoalsConfig {
    fn default() -> Self {
        GoalsConfig {
            daily_limit: DEFAULT_DAILY_LIMIT,
        }
    }
}

impl From<&GoalsConfig> for UserGoals {
    fn from(goals: &GoalsConfig) -> Self {
        UserGoals {
            daily_limit: goals.daily_limit,
        }
    }
}

/// Thresholds used by the heuristic predictors.
///
/// ## Timing Configuration
///
/// - **Overuse**: projected usage must exceed `daily_limit * overuse_multiplier`
/// - **Breaks**: continuous use above `break_threshold` minutes suggests a
///   break, above `long_break_threshold` with high confidence
/// - **Goal nudges**: fire while progress is in
///   `[goal_window_start, goal_window_end)` percent of the limit
///
/// ## Habit Analysis
///
/// - **Weekend gap**: minutes between weekend and weekday averages worth
///   mentioning
/// - **Variability ratio**: share of the weekly mean the standard deviation
///   must exceed to call usage inconsistent
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct PredictorConfig {
    /// Multiplier applied to the daily limit before an overuse warning fires.
    pub overuse_multiplier: f64,

    /// Minutes per hour assumed for hours without history.
    pub default_hourly_rate: f64,

    /// Continuous minutes after which a break is suggested.
    pub break_threshold: f64,

    /// Continuous minutes after which the break suggestion is high confidence.
    pub long_break_threshold: f64,

    /// Lower bound (inclusive) of the goal nudge window, percent of the limit.
    pub goal_window_start: f64,

    /// Upper bound (exclusive) of the goal nudge window, percent of the limit.
    pub goal_window_end: f64,

    /// Weekend/weekday difference in minutes that counts as notable.
    pub weekend_gap: f64,

    /// Standard deviation to mean ratio that counts as inconsistent usage.
    pub variability_ratio: f64,

    /// Number of peak hours kept in the extracted patterns.
    pub peak_hours: usize,
}

impl Default for PredictorConfig {
    /// Default values:
    /// - 1.2x limit before overuse warnings
    /// - 10 minutes per unobserved hour
    /// - 60 / 120 minutes for break suggestions
    /// - 80% to 100% goal window
    /// - 30 minutes weekend gap
    /// - 0.3 variability ratio
    /// - 3 peak hours
    fn default() -> Self {
        PredictorConfig {
            overuse_multiplier: 1.2,
            default_hourly_rate: 10.0,
            break_threshold: 60.0,
            long_break_threshold: 120.0,
            goal_window_start: 80.0,
            goal_window_end: 100.0,
            weekend_gap: 30.0,
            variability_ratio: 0.3,
            peak_hours: DEFAULT_PEAK_HOURS,
        }
    }
}

impl PredictorConfig {
    /// Checks that the thresholds describe a usable configuration.
    pub fn validate(&self) -> Result<()> {
        if self.goal_window_start >= self.goal_window_end {
            msg_bail_anyhow!(Message::InvalidGoalWindow(self.goal_window_start, self.goal_window_end));
        }
        if self.long_break_threshold < self.break_threshold {
            msg_bail_anyhow!(Message::InvalidBreakThresholds(self.break_threshold, self.long_break_threshold));
        }
        Ok(())
    }
}

/// Main configuration container for the application.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    /// Daily screen-time goal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goals: Option<GoalsConfig>,

    /// Predictor thresholds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predictor: Option<PredictorConfig>,
}

impl Config {
    /// Reads configuration from the filesystem.
    ///
    /// ## File Location
    ///
    /// - **Windows**: `%LOCALAPPDATA%\screensage\screensage\config.json`
    /// - **macOS**: `~/Library/Application Support/screensage/screensage/config.json`
    /// - **Linux**: `~/.local/share/screensage/screensage/config.json`
    ///
    /// A missing file yields the default configuration; a corrupted one is an
    /// error.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Saves the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file, returning whether one existed.
    pub fn delete() -> Result<bool> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(false);
        }
        fs::remove_file(config_file_path)?;
        Ok(true)
    }

    /// Goals section or its defaults.
    pub fn goals_config(&self) -> GoalsConfig {
        self.goals.clone().unwrap_or_default()
    }

    /// Predictor section or its defaults.
    pub fn predictor_config(&self) -> PredictorConfig {
        self.predictor.clone().unwrap_or_default()
    }

    /// Validates every configured section.
    ///
    /// # Errors
    ///
    /// Returns an error for a non-positive daily limit or inconsistent
    /// predictor thresholds.
    pub fn validate(&self) -> Result<()> {
        let goals = self.goals_config();
        if !(goals.daily_limit.is_finite() && goals.daily_limit > 0.0) {
            msg_bail_anyhow!(Message::InvalidDailyLimit(goals.daily_limit));
        }
        self.predictor_config().validate()
    }

    /// Runs the interactive configuration wizard.
    ///
    /// Existing values pre-fill every prompt. Only the modules picked in the
    /// first multi-select are asked about.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![
            ConfigModule {
                key: "goals".to_string(),
                name: "Goals".to_string(),
            },
            ConfigModule {
                key: "predictor".to_string(),
                name: "Predictor".to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "goals" => {
                    let default = config.goals_config();
                    msg_print!(Message::ConfigModuleGoals);
                    config.goals = Some(GoalsConfig {
                        daily_limit: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptDailyLimit.to_string())
                            .default(default.daily_limit)
                            .interact_text()?,
                    });
                }
                "predictor" => {
                    let default = config.predictor_config();
                    msg_print!(Message::ConfigModulePredictor);
                    config.predictor = Some(PredictorConfig {
                        overuse_multiplier: prompt(Message::PromptOveruseMultiplier, default.overuse_multiplier)?,
                        default_hourly_rate: prompt(Message::PromptDefaultHourlyRate, default.default_hourly_rate)?,
                        break_threshold: prompt(Message::PromptBreakThreshold, default.break_threshold)?,
                        long_break_threshold: prompt(Message::PromptLongBreakThreshold, default.long_break_threshold)?,
                        goal_window_start: prompt(Message::PromptGoalWindowStart, default.goal_window_start)?,
                        goal_window_end: prompt(Message::PromptGoalWindowEnd, default.goal_window_end)?,
                        weekend_gap: prompt(Message::PromptWeekendGap, default.weekend_gap)?,
                        variability_ratio: prompt(Message::PromptVariabilityRatio, default.variability_ratio)?,
                        peak_hours: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptPeakHours.to_string())
                            .default(default.peak_hours)
                            .interact_text()?,
                    });
                }
                _ => {}
            }
        }

        config.validate()?;
        Ok(config)
    }
}

fn prompt(message: Message, default: f64) -> Result<f64> {
    Ok(Input::with_theme(&ColorfulTheme::default())
        .with_prompt(message.to_string())
        .default(default)
        .interact_text()?)
}
