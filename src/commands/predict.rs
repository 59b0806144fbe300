//! Prediction command.
//!
//! Loads a usage history file, combines it with the usage figures given on
//! the command line and prints the predictions of one analysis run.
//!
//! ## Examples
//!
//! ```bash
//! # 150 minutes today, 90 of them without a break
//! screensage predict --history usage.json --used 150 --continuous 90
//!
//! # Reproducible output as of 20:00 with a stricter limit
//! screensage predict --history usage.json --used 150 --limit 120 --hour 20 --seed 42 --json
//!
//! # Record feedback for every prediction of the run
//! screensage predict --history usage.json --used 150 --feedback dismissed
//! ```

use crate::{
    libs::{
        config::Config,
        history::History,
        messages::Message,
        prediction::{Prediction, UserAction},
        predictor::Predictor,
        usage::{CurrentUsage, UserGoals},
        view::View,
    },
    msg_debug, msg_error_anyhow, msg_info, msg_print,
};
use anyhow::Result;
use chrono::{Local, NaiveDateTime, NaiveTime};
use clap::Args;
use std::path::PathBuf;

/// Inputs shared by every command that runs an analysis.
#[derive(Debug, Args)]
pub struct UsageArgs {
    /// JSON file with the daily usage history
    #[arg(long, value_name = "FILE")]
    pub history: PathBuf,

    /// Minutes of screen time so far today
    #[arg(short, long, value_name = "MIN", default_value_t = 0.0)]
    pub used: f64,

    /// Minutes of uninterrupted use up to now
    #[arg(short, long, value_name = "MIN", default_value_t = 0.0)]
    pub continuous: f64,

    /// Daily limit in minutes, overriding the configured goal
    #[arg(short, long, value_name = "MIN")]
    pub limit: Option<f64>,

    /// Analyze as of this hour today (0-23) instead of the current time
    #[arg(long, value_name = "H")]
    pub hour: Option<u32>,

    /// Seed for reproducible insight and tip selection
    #[arg(long)]
    pub seed: Option<u64>,

    /// Record this feedback for every prediction of the run
    #[arg(long, value_enum)]
    pub feedback: Option<UserAction>,
}

/// Result of one analysis run started from the command line.
pub struct Analysis {
    pub predictor: Predictor,
    pub predictions: Vec<Prediction>,
    pub at: NaiveDateTime,
}

impl UsageArgs {
    /// Runs all predictors and records the requested feedback.
    pub fn analyze(&self) -> Result<Analysis> {
        let config = Config::read()?;
        config.validate()?;

        let mut goals: UserGoals = (&config.goals_config()).into();
        if let Some(limit) = self.limit {
            goals.daily_limit = limit;
        }

        let history = History::load(&self.history)?;
        let at = self.analysis_time()?;

        let mut predictor = match self.seed {
            Some(seed) => Predictor::with_seed(config.predictor_config(), seed),
            None => Predictor::new(config.predictor_config()),
        };

        let current = CurrentUsage::new(self.used, self.continuous);
        let predictions = predictor
            .try_analyze(&history, &current, &goals, at)
            .map_err(|e| msg_error_anyhow!(Message::AnalysisFailed(e.to_string())))?;

        if let Some(action) = self.feedback {
            for prediction in &predictions {
                msg_debug!(Message::LearningRecorded(prediction.kind.to_string(), action.to_string()));
                predictor.add_learning_data_at(prediction.clone(), action, at);
            }
        }

        Ok(Analysis { predictor, predictions, at })
    }

    fn analysis_time(&self) -> Result<NaiveDateTime> {
        let now = Local::now().naive_local();
        match self.hour {
            None => Ok(now),
            Some(hour) => {
                let time = NaiveTime::from_hms_opt(hour, 0, 0).ok_or_else(|| msg_error_anyhow!(Message::InvalidHour(hour)))?;
                Ok(now.date().and_time(time))
            }
        }
    }
}

#[derive(Debug, Args)]
pub struct PredictArgs {
    #[command(flatten)]
    usage: UsageArgs,

    /// Print predictions as JSON instead of a table
    #[arg(long)]
    json: bool,
}

pub fn cmd(args: PredictArgs) -> Result<()> {
    let analysis = args.usage.analyze()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&analysis.predictions)?);
        return Ok(());
    }

    if analysis.predictions.is_empty() {
        msg_info!(Message::NoPredictions);
        return Ok(());
    }

    msg_print!(Message::PredictionsHeader(analysis.at.format("%Y-%m-%d %H:%M").to_string()), true);
    View::predictions(&analysis.predictions).printstd();

    if !analysis.predictor.learning_data().is_empty() {
        println!();
        View::learning_data(analysis.predictor.learning_data()).printstd();
    }

    Ok(())
}
