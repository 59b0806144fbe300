//! Core library modules for the screensage application.
//!
//! ## Features
//!
//! - **Usage Model**: daily usage records, current usage, goals
//! - **Pattern Extraction**: weekday, hourly, per-app and weekly statistics
//! - **Predictors**: overuse, break, goal, habit insight and wellness heuristics
//! - **Orchestration**: caller-owned predictor with learning log
//! - **Infrastructure**: configuration, history loading, logging, messaging
//! - **Presentation**: console tables, formatting, CSV/JSON export
//!
//! ## Usage
//!
//! ```rust,no_run
//! use screensage::libs::config::Config;
//! use screensage::libs::history::History;
//! use screensage::libs::predictor::Predictor;
//! use screensage::libs::usage::{CurrentUsage, UserGoals};
//! use std::path::Path;
//!
//! let config = Config::read()?;
//! let history = History::load(Path::new("history.json"))?;
//! let mut predictor = Predictor::new(config.predictor_config());
//! let goals: UserGoals = (&config.goals_config()).into();
//! for prediction in predictor.analyze_usage_patterns(&history, &CurrentUsage::new(120.0, 45.0), &goals) {
//!     println!("{}: {}", prediction.title, prediction.message);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod config;
pub mod data_storage;
pub mod error;
pub mod export;
pub mod formatter;
pub mod history;
pub mod logging;
pub mod messages;
pub mod patterns;
pub mod prediction;
pub mod predictor;
pub mod predictors;
pub mod usage;
pub mod view;
