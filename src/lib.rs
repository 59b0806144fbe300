//! # ScreenSage - digital wellness usage predictor
//!
//! A library and command-line utility that analyzes screen-time history and
//! emits heuristic wellness predictions.
//!
//! ## Features
//!
//! - **Pattern Extraction**: weekday averages, hourly distribution, per-app
//!   totals, weekly trend and peak hours
//! - **Predictions**: overuse warnings, break suggestions, goal nudges, habit
//!   insights and wellness tips
//! - **Reproducibility**: injectable random source and clock
//! - **Learning Log**: append-only record of user feedback on predictions
//! - **Data Export**: predictions, patterns and feedback as CSV or JSON
//!
//! ## Usage
//!
//! ```rust,no_run
//! use screensage::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
