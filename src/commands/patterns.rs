//! Pattern inspection command.
//!
//! Prints the statistics the predictors work from: weekday averages, the
//! hourly distribution, per-app totals, peak hours and the weekly trend.

use crate::{
    libs::{
        config::Config,
        formatter::format_detailed_minutes,
        history::History,
        messages::Message,
        patterns::{extract_patterns_with_peaks, UsagePatterns},
        view::View,
    },
    msg_print, msg_warning,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct PatternsArgs {
    /// JSON file with the daily usage history
    #[arg(long, value_name = "FILE")]
    history: PathBuf,

    /// Print patterns as JSON instead of tables
    #[arg(long)]
    json: bool,
}

pub fn cmd(args: PatternsArgs) -> Result<()> {
    let config = Config::read()?;
    let history = History::load(&args.history)?;
    let patterns = extract_patterns_with_peaks(&history, config.predictor_config().peak_hours)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&patterns)?);
        return Ok(());
    }

    if history.is_empty() {
        msg_warning!(Message::HistoryEmpty);
        return Ok(());
    }

    msg_print!(Message::PatternsHeader(history.len()), true);
    print_patterns(&patterns);
    Ok(())
}

fn print_patterns(patterns: &UsagePatterns) {
    msg_print!(Message::DailyAveragesHeader);
    View::daily_averages(patterns).printstd();

    if patterns.hourly_distribution.values().any(|&average| average > 0.0) {
        msg_print!(Message::HourlyDistributionHeader, true);
        View::hourly_distribution(patterns).printstd();
    }

    if !patterns.app_usage_patterns.is_empty() {
        msg_print!(Message::AppUsageHeader, true);
        View::app_usage(patterns).printstd();
    }

    if !patterns.peak_usage_times.is_empty() {
        msg_print!(Message::PeakHoursHeader, true);
        View::peak_hours(patterns).printstd();
    }

    let trend = &patterns.weekly_trends;
    msg_print!(
        Message::WeeklyTrend {
            this_week: format_detailed_minutes(trend.this_week),
            last_week: format_detailed_minutes(trend.last_week),
            trend: trend.trend.to_string(),
            change: trend.percent_change,
        },
        true
    );
}
