use super::formatter::{format_hour, format_minutes};
use super::patterns::UsagePatterns;
use super::prediction::{LearningEntry, Prediction};
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn predictions(predictions: &[Prediction]) -> Table {
        let mut table = Table::new();

        table.add_row(row!["#", "TYPE", "TITLE", "MESSAGE", "CONFIDENCE", "PRIORITY", "SUGGESTION"]);
        for (index, prediction) in predictions.iter().enumerate() {
            table.add_row(row![
                index + 1,
                prediction.kind,
                prediction.title,
                prediction.message,
                prediction.confidence,
                prediction.priority,
                prediction.action_suggestion
            ]);
        }

        table
    }

    pub fn daily_averages(patterns: &UsagePatterns) -> Table {
        let mut table = Table::new();

        table.add_row(row!["WEEKDAY", "AVERAGE"]);
        for (weekday, average) in &patterns.daily_averages {
            table.add_row(row![weekday, format_minutes(*average)]);
        }

        table
    }

    pub fn hourly_distribution(patterns: &UsagePatterns) -> Table {
        let mut table = Table::new();

        table.add_row(row!["HOUR", "AVERAGE"]);
        for (hour, average) in &patterns.hourly_distribution {
            table.add_row(row![format_hour(*hour), format_minutes(*average)]);
        }

        table
    }

    pub fn app_usage(patterns: &UsagePatterns) -> Table {
        let mut table = Table::new();

        table.add_row(row!["APP", "AVERAGE", "TOTAL", "DAYS"]);
        for (name, stats) in &patterns.app_usage_patterns {
            table.add_row(row![name, format_minutes(stats.average), format_minutes(stats.total), stats.frequency]);
        }

        table
    }

    pub fn peak_hours(patterns: &UsagePatterns) -> Table {
        let mut table = Table::new();

        table.add_row(row!["#", "HOUR", "TOTAL"]);
        for (index, peak) in patterns.peak_usage_times.iter().enumerate() {
            table.add_row(row![index + 1, format_hour(peak.hour), format_minutes(peak.usage)]);
        }

        table
    }

    pub fn learning_data(entries: &[LearningEntry]) -> Table {
        let mut table = Table::new();

        table.add_row(row!["TIME", "TYPE", "MESSAGE", "ACTION"]);
        for entry in entries {
            table.add_row(row![
                entry.timestamp.format("%Y-%m-%d %H:%M"),
                entry.prediction.kind,
                entry.prediction.message,
                entry.user_action
            ]);
        }

        table
    }
}
