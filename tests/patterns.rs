#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use screensage::libs::error::PredictorError;
    use screensage::libs::patterns::{extract_patterns, extract_patterns_with_peaks, PeakUsage, Trend};
    use screensage::libs::usage::DailyUsageRecord;

    fn day(date: &str, total: f64) -> DailyUsageRecord {
        DailyUsageRecord::new(NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(), total)
    }

    /// Consecutive days starting on Monday 2024-01-01.
    fn days(totals: &[f64]) -> Vec<DailyUsageRecord> {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        totals
            .iter()
            .enumerate()
            .map(|(offset, &total)| DailyUsageRecord::new(start + chrono::Duration::days(offset as i64), total))
            .collect()
    }

    #[test]
    fn test_empty_history() {
        let patterns = extract_patterns(&[]).unwrap();
        assert!(patterns.daily_averages.is_empty());
        assert_eq!(patterns.hourly_distribution.len(), 24);
        assert!(patterns.hourly_distribution.values().all(|&average| average == 0.0));
        assert!(patterns.app_usage_patterns.is_empty());
        assert!(patterns.peak_usage_times.is_empty());
        assert_eq!(patterns.weekly_trends.this_week, 0.0);
        assert_eq!(patterns.weekly_trends.last_week, 0.0);
        assert_eq!(patterns.weekly_trends.trend, Trend::Decreasing);
        assert_eq!(patterns.weekly_trends.percent_change, None);
        assert_eq!(patterns.hourly_average(12), 0.0);
        assert!(patterns.top_app().is_none());
    }

    #[test]
    fn test_daily_averages_by_weekday_name() {
        // 2024-01-01 and 2024-01-08 are Mondays
        let history = vec![day("2024-01-01", 100.0), day("2024-01-02", 50.0), day("2024-01-08", 200.0)];
        let patterns = extract_patterns(&history).unwrap();

        assert_eq!(patterns.daily_averages.len(), 2);
        assert_eq!(patterns.daily_average("Monday"), 150.0);
        assert_eq!(patterns.daily_average("Tuesday"), 50.0);
        assert_eq!(patterns.daily_average("Sunday"), 0.0);
    }

    #[test]
    fn test_hourly_average_over_defining_records() {
        let history = vec![
            day("2024-01-01", 60.0).with_hour(9, 20.0),
            day("2024-01-02", 60.0).with_hour(9, 40.0).with_hour(21, 30.0),
            day("2024-01-03", 60.0),
        ];
        let patterns = extract_patterns(&history).unwrap();

        assert_eq!(patterns.hourly_average(9), 30.0);
        assert_eq!(patterns.hourly_average(21), 30.0);
        assert_eq!(patterns.hourly_average(10), 0.0);
        assert_eq!(patterns.hourly_distribution.len(), 24);
        assert_eq!(patterns.hourly_distribution[&10], 0.0);
    }

    #[test]
    fn test_top_app_tie_goes_to_first_seen() {
        let history = vec![
            day("2024-01-01", 60.0).with_app("Zoom", 30.0),
            day("2024-01-02", 60.0).with_app("Chess", 20.0),
            day("2024-01-03", 60.0).with_app("Chess", 10.0),
        ];
        let patterns = extract_patterns(&history).unwrap();

        let (name, stats) = patterns.top_app().unwrap();
        assert_eq!(name, "Zoom");
        assert_eq!(stats.total, 30.0);
    }

    #[test]
    fn test_app_frequency_counts_days() {
        let history = vec![
            day("2024-01-01", 90.0).with_app("Instagram", 60.0).with_app("YouTube", 30.0),
            day("2024-01-02", 40.0).with_app("Instagram", 40.0),
        ];
        let patterns = extract_patterns(&history).unwrap();

        let instagram = &patterns.app_usage_patterns["Instagram"];
        assert_eq!(instagram.frequency, 2);
        assert_eq!(instagram.total, 100.0);
        assert_eq!(instagram.average, 50.0);

        let youtube = &patterns.app_usage_patterns["YouTube"];
        assert_eq!(youtube.frequency, 1);
        assert_eq!(youtube.average, 30.0);

        let (name, _) = patterns.top_app().unwrap();
        assert_eq!(name, "Instagram");
    }

    #[test]
    fn test_peak_hours_sorted_and_limited() {
        let history = vec![
            day("2024-01-01", 100.0).with_hour(8, 10.0).with_hour(12, 30.0).with_hour(20, 50.0).with_hour(22, 5.0),
            day("2024-01-02", 100.0).with_hour(8, 15.0).with_hour(12, 30.0),
        ];
        let patterns = extract_patterns(&history).unwrap();

        assert_eq!(
            patterns.peak_usage_times,
            vec![
                PeakUsage { hour: 12, usage: 60.0 },
                PeakUsage { hour: 20, usage: 50.0 },
                PeakUsage { hour: 8, usage: 25.0 },
            ]
        );
    }

    #[test]
    fn test_peak_hour_ties_prefer_earlier_hour() {
        let history = vec![day("2024-01-01", 60.0).with_hour(21, 20.0).with_hour(7, 20.0)];
        let patterns = extract_patterns_with_peaks(&history, 1).unwrap();
        assert_eq!(patterns.peak_usage_times, vec![PeakUsage { hour: 7, usage: 20.0 }]);
    }

    #[test]
    fn test_weekly_trend_compares_last_two_weeks() {
        let mut totals = vec![100.0; 7];
        totals.extend(vec![150.0; 7]);
        let patterns = extract_patterns(&days(&totals)).unwrap();

        let trend = &patterns.weekly_trends;
        assert_eq!(trend.last_week, 100.0);
        assert_eq!(trend.this_week, 150.0);
        assert_eq!(trend.trend, Trend::Increasing);
        assert_eq!(trend.percent_change, Some(50.0));
    }

    #[test]
    fn test_weekly_trend_ignores_older_records() {
        let mut totals = vec![1000.0; 3];
        totals.extend(vec![140.0; 7]);
        totals.extend(vec![70.0; 7]);
        let patterns = extract_patterns(&days(&totals)).unwrap();

        let trend = &patterns.weekly_trends;
        assert_eq!(trend.last_week, 140.0);
        assert_eq!(trend.this_week, 70.0);
        assert_eq!(trend.trend, Trend::Decreasing);
        assert_eq!(trend.percent_change, Some(-50.0));
    }

    #[test]
    fn test_equal_weeks_are_decreasing() {
        let patterns = extract_patterns(&days(&[120.0; 14])).unwrap();
        assert_eq!(patterns.weekly_trends.trend, Trend::Decreasing);
        assert_eq!(patterns.weekly_trends.percent_change, Some(0.0));
    }

    #[test]
    fn test_partial_week_divides_by_seven() {
        let patterns = extract_patterns(&days(&[70.0, 70.0])).unwrap();
        assert_eq!(patterns.weekly_trends.this_week, 20.0);
        assert_eq!(patterns.weekly_trends.last_week, 0.0);
    }

    #[test]
    fn test_rejects_hour_out_of_range() {
        let history = vec![day("2024-01-01", 60.0).with_hour(24, 10.0)];
        let result = extract_patterns(&history);
        assert!(matches!(result, Err(PredictorError::InvalidHour { hour: 24, .. })));
    }

    #[test]
    fn test_rejects_negative_minutes() {
        let history = vec![day("2024-01-01", -5.0)];
        assert!(matches!(extract_patterns(&history), Err(PredictorError::InvalidMinutes { .. })));

        let history = vec![day("2024-01-01", 30.0).with_app("Chess", f64::NAN)];
        assert!(extract_patterns(&history).is_err());
    }

    #[test]
    fn test_extraction_is_repeatable() {
        let history = vec![day("2024-01-01", 100.0).with_hour(9, 20.0).with_app("Mail", 15.0)];
        assert_eq!(extract_patterns(&history).unwrap(), extract_patterns(&history).unwrap());
    }
}
