#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use screensage::libs::config::PredictorConfig;
    use screensage::libs::error::PredictorError;
    use screensage::libs::patterns::{extract_patterns, UsagePatterns};
    use screensage::libs::prediction::{Confidence, PredictionType, Priority};
    use screensage::libs::predictors::{
        analyze_most_used_apps, analyze_peak_usage, analyze_usage_consistency, analyze_weekend_vs_weekday, generate_habit_insight,
        generate_wellness_tip, habit_insights, predict_goal_achievement, predict_overuse, suggest_break, wellness_tips, PredictionContext,
    };
    use screensage::libs::usage::{CurrentUsage, DailyUsageRecord, UsageLevel, UserGoals};

    fn at_hour(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 4).unwrap().and_hms_opt(hour, 0, 0).unwrap()
    }

    fn goals(daily_limit: f64) -> UserGoals {
        UserGoals { daily_limit }
    }

    fn empty_patterns() -> UsagePatterns {
        extract_patterns(&[]).unwrap()
    }

    /// Monday 2024-01-01 through Sunday 2024-01-07.
    fn week(weekday_total: f64, weekend_total: f64) -> Vec<DailyUsageRecord> {
        (1..=7)
            .map(|d| {
                let total = if d <= 5 { weekday_total } else { weekend_total };
                DailyUsageRecord::new(NaiveDate::from_ymd_opt(2024, 1, d).unwrap(), total)
            })
            .collect()
    }

    #[test]
    fn test_overuse_fires_strictly_above_multiplier() {
        let config = PredictorConfig::default();
        let mut rng = StdRng::seed_from_u64(1);
        let mut ctx = PredictionContext::new(&config, at_hour(20), &mut rng);
        let patterns = empty_patterns();

        // 176 + 4h * 10 = 216 == 180 * 1.2
        let at_boundary = predict_overuse(&mut ctx, &CurrentUsage::new(176.0, 0.0), &patterns, &goals(180.0)).unwrap();
        assert!(at_boundary.is_none());

        let prediction = predict_overuse(&mut ctx, &CurrentUsage::new(177.0, 0.0), &patterns, &goals(180.0))
            .unwrap()
            .unwrap();
        assert_eq!(prediction.kind, PredictionType::OveruseWarning);
        assert_eq!(prediction.title, "⚠️ Overuse Alert");
        assert_eq!(prediction.message, "You're on track to exceed your daily limit by 37 minutes");
        assert_eq!(prediction.confidence, Confidence::High);
        assert_eq!(prediction.priority, Priority::High);
        assert_eq!(prediction.timestamp, at_hour(20));
    }

    #[test]
    fn test_overuse_uses_observed_hourly_rate() {
        let history = vec![DailyUsageRecord::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), 200.0).with_hour(22, 60.0)];
        let patterns = extract_patterns(&history).unwrap();
        let config = PredictorConfig::default();
        let mut rng = StdRng::seed_from_u64(1);
        let mut ctx = PredictionContext::new(&config, at_hour(22), &mut rng);

        // 100 + 2h * 60 = 220 > 216
        let prediction = predict_overuse(&mut ctx, &CurrentUsage::new(100.0, 0.0), &patterns, &goals(180.0))
            .unwrap()
            .unwrap();
        assert_eq!(prediction.message, "You're on track to exceed your daily limit by 40 minutes");
    }

    #[test]
    fn test_unusable_limit_silences_limit_predictors() {
        let config = PredictorConfig::default();
        let mut rng = StdRng::seed_from_u64(1);
        let mut ctx = PredictionContext::new(&config, at_hour(12), &mut rng);
        let current = CurrentUsage::new(100.0, 0.0);

        for limit in [0.0, -30.0, f64::NAN] {
            assert_eq!(predict_overuse(&mut ctx, &current, &empty_patterns(), &goals(limit)), Ok(None));
            assert_eq!(predict_goal_achievement(&mut ctx, &current, &goals(limit)), Ok(None));
        }

        let tip = generate_wellness_tip(&mut ctx, &current, &goals(0.0)).unwrap().unwrap();
        assert!(wellness_tips(UsageLevel::Excessive).contains(&tip.message.as_str()));
    }

    #[test]
    fn test_break_thresholds() {
        let config = PredictorConfig::default();
        let mut rng = StdRng::seed_from_u64(2);
        let mut ctx = PredictionContext::new(&config, at_hour(15), &mut rng);

        assert!(suggest_break(&mut ctx, &CurrentUsage::new(0.0, 60.0)).unwrap().is_none());

        let medium = suggest_break(&mut ctx, &CurrentUsage::new(0.0, 61.0)).unwrap().unwrap();
        assert_eq!(medium.kind, PredictionType::BreakSuggestion);
        assert_eq!(medium.confidence, Confidence::Medium);
        assert_eq!(medium.priority, Priority::Medium);
        assert_eq!(medium.message, "You've been using your device for 61 minutes straight. Time for a break!");

        let still_medium = suggest_break(&mut ctx, &CurrentUsage::new(0.0, 120.0)).unwrap().unwrap();
        assert_eq!(still_medium.confidence, Confidence::Medium);

        let high = suggest_break(&mut ctx, &CurrentUsage::new(0.0, 121.0)).unwrap().unwrap();
        assert_eq!(high.confidence, Confidence::High);
        assert_eq!(high.action_suggestion, "Try the 20-20-20 rule: Look at something 20 feet away for 20 seconds");
    }

    #[test]
    fn test_break_rejects_negative_minutes() {
        let config = PredictorConfig::default();
        let mut rng = StdRng::seed_from_u64(2);
        let mut ctx = PredictionContext::new(&config, at_hour(15), &mut rng);
        assert!(matches!(
            suggest_break(&mut ctx, &CurrentUsage::new(0.0, -1.0)),
            Err(PredictorError::InvalidMinutes { .. })
        ));
    }

    #[test]
    fn test_goal_window_is_half_open() {
        let config = PredictorConfig::default();
        let mut rng = StdRng::seed_from_u64(3);
        let mut ctx = PredictionContext::new(&config, at_hour(18), &mut rng);

        assert!(predict_goal_achievement(&mut ctx, &CurrentUsage::new(799.0, 0.0), &goals(1000.0)).unwrap().is_none());
        assert!(predict_goal_achievement(&mut ctx, &CurrentUsage::new(1000.0, 0.0), &goals(1000.0)).unwrap().is_none());

        let prediction = predict_goal_achievement(&mut ctx, &CurrentUsage::new(800.0, 0.0), &goals(1000.0))
            .unwrap()
            .unwrap();
        assert_eq!(prediction.kind, PredictionType::GoalAchievement);
        assert_eq!(prediction.message, "You're 20% away from your daily goal!");
        assert_eq!(prediction.confidence, Confidence::High);
        assert_eq!(prediction.priority, Priority::Low);
    }

    #[test]
    fn test_weekend_heavier_than_weekdays() {
        let patterns = extract_patterns(&week(100.0, 200.0)).unwrap();
        let insight = analyze_weekend_vs_weekday(&patterns, &PredictorConfig::default()).unwrap();
        assert_eq!(insight.message, "You use your device 100 minutes more on weekends");
        assert_eq!(insight.confidence, Confidence::High);
    }

    #[test]
    fn test_weekend_lighter_than_weekdays() {
        let patterns = extract_patterns(&week(200.0, 100.0)).unwrap();
        let insight = analyze_weekend_vs_weekday(&patterns, &PredictorConfig::default()).unwrap();
        assert_eq!(insight.message, "You use your device 100 minutes less on weekends");
    }

    #[test]
    fn test_missing_weekdays_count_as_zero() {
        // A single Monday: weekday average 20, weekend 0
        let monday = vec![DailyUsageRecord::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), 100.0)];
        let patterns = extract_patterns(&monday).unwrap();
        assert!(analyze_weekend_vs_weekday(&patterns, &PredictorConfig::default()).is_none());

        // A single Saturday: weekend average 50, weekday 0
        let saturday = vec![DailyUsageRecord::new(NaiveDate::from_ymd_opt(2024, 1, 6).unwrap(), 100.0)];
        let patterns = extract_patterns(&saturday).unwrap();
        let insight = analyze_weekend_vs_weekday(&patterns, &PredictorConfig::default()).unwrap();
        assert_eq!(insight.message, "You use your device 50 minutes more on weekends");
    }

    #[test]
    fn test_most_used_app() {
        let history = vec![
            DailyUsageRecord::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), 120.0)
                .with_app("Instagram", 60.0)
                .with_app("Mail", 20.0),
            DailyUsageRecord::new(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(), 90.0).with_app("Instagram", 45.0),
        ];
        let patterns = extract_patterns(&history).unwrap();
        let insight = analyze_most_used_apps(&patterns).unwrap();
        assert_eq!(insight.message, "Your most used app is Instagram with an average of 53 minutes per day");

        assert!(analyze_most_used_apps(&empty_patterns()).is_none());
    }

    #[test]
    fn test_usage_consistency() {
        let config = PredictorConfig::default();
        assert!(analyze_usage_consistency(&[], &config).is_none());
        assert!(analyze_usage_consistency(&week(120.0, 120.0), &config).is_none());

        let insight = analyze_usage_consistency(&week(100.0, 200.0), &config).unwrap();
        assert_eq!(insight.message, "Your usage patterns vary significantly day-to-day");
        assert_eq!(insight.confidence, Confidence::Medium);
    }

    #[test]
    fn test_peak_usage_time_of_day() {
        let history = vec![DailyUsageRecord::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), 90.0)
            .with_hour(21, 50.0)
            .with_hour(14, 40.0)];
        let patterns = extract_patterns(&history).unwrap();
        let insight = analyze_peak_usage(&patterns).unwrap();
        assert_eq!(insight.message, "Your peak usage time is in the night around 21:00");
    }

    #[test]
    fn test_habit_insight_needs_a_candidate() {
        let config = PredictorConfig::default();
        let history = week(120.0, 120.0);
        let patterns = extract_patterns(&history).unwrap();
        assert!(habit_insights(&patterns, &history, &config).is_empty());

        let mut rng = StdRng::seed_from_u64(4);
        let mut ctx = PredictionContext::new(&config, at_hour(10), &mut rng);
        assert!(generate_habit_insight(&mut ctx, &patterns, &history).unwrap().is_none());
    }

    #[test]
    fn test_habit_insight_picks_a_qualifying_candidate() {
        let config = PredictorConfig::default();
        let history = week(100.0, 200.0);
        let patterns = extract_patterns(&history).unwrap();
        let candidates: Vec<String> = habit_insights(&patterns, &history, &config).into_iter().map(|insight| insight.message).collect();
        assert_eq!(candidates.len(), 2);

        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut ctx = PredictionContext::new(&config, at_hour(10), &mut rng);
            let prediction = generate_habit_insight(&mut ctx, &patterns, &history).unwrap().unwrap();
            assert_eq!(prediction.kind, PredictionType::HabitInsight);
            assert_eq!(prediction.title, "📊 Usage Insight");
            assert_eq!(prediction.priority, Priority::Low);
            assert!(candidates.contains(&prediction.message));
        }
    }

    #[test]
    fn test_wellness_tip_matches_usage_level() {
        let config = PredictorConfig::default();
        let cases = [
            (60.0, UsageLevel::Low),
            (170.0, UsageLevel::Moderate),
            (250.0, UsageLevel::High),
            (400.0, UsageLevel::Excessive),
        ];

        for (seed, (total, level)) in cases.into_iter().enumerate() {
            let mut rng = StdRng::seed_from_u64(seed as u64);
            let mut ctx = PredictionContext::new(&config, at_hour(9), &mut rng);
            let prediction = generate_wellness_tip(&mut ctx, &CurrentUsage::new(total, 0.0), &goals(180.0))
                .unwrap()
                .unwrap();
            assert_eq!(prediction.kind, PredictionType::WellnessTip);
            assert_eq!(prediction.confidence, Confidence::Medium);
            assert_eq!(prediction.priority, Priority::Low);
            assert_eq!(prediction.action_suggestion, "Small changes lead to big improvements in digital wellness");
            assert!(wellness_tips(level).contains(&prediction.message.as_str()));
        }
    }

    #[test]
    fn test_same_seed_same_choices() {
        let config = PredictorConfig::default();
        let current = CurrentUsage::new(100.0, 0.0);

        let mut first_rng = StdRng::seed_from_u64(42);
        let mut first_ctx = PredictionContext::new(&config, at_hour(9), &mut first_rng);
        let first = generate_wellness_tip(&mut first_ctx, &current, &goals(180.0)).unwrap();

        let mut second_rng = StdRng::seed_from_u64(42);
        let mut second_ctx = PredictionContext::new(&config, at_hour(9), &mut second_rng);
        let second = generate_wellness_tip(&mut second_ctx, &current, &goals(180.0)).unwrap();

        assert_eq!(first, second);
    }
}
