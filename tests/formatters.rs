#[cfg(test)]
mod tests {
    use screensage::libs::formatter::{format_detailed_minutes, format_hour, format_minutes};

    #[test]
    fn test_format_minutes_under_an_hour() {
        assert_eq!(format_minutes(0.0), "0m");
        assert_eq!(format_minutes(45.0), "45m");
        assert_eq!(format_minutes(59.4), "59m");
    }

    #[test]
    fn test_format_minutes_hours() {
        assert_eq!(format_minutes(59.6), "1h");
        assert_eq!(format_minutes(120.0), "2h");
        assert_eq!(format_minutes(90.0), "1h 30m");
        assert_eq!(format_minutes(1505.0), "25h 5m");
    }

    #[test]
    fn test_format_minutes_invalid_values() {
        assert_eq!(format_minutes(-10.0), "0m");
        assert_eq!(format_minutes(f64::NAN), "0m");
        assert_eq!(format_minutes(f64::INFINITY), "0m");
    }

    #[test]
    fn test_format_detailed_minutes() {
        assert_eq!(format_detailed_minutes(1.0), "1 minute");
        assert_eq!(format_detailed_minutes(60.0), "1 hour");
        assert_eq!(format_detailed_minutes(61.0), "1 hour 1 minute");
        assert_eq!(format_detailed_minutes(180.0), "3 hours");
        assert_eq!(format_detailed_minutes(185.2), "3 hours 5 minutes");
    }

    #[test]
    fn test_format_hour() {
        assert_eq!(format_hour(0), "00:00");
        assert_eq!(format_hour(9), "09:00");
        assert_eq!(format_hour(23), "23:00");
    }
}
