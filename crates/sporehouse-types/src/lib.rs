//! Platform-agnostic types for mushroom house sensor readings.
//!
//! This crate provides the data model shared by the core library and the
//! terminal dashboard.
//!
//! # Features
//!
//! - [`Reading`]: one normalized temperature/humidity sample
//! - [`ReadingDate`] / [`ReadingTime`]: canonical date and time with explicit
//!   sentinel variants instead of magic strings
//! - [`Window`]: the display window selected by the user
//! - [`FetchStatus`]: the connection status indicator
//!
//! # Example
//!
//! ```
//! use sporehouse_types::{Reading, ReadingDate, ReadingTime, Window};
//!
//! let reading = Reading::new(
//!     ReadingDate::from_canonical("2025-10-30"),
//!     ReadingTime::from_canonical("12:07:51"),
//!     21.5,
//!     58.2,
//! );
//! assert_eq!(reading.date.to_string(), "2025-10-30");
//! assert_eq!(Window::from_key("day").max_readings(), 1440);
//! ```

pub mod error;
pub mod types;

pub use error::{ParseError, ParseResult};
pub use types::{
    FetchStatus, MISSING, Reading, ReadingDate, ReadingTime, Window, is_date_shape, is_time_shape,
};

#[cfg(test)]
mod tests {
    use super::*;

    // --- ReadingDate tests ---

    #[test]
    fn test_date_from_canonical_valid() {
        let date = ReadingDate::from_canonical("2025-10-30");
        assert!(date.is_known());
        assert_eq!(date.to_string(), "2025-10-30");
    }

    #[test]
    fn test_date_from_canonical_sentinel_and_empty() {
        assert_eq!(ReadingDate::from_canonical("--"), ReadingDate::Missing);
        assert_eq!(ReadingDate::from_canonical(""), ReadingDate::Missing);
        assert_eq!(ReadingDate::Missing.to_string(), "--");
    }

    #[test]
    fn test_date_from_canonical_impossible_date() {
        let date = ReadingDate::from_canonical("2025-02-30");
        assert_eq!(date, ReadingDate::Unrecognized("2025-02-30".to_string()));
        assert_eq!(date.to_string(), "2025-02-30");
    }

    #[test]
    fn test_date_from_canonical_other_text() {
        let date = ReadingDate::from_canonical("30/10/2025");
        assert!(!date.is_known());
        assert!(!date.is_missing());
        assert_eq!(date.to_string(), "30/10/2025");
    }

    #[test]
    fn test_date_zero_pads_components() {
        let date = ReadingDate::from_ymd(2025, 3, 7).unwrap();
        assert_eq!(date.to_string(), "2025-03-07");
    }

    #[test]
    fn test_date_from_ymd_rejects_bad_month() {
        assert!(ReadingDate::from_ymd(2025, 13, 1).is_none());
        assert!(ReadingDate::from_ymd(2025, 0, 1).is_none());
    }

    // --- ReadingTime tests ---

    #[test]
    fn test_time_from_canonical_valid() {
        let time = ReadingTime::from_canonical("00:15:00");
        assert!(time.is_known());
        assert_eq!(time.to_string(), "00:15:00");
    }

    #[test]
    fn test_time_from_canonical_out_of_range() {
        let time = ReadingTime::from_canonical("25:00:00");
        assert_eq!(time, ReadingTime::Unrecognized("25:00:00".to_string()));
    }

    #[test]
    fn test_time_sentinel() {
        assert!(ReadingTime::from_canonical("--").is_missing());
        assert_eq!(ReadingTime::default().to_string(), "--");
    }

    // --- shape helpers ---

    #[test]
    fn test_shape_helpers() {
        assert!(is_date_shape("2025-10-30"));
        assert!(!is_date_shape("2025-10-30T00:00:00"));
        assert!(!is_date_shape("2025/10/30"));
        assert!(is_time_shape("12:07:51"));
        assert!(!is_time_shape("12:07"));
        assert!(!is_time_shape("1a:07:51"));
    }

    // --- Reading tests ---

    #[test]
    fn test_reading_new_replaces_non_finite() {
        let reading = Reading::new(
            ReadingDate::Missing,
            ReadingTime::Missing,
            f64::NAN,
            f64::INFINITY,
        );
        assert_eq!(reading.temperature, 0.0);
        assert_eq!(reading.humidity, 0.0);
    }

    #[test]
    fn test_reading_default_is_sentinel() {
        let reading = Reading::default();
        assert!(reading.date.is_missing());
        assert!(reading.time.is_missing());
        assert!(!reading.has_timestamp());
    }

    #[test]
    fn test_reading_serializes_canonical_strings() {
        let reading = Reading::new(
            ReadingDate::from_canonical("2025-10-30"),
            ReadingTime::from_canonical("12:07:51"),
            21.5,
            58.2,
        );
        let json = serde_json::to_value(&reading).unwrap();
        assert_eq!(json["date"], "2025-10-30");
        assert_eq!(json["time"], "12:07:51");
        assert_eq!(json["temperature"], 21.5);

        let back: Reading = serde_json::from_value(json).unwrap();
        assert_eq!(back, reading);
    }

    // --- Window tests ---

    #[test]
    fn test_window_sizes() {
        assert_eq!(Window::LastHour.max_readings(), 60);
        assert_eq!(Window::LastDay.max_readings(), 1440);
        assert_eq!(Window::LastMonth.max_readings(), 43_200);
        assert_eq!(Window::LastYear.max_readings(), 525_600);
    }

    #[test]
    fn test_window_from_key_defaults_to_hour() {
        assert_eq!(Window::from_key("day"), Window::LastDay);
        assert_eq!(Window::from_key("MONTH"), Window::LastMonth);
        assert_eq!(Window::from_key("year"), Window::LastYear);
        assert_eq!(Window::from_key("60"), Window::LastHour);
        assert_eq!(Window::from_key("fortnight"), Window::LastHour);
    }

    #[test]
    fn test_window_from_str_rejects_unknown() {
        assert_eq!("day".parse::<Window>().unwrap(), Window::LastDay);
        let err = "week".parse::<Window>().unwrap_err();
        assert!(err.to_string().contains("week"));
    }

    #[test]
    fn test_window_key_round_trips() {
        for window in Window::ALL {
            assert_eq!(Window::parse_key(window.key()), Some(window));
        }
    }

    // --- FetchStatus tests ---

    #[test]
    fn test_fetch_status_labels() {
        assert_eq!(FetchStatus::default(), FetchStatus::Connecting);
        assert_eq!(FetchStatus::Connecting.label(), "Connecting...");
        assert_eq!(FetchStatus::Connected.label(), "Connected");
        let err = FetchStatus::Error("timeout".into());
        assert_eq!(err.label(), "Connection Error");
        assert!(err.is_error());
    }
}
