//! Core types for mushroom house sensor data.

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::{Date, Month, Time};

use crate::error::ParseError;

/// Placeholder rendered for a date or time that could not be recovered.
pub const MISSING: &str = "--";

/// Returns true if `s` has the shape `dddd-dd-dd` (digits only, no range check).
#[must_use]
pub fn is_date_shape(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() == 10
        && b[4] == b'-'
        && b[7] == b'-'
        && b.iter()
            .enumerate()
            .all(|(i, c)| i == 4 || i == 7 || c.is_ascii_digit())
}

/// Returns true if `s` has the shape `dd:dd:dd` (digits only, no range check).
#[must_use]
pub fn is_time_shape(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() == 8
        && b[2] == b':'
        && b[5] == b':'
        && b.iter()
            .enumerate()
            .all(|(i, c)| i == 2 || i == 5 || c.is_ascii_digit())
}

/// Calendar date of a reading.
///
/// Sentinel handling is part of the type: a date the normalizer could not
/// recover is [`ReadingDate::Missing`], and an input it could not interpret
/// is kept verbatim as [`ReadingDate::Unrecognized`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum ReadingDate {
    /// A valid calendar date, rendered as `YYYY-MM-DD`.
    Known(Date),
    /// No usable value was supplied. Rendered as `--`.
    #[default]
    Missing,
    /// Last-resort textual form of an input that was not a date.
    Unrecognized(String),
}

impl ReadingDate {
    /// Build from year/month/day components, or `None` if they do not form
    /// a real calendar date.
    #[must_use]
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Option<Self> {
        let month = Month::try_from(month).ok()?;
        Date::from_calendar_date(year, month, day)
            .ok()
            .map(Self::Known)
    }

    /// Interpret a string that should already be in canonical `YYYY-MM-DD`
    /// form.
    ///
    /// `--` and the empty string map to [`ReadingDate::Missing`]; text with
    /// the right shape but an impossible date (`2025-02-30`) and any other
    /// text map to [`ReadingDate::Unrecognized`].
    #[must_use]
    pub fn from_canonical(s: &str) -> Self {
        if s.is_empty() || s == MISSING {
            return Self::Missing;
        }
        if is_date_shape(s) {
            let year = s[0..4].parse().ok();
            let month = s[5..7].parse().ok();
            let day = s[8..10].parse().ok();
            if let (Some(y), Some(m), Some(d)) = (year, month, day)
                && let Some(date) = Self::from_ymd(y, m, d)
            {
                return date;
            }
        }
        Self::Unrecognized(s.to_string())
    }

    /// Whether this is a real calendar date.
    #[must_use]
    pub fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }

    /// Whether this is the `--` sentinel.
    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// The calendar date, if known.
    #[must_use]
    pub fn date(&self) -> Option<Date> {
        match self {
            Self::Known(d) => Some(*d),
            _ => None,
        }
    }
}

impl fmt::Display for ReadingDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(d) => write!(
                f,
                "{:04}-{:02}-{:02}",
                d.year(),
                u8::from(d.month()),
                d.day()
            ),
            Self::Missing => f.write_str(MISSING),
            Self::Unrecognized(raw) => f.write_str(raw),
        }
    }
}

impl From<Date> for ReadingDate {
    fn from(date: Date) -> Self {
        Self::Known(date)
    }
}

/// Time of day of a reading.
///
/// Mirrors [`ReadingDate`]: canonical `HH:MM:SS` (24-hour) when known.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum ReadingTime {
    /// A valid time of day, rendered as `HH:MM:SS`.
    Known(Time),
    /// No usable value was supplied. Rendered as `--`.
    #[default]
    Missing,
    /// Last-resort textual form of an input that was not a time.
    Unrecognized(String),
}

impl ReadingTime {
    /// Build from hour/minute/second components, or `None` if out of range.
    #[must_use]
    pub fn from_hms(hour: u8, minute: u8, second: u8) -> Option<Self> {
        Time::from_hms(hour, minute, second).ok().map(Self::Known)
    }

    /// Interpret a string that should already be in canonical `HH:MM:SS`
    /// form. See [`ReadingDate::from_canonical`].
    #[must_use]
    pub fn from_canonical(s: &str) -> Self {
        if s.is_empty() || s == MISSING {
            return Self::Missing;
        }
        if is_time_shape(s) {
            let hour = s[0..2].parse().ok();
            let minute = s[3..5].parse().ok();
            let second = s[6..8].parse().ok();
            if let (Some(h), Some(m), Some(sec)) = (hour, minute, second)
                && let Some(time) = Self::from_hms(h, m, sec)
            {
                return time;
            }
        }
        Self::Unrecognized(s.to_string())
    }

    /// Whether this is a real time of day.
    #[must_use]
    pub fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }

    /// Whether this is the `--` sentinel.
    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// The time of day, if known.
    #[must_use]
    pub fn time(&self) -> Option<Time> {
        match self {
            Self::Known(t) => Some(*t),
            _ => None,
        }
    }
}

impl fmt::Display for ReadingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(t) => write!(f, "{:02}:{:02}:{:02}", t.hour(), t.minute(), t.second()),
            Self::Missing => f.write_str(MISSING),
            Self::Unrecognized(raw) => f.write_str(raw),
        }
    }
}

impl From<Time> for ReadingTime {
    fn from(time: Time) -> Self {
        Self::Known(time)
    }
}

#[cfg(feature = "serde")]
impl Serialize for ReadingDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for ReadingDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from_canonical(&s))
    }
}

#[cfg(feature = "serde")]
impl Serialize for ReadingTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for ReadingTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from_canonical(&s))
    }
}

/// One normalized sensor sample.
///
/// Readings are only produced by the normalizer and are never mutated
/// afterwards. `temperature` and `humidity` are always finite.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Reading {
    /// Calendar date of the sample.
    pub date: ReadingDate,
    /// Time of day of the sample.
    pub time: ReadingTime,
    /// Temperature in degrees Celsius.
    pub temperature: f64,
    /// Relative humidity in percent.
    pub humidity: f64,
}

impl Reading {
    /// Create a reading. Non-finite measurements are replaced with `0.0`.
    #[must_use]
    pub fn new(date: ReadingDate, time: ReadingTime, temperature: f64, humidity: f64) -> Self {
        Self {
            date,
            time,
            temperature: finite_or_zero(temperature),
            humidity: finite_or_zero(humidity),
        }
    }

    /// Whether both the date and the time were recovered.
    #[must_use]
    pub fn has_timestamp(&self) -> bool {
        self.date.is_known() && self.time.is_known()
    }
}

#[inline]
fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// Display window selected by the user.
///
/// Windows are positional: each selects the last N readings under the
/// assumption of one reading per minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Window {
    /// Last 60 readings (about one hour).
    #[default]
    LastHour,
    /// Last 1440 readings (about one day).
    LastDay,
    /// Last 43200 readings (about 30 days).
    LastMonth,
    /// Last 525600 readings (about one year), or everything available.
    LastYear,
}

impl Window {
    /// All windows in button order.
    pub const ALL: [Window; 4] = [
        Window::LastHour,
        Window::LastDay,
        Window::LastMonth,
        Window::LastYear,
    ];

    /// Maximum number of trailing readings this window covers.
    #[must_use]
    pub const fn max_readings(self) -> usize {
        match self {
            Self::LastHour => 60,
            Self::LastDay => 1440,
            Self::LastMonth => 43_200,
            Self::LastYear => 525_600,
        }
    }

    /// Short key used on the command line and in the config file.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::LastHour => "60",
            Self::LastDay => "day",
            Self::LastMonth => "month",
            Self::LastYear => "year",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::LastHour => "Last 60 min",
            Self::LastDay => "Last 24 h",
            Self::LastMonth => "Last 30 days",
            Self::LastYear => "Last year",
        }
    }

    /// Strictly parse a window key. Returns `None` for unknown keys.
    #[must_use]
    pub fn parse_key(key: &str) -> Option<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "60" | "hour" => Some(Self::LastHour),
            "day" => Some(Self::LastDay),
            "month" => Some(Self::LastMonth),
            "year" | "all" => Some(Self::LastYear),
            _ => None,
        }
    }

    /// Lenient mapping used by the range buttons: unknown keys select the
    /// last hour.
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        Self::parse_key(key).unwrap_or_default()
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Window {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_key(s).ok_or_else(|| ParseError::UnknownWindow(s.to_string()))
    }
}

/// Connection status shown by the status indicator.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "state", content = "message", rename_all = "snake_case"))]
pub enum FetchStatus {
    /// A fetch is in progress (also the state before the first fetch).
    #[default]
    Connecting,
    /// The last fetch succeeded.
    Connected,
    /// The last fetch failed.
    Error(String),
}

impl FetchStatus {
    /// Text for the status indicator.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Connecting => "Connecting...",
            Self::Connected => "Connected",
            Self::Error(_) => "Connection Error",
        }
    }

    /// Whether the last cycle failed.
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}
