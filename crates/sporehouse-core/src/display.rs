//! Human-readable formatting for timestamps and measurements.

use sporehouse_types::{MISSING, Reading};

/// Placeholder shown when a reading has no usable timestamp.
pub const NO_DATA: &str = "No data";

/// Format a canonical date (`YYYY-MM-DD`) and time (`HH:MM:SS`) as
/// `DD-MM-YYYY HH:MM AM|PM`.
///
/// Seconds are dropped and the hour is converted to a zero-padded 12-hour
/// clock. Either input being empty or the `--` sentinel yields
/// [`NO_DATA`]. Inputs that do not split into the expected components fall
/// back to `"{date} {time}"`.
///
/// ```
/// use sporehouse_core::display::format_date_time;
///
/// assert_eq!(format_date_time("2025-10-30", "12:07:51"), "30-10-2025 12:07 PM");
/// assert_eq!(format_date_time("2025-10-30", "00:15:00"), "30-10-2025 12:15 AM");
/// assert_eq!(format_date_time("--", "--"), "No data");
/// ```
#[must_use]
pub fn format_date_time(date: &str, time: &str) -> String {
    if date.is_empty() || time.is_empty() || date == MISSING || time == MISSING {
        return NO_DATA.to_string();
    }

    try_format(date, time).unwrap_or_else(|| format!("{date} {time}"))
}

fn try_format(date: &str, time: &str) -> Option<String> {
    let mut date_parts = date.split('-');
    let year = date_parts.next()?;
    let month = date_parts.next()?;
    let day = date_parts.next()?;

    let mut time_parts = time.split(':');
    let hour: u8 = time_parts.next()?.trim().parse().ok()?;
    let minutes = time_parts.next()?;

    if hour > 23 {
        return None;
    }

    let meridiem = if hour >= 12 { "PM" } else { "AM" };
    let hour12 = match hour % 12 {
        0 => 12,
        h => h,
    };

    Some(format!("{day}-{month}-{year} {hour12:02}:{minutes} {meridiem}"))
}

/// Display timestamp of a reading, e.g. `30-10-2025 12:07 PM`.
#[must_use]
pub fn reading_timestamp(reading: &Reading) -> String {
    format_date_time(&reading.date.to_string(), &reading.time.to_string())
}

/// Temperature with one decimal and unit, e.g. `21.5°C`.
#[must_use]
pub fn format_temperature(celsius: f64) -> String {
    format!("{celsius:.1}°C")
}

/// Humidity with one decimal and unit, e.g. `58.2%`.
#[must_use]
pub fn format_humidity(percent: f64) -> String {
    format!("{percent:.1}%")
}
