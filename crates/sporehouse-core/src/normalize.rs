//! Conversion of raw sheet rows into canonical [`Reading`]s.
//!
//! Every function here is total: unusable input degrades to the
//! [`ReadingDate::Missing`] / [`ReadingTime::Missing`] sentinels, to an
//! `Unrecognized` value carrying the input's textual form, or to `0.0`.
//!
//! # Date and time policy
//!
//! | Input | Date | Time |
//! |-------|------|------|
//! | absent (`null`, `""`, `0`, `false`) | `--` | `--` |
//! | `"2025-10-30T18:00:00.000Z"` | `2025-10-30` | `18:00:00` |
//! | `"2025-10-30"` / `"12:07:51"` | passed through | passed through |
//! | structured date/time | its own calendar fields | its own clock fields |
//! | anything else | textual form | textual form |
//!
//! Date/time strings are read as written: the `Z` suffix is ignored, so a
//! sheet cell serialized in UTC keeps its UTC wall-clock fields.

use sporehouse_types::{Reading, ReadingDate, ReadingTime, is_date_shape, is_time_shape};

use crate::raw::{RawRow, RawValue};

/// Separator between the date and time parts of a combined timestamp.
const DATE_TIME_SEPARATOR: char = 'T';

/// Extract the calendar date from a raw cell.
#[must_use]
pub fn extract_date(raw: &RawValue) -> ReadingDate {
    if raw.is_absent() {
        return ReadingDate::Missing;
    }

    match raw {
        RawValue::Text(s) => {
            if s.contains(DATE_TIME_SEPARATOR)
                && let Some(prefix) = s.get(..10).filter(|p| is_date_shape(p))
            {
                return ReadingDate::from_canonical(prefix);
            }
            if is_date_shape(s) {
                return ReadingDate::from_canonical(s);
            }
            ReadingDate::Unrecognized(s.clone())
        }
        RawValue::DateTime(dt) => ReadingDate::Known(dt.date()),
        other => ReadingDate::Unrecognized(other.to_string()),
    }
}

/// Extract the time of day from a raw cell.
#[must_use]
pub fn extract_time(raw: &RawValue) -> ReadingTime {
    if raw.is_absent() {
        return ReadingTime::Missing;
    }

    match raw {
        RawValue::Text(s) => {
            if let Some(clock) = time_after_separator(s) {
                return ReadingTime::from_canonical(clock);
            }
            if is_time_shape(s) {
                return ReadingTime::from_canonical(s);
            }
            ReadingTime::Unrecognized(s.clone())
        }
        RawValue::DateTime(dt) => {
            let (hour, minute, second) = dt.to_hms();
            ReadingTime::from_hms(hour, minute, second).unwrap_or(ReadingTime::Missing)
        }
        other => ReadingTime::Unrecognized(other.to_string()),
    }
}

/// Find the first `HH:MM:SS` that directly follows a `T` separator.
fn time_after_separator(s: &str) -> Option<&str> {
    s.match_indices(DATE_TIME_SEPARATOR).find_map(|(i, sep)| {
        let start = i + sep.len();
        s.get(start..start + 8).filter(|clock| is_time_shape(clock))
    })
}

/// Read a measurement from its primary column, falling back to the
/// alternate column and then to `0.0`.
///
/// Text is parsed by its leading numeric prefix (`"21.5 C"` is `21.5`).
/// Anything that does not yield a finite number resolves to `0.0`.
#[must_use]
pub fn extract_number(primary: &RawValue, alternate: &RawValue) -> f64 {
    let chosen = if !primary.is_absent() {
        primary
    } else if !alternate.is_absent() {
        alternate
    } else {
        return 0.0;
    };

    let value = match chosen {
        RawValue::Number(n) => Some(*n),
        RawValue::Text(s) => parse_float_prefix(s),
        _ => None,
    };

    value.filter(|v| v.is_finite()).unwrap_or(0.0)
}

/// Parse the longest leading floating-point literal of `s`, ignoring
/// leading whitespace. Returns `None` if there is no such prefix.
#[must_use]
pub fn parse_float_prefix(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        end = frac_end;
    }

    if digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it.
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse().ok()
}

/// Normalize one raw row into a canonical reading.
#[must_use]
pub fn normalize(row: &RawRow) -> Reading {
    Reading::new(
        extract_date(&row.date),
        extract_time(&row.time),
        extract_number(&row.temperaturec, &row.temperature),
        extract_number(&row.humidity, &row.humidity1),
    )
}

/// Normalize every row, preserving source order.
#[must_use]
pub fn normalize_rows(rows: &[RawRow]) -> Vec<Reading> {
    rows.iter().map(normalize).collect()
}


/// Property-based tests for normalization.
///
/// Run with:
/// ```bash
/// cargo test -p sporehouse-core normalize::proptests
/// ```
#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any text yields a known date, the sentinel, or the text itself.
        #[test]
        fn extract_date_never_panics(s in ".*") {
            let date = extract_date(&RawValue::Text(s.clone()));
            if !date.is_known() && !date.is_missing() {
                prop_assert!(s.contains(&date.to_string()));
            }
        }

        /// Any ISO timestamp resolves to its own date and clock fields.
        #[test]
        fn iso_timestamp_round_trips(
            y in 1900i32..2100, mo in 1u8..=12, d in 1u8..=28,
            h in 0u8..24, mi in 0u8..60, s in 0u8..60,
        ) {
            let iso = format!("{y:04}-{mo:02}-{d:02}T{h:02}:{mi:02}:{s:02}.000Z");
            let value = RawValue::Text(iso);
            prop_assert_eq!(extract_date(&value).to_string(), format!("{y:04}-{mo:02}-{d:02}"));
            prop_assert_eq!(extract_time(&value).to_string(), format!("{h:02}:{mi:02}:{s:02}"));
        }

        /// Numbers are always finite, whatever the cells hold.
        #[test]
        fn extract_number_is_finite(a in ".*", b in any::<f64>()) {
            let n = extract_number(&RawValue::Text(a), &RawValue::Number(b));
            prop_assert!(n.is_finite());
        }

        /// Formatting a finite number and reading it back is lossless.
        #[test]
        fn parse_float_prefix_reads_display_form(x in -1.0e9f64..1.0e9) {
            prop_assert_eq!(parse_float_prefix(&x.to_string()), Some(x));
        }
    }
}
