//! Output formatting utilities for text, JSON, and CSV output.

use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;
use sporehouse_core::display::{format_humidity, format_temperature};
use sporehouse_core::export::{CSV_HEADER, export_csv};
use sporehouse_core::{DataStore, FetchOutcome, NO_DATA, Reading, Window, reading_timestamp};

/// Formatting options for output.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatOptions {
    /// Disable colored output.
    pub no_color: bool,
    /// Use compact JSON output (no pretty-printing).
    pub compact: bool,
}

impl FormatOptions {
    pub fn new(no_color: bool) -> Self {
        Self {
            no_color,
            compact: false,
        }
    }

    /// Serialize value to JSON string, respecting compact option.
    pub fn as_json<T: Serialize>(&self, value: &T) -> Result<String> {
        let json = if self.compact {
            serde_json::to_string(value)?
        } else {
            serde_json::to_string_pretty(value)?
        };
        Ok(json + "\n")
    }
}

/// Format readings as an aligned table, newest first.
#[must_use]
pub fn format_readings_text(readings: &[Reading], window: Window, opts: &FormatOptions) -> String {
    if readings.is_empty() {
        return "No data available yet. Waiting for sensor readings...\n".to_string();
    }

    let title = format!("{} ({} readings)", window.label(), readings.len());
    let mut output = if opts.no_color {
        format!("{}\n\n", title)
    } else {
        format!("{}\n\n", title.bold())
    };

    output.push_str(&format!(
        "{:<22} {:>12} {:>10}\n",
        "Timestamp", "Temperature", "Humidity"
    ));
    output.push_str(&format!("{}\n", "-".repeat(46)));

    for reading in readings.iter().rev() {
        output.push_str(&format!(
            "{:<22} {:>12} {:>10}\n",
            reading_timestamp(reading),
            format_temperature(reading.temperature),
            format_humidity(reading.humidity),
        ));
    }

    output
}

/// Format readings as CSV, oldest first.
///
/// An empty window yields only the header row.
pub fn format_readings_csv(readings: &[Reading]) -> Result<String> {
    if readings.is_empty() {
        return Ok(format!("{}\n", CSV_HEADER.join(",")));
    }
    Ok(export_csv(readings)?)
}

/// Format readings as a JSON array, oldest first.
pub fn format_readings_json(readings: &[Reading], opts: &FormatOptions) -> Result<String> {
    #[derive(Serialize)]
    struct ReadingJson<'a> {
        #[serde(flatten)]
        reading: &'a Reading,
        timestamp: String,
    }

    let records: Vec<ReadingJson<'_>> = readings
        .iter()
        .map(|reading| ReadingJson {
            reading,
            timestamp: reading_timestamp(reading),
        })
        .collect();

    opts.as_json(&records)
}

/// One status line per watch cycle: local time, outcome and latest reading.
#[must_use]
pub fn format_watch_line(
    clock: &str,
    outcome: &FetchOutcome,
    store: &DataStore,
    opts: &FormatOptions,
) -> String {
    match outcome {
        FetchOutcome::Success { count } => {
            let latest = match store.latest() {
                Some(reading) => format!(
                    "{}  {}  (last update: {})",
                    format_temperature(reading.temperature),
                    format_humidity(reading.humidity),
                    reading_timestamp(reading),
                ),
                None => NO_DATA.to_string(),
            };
            let status = store.status().label();
            if opts.no_color {
                format!("[{}] {} | {} readings | {}\n", clock, status, count, latest)
            } else {
                format!(
                    "[{}] {} | {} readings | {}\n",
                    clock.dimmed(),
                    status.green(),
                    count,
                    latest
                )
            }
        }
        FetchOutcome::Failed { message } => {
            let status = store.status().label();
            if opts.no_color {
                format!("[{}] {}: {}\n", clock, status, message)
            } else {
                format!("[{}] {}: {}\n", clock.dimmed(), status.red(), message)
            }
        }
    }
}
