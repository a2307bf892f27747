//! CSV export of the reading history.

use sporehouse_types::Reading;
use time::Date;
use time::macros::format_description;

use crate::error::{Error, Result};

/// Header row of exported files.
pub const CSV_HEADER: [&str; 4] = ["Date", "Time", "Temperature (°C)", "Humidity (%)"];

/// Serialize `history` as CSV, oldest first.
///
/// Dates and times use their canonical forms (or `--`), measurements their
/// shortest round-trip form. Fails with [`Error::NoData`] when there is
/// nothing to export.
pub fn export_csv(history: &[Reading]) -> Result<String> {
    if history.is_empty() {
        return Err(Error::NoData);
    }

    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADER)?;
    for reading in history {
        writer.write_record([
            reading.date.to_string(),
            reading.time.to_string(),
            reading.temperature.to_string(),
            reading.humidity.to_string(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| Error::Io(e.into_error()))?;
    // Every field was written from a `String`, so the bytes are valid UTF-8.
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Default file name for an export made on `today`, e.g.
/// `mushroom_monitor_2025-10-30.csv`.
#[must_use]
pub fn default_export_filename(today: Date) -> String {
    let format = format_description!("[year]-[month]-[day]");
    let stamp = today
        .format(&format)
        .unwrap_or_else(|_| today.to_string());
    format!("mushroom_monitor_{stamp}.csv")
}
