//! Shared helpers for commands and the dashboard.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use sporehouse_core::{MockSource, ReadingSource, SheetClient, default_export_filename, export_csv};
use sporehouse_types::Reading;
use time::{Date, OffsetDateTime};
use tracing::info;

use crate::config::Settings;

/// Readings generated by `--demo`: one day at one per minute.
pub const DEMO_READINGS: usize = 1440;

/// Build the reading source described by `settings`.
pub fn build_source(settings: &Settings) -> Result<Arc<dyn ReadingSource>> {
    if settings.demo {
        info!(readings = DEMO_READINGS, "Using demo source");
        return Ok(Arc::new(MockSource::demo(DEMO_READINGS, OffsetDateTime::now_utc())));
    }

    let Some(url) = settings.endpoint_url.as_deref() else {
        bail!(
            "No endpoint configured. Pass --url, set SPOREHOUSE_URL, add endpoint_url to {}, or use --demo",
            crate::config::Config::path().display()
        );
    };

    let client = SheetClient::with_timeout(url, settings.request_timeout)
        .with_context(|| format!("Invalid endpoint URL: {}", url))?;
    info!(url = client.url(), timeout = ?settings.request_timeout, "Using sheet endpoint");
    Ok(Arc::new(client))
}

/// Current local date, falling back to UTC when the offset is unknown.
pub fn today() -> Date {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
}

/// Local wall-clock time as `HH:MM:SS`.
pub fn local_clock() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}

/// Write `history` as CSV into `dir` under the default export file name.
///
/// Returns the path written.
pub fn write_export(dir: &Path, history: &[Reading], today: Date) -> Result<PathBuf> {
    let content = export_csv(history)?;
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create export directory: {}", dir.display()))?;
    let path = dir.join(default_export_filename(today));
    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write to {}", path.display()))?;
    info!(path = %path.display(), readings = history.len(), "Exported history");
    Ok(path)
}

/// Write output to file or stdout
pub fn write_output(output: Option<&PathBuf>, content: &str) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write to {}", path.display()))?;
        }
        None => {
            print!("{}", content);
            io::stdout().flush()?;
        }
    }
    Ok(())
}
