//! Fetch command implementation.

use std::path::PathBuf;

use anyhow::{Result, bail};
use sporehouse_core::{DataStore, FetchOutcome, Window, run_fetch_cycle};
use tracing::debug;

use crate::cli::OutputFormat;
use crate::config::Settings;
use crate::format::{FormatOptions, format_readings_csv, format_readings_json, format_readings_text};
use crate::util::{build_source, write_output};

/// Arguments for the fetch command.
pub struct FetchArgs<'a> {
    pub range: Option<String>,
    pub format: OutputFormat,
    pub output: Option<&'a PathBuf>,
    pub opts: &'a FormatOptions,
}

/// Run one fetch cycle and print the readings in the requested window.
pub async fn cmd_fetch(settings: &Settings, args: FetchArgs<'_>) -> Result<()> {
    let FetchArgs {
        range,
        format,
        output,
        opts,
    } = args;

    let window = match range.as_deref() {
        Some(key) => key.parse::<Window>()?,
        None => settings.default_window,
    };

    let source = build_source(settings)?;
    let mut store = DataStore::with_window(window);

    match run_fetch_cycle(&source, &mut store).await {
        FetchOutcome::Success { count } => debug!(count, window = window.key(), "Fetched"),
        FetchOutcome::Failed { message } => bail!("Fetch failed: {}", message),
    }

    let readings = store.filtered();
    let content = match format {
        OutputFormat::Text => format_readings_text(readings, window, opts),
        OutputFormat::Json => format_readings_json(readings, opts)?,
        OutputFormat::Csv => format_readings_csv(readings)?,
    };
    write_output(output, &content)
}
