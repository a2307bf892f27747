//! Watch command implementation.
//!
//! Runs the same fetch cycle as the dashboard on the configured interval and
//! prints one status line per cycle. A failed cycle is reported and retried
//! on the next tick; the previous history is kept.

use anyhow::Result;
use owo_colors::OwoColorize;
use sporehouse_core::{DataStore, run_fetch_cycle};
use tokio::time::{MissedTickBehavior, interval};

use crate::config::Settings;
use crate::format::{FormatOptions, format_watch_line};
use crate::util::{build_source, local_clock, write_output};

pub async fn cmd_watch(settings: &Settings, count: u32, opts: &FormatOptions) -> Result<()> {
    let source = build_source(settings)?;
    let mut store = DataStore::with_window(settings.default_window);
    let secs = settings.refresh_interval.as_secs();

    let header = if opts.no_color {
        format!("Watching: {}", source.endpoint())
    } else {
        format!("Watching: {}", source.endpoint().cyan())
    };
    eprintln!("{}", header);
    if count > 0 {
        eprintln!("Interval: {}s | Count: {} | Press Ctrl+C to stop", secs, count);
    } else {
        eprintln!("Interval: {}s | Press Ctrl+C to stop", secs);
    }
    eprintln!("{}", "-".repeat(50));

    let mut ticker = interval(settings.refresh_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut cycles: u32 = 0;

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                eprintln!("\nShutting down...");
                return Ok(());
            }
            _ = ticker.tick() => {}
        }

        let outcome = tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                eprintln!("\nShutting down...");
                return Ok(());
            }
            outcome = run_fetch_cycle(&source, &mut store) => outcome,
        };

        cycles += 1;
        write_output(None, &format_watch_line(&local_clock(), &outcome, &store, opts))?;

        if count > 0 && cycles >= count {
            eprintln!("Completed {} fetches.", cycles);
            return Ok(());
        }
    }
}
