//! Command-line interface and terminal dashboard for mushroom house sensor
//! readings.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `dashboard` | Interactive terminal dashboard (default) |
//! | `fetch` | Fetch once and print a window of readings |
//! | `watch` | Poll continuously, one status line per fetch |
//! | `export` | Fetch once and write the history as CSV |
//! | `config` | Manage the configuration file |
//! | `completions` | Generate shell completions |
//!
//! # Environment Variables
//!
//! - `SPOREHOUSE_URL`: Endpoint URL (overridden by `--url`)
//! - `SPOREHOUSE_INTERVAL`: Polling interval in seconds
//! - `RUST_LOG`: Log filter when neither `--quiet` nor `--verbose` is given
//! - `NO_COLOR`: Disable colored output when set

mod cli;
mod commands;
mod config;
mod format;
#[cfg(feature = "tui")]
mod tui;
mod util;

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use commands::{FetchArgs, cmd_config, cmd_export, cmd_fetch, cmd_watch};
use config::{Config, Settings};
use format::FormatOptions;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle completions command early (before tracing init)
    if let Some(Commands::Completions { shell }) = cli.command {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "sporehouse", &mut io::stdout());
        return Ok(());
    }

    init_tracing(&cli)?;

    if let Some(Commands::Config { action }) = cli.command {
        return cmd_config(action);
    }

    let config = Config::load();
    let settings = Settings::resolve(&config, &cli.source)?;
    let opts = FormatOptions::new(std::env::var_os("NO_COLOR").is_some());

    match cli.command {
        #[cfg(feature = "tui")]
        None | Some(Commands::Dashboard) => tui::run(&settings).await,
        #[cfg(not(feature = "tui"))]
        None => cmd_watch(&settings, 0, &opts).await,
        Some(Commands::Fetch {
            range,
            format,
            output,
            compact,
        }) => {
            let opts = FormatOptions { compact, ..opts };
            cmd_fetch(
                &settings,
                FetchArgs {
                    range,
                    format,
                    output: output.as_ref(),
                    opts: &opts,
                },
            )
            .await
        }
        Some(Commands::Watch { count }) => cmd_watch(&settings, count, &opts).await,
        Some(Commands::Export { output }) => {
            cmd_export(&settings, output.as_ref(), cli.quiet).await
        }
        Some(Commands::Config { .. }) | Some(Commands::Completions { .. }) => {
            // Already handled above
            unreachable!()
        }
    }
}

/// Whether this invocation takes over the terminal.
fn is_dashboard(command: Option<&Commands>) -> bool {
    #[cfg(feature = "tui")]
    {
        matches!(command, None | Some(Commands::Dashboard))
    }
    #[cfg(not(feature = "tui"))]
    {
        let _ = command;
        false
    }
}

/// Log file used while the dashboard owns the terminal.
fn log_file_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("sporehouse")
        .join("sporehouse.log")
}

/// Initialize tracing.
///
/// `--quiet` selects `warn`, `--verbose` selects `debug`, otherwise
/// `RUST_LOG` or `info`. The dashboard logs to a file instead of stderr.
fn init_tracing(cli: &Cli) -> Result<()> {
    let filter = if cli.quiet {
        EnvFilter::new("warn")
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    if is_dashboard(cli.command.as_ref()) {
        let path = log_file_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create log directory: {}", parent.display())
            })?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("Failed to open log file: {}", path.display()))?;

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    }

    Ok(())
}
