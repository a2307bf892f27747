//! Configuration file management.
//!
//! Settings live in `config.toml` under the platform config directory
//! (`~/.config/sporehouse/config.toml` on Linux). Every field has a
//! default, so a partial or missing file is fine. Command-line flags and
//! `SPOREHOUSE_*` environment variables override the file; the resolved
//! [`Settings`] are fixed for the lifetime of the process.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use sporehouse_core::TABLE_ROWS;
use sporehouse_types::Window;

use crate::cli::SourceArgs;

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Spreadsheet endpoint URL
    #[serde(default)]
    pub endpoint_url: Option<String>,

    /// Seconds between automatic fetches
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval_secs: u64,

    /// HTTP request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Window selected at startup: "60", "day", "month" or "year"
    #[serde(default = "default_range")]
    pub default_range: String,

    /// Directory for CSV exports. Empty string means the current directory.
    #[serde(default)]
    pub export_directory: String,

    /// Rows shown in the recent-readings table
    #[serde(default = "default_table_rows")]
    pub table_rows: usize,
}

fn default_refresh_interval() -> u64 {
    60
}

fn default_request_timeout() -> u64 {
    10
}

fn default_range() -> String {
    Window::LastHour.key().to_string()
}

fn default_table_rows() -> usize {
    TABLE_ROWS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint_url: None,
            refresh_interval_secs: default_refresh_interval(),
            request_timeout_secs: default_request_timeout(),
            default_range: default_range(),
            export_directory: String::new(),
            table_rows: default_table_rows(),
        }
    }
}

impl Config {
    /// Default configuration file location.
    pub fn path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("sporehouse")
            .join("config.toml")
    }

    /// Load from the default location, falling back to defaults.
    pub fn load() -> Self {
        Self::load_from(&Self::path())
    }

    /// Load from `path`, falling back to defaults if the file is missing or
    /// unreadable.
    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            match fs::read_to_string(path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        eprintln!("Warning: Failed to parse config: {}", e);
                    }
                },
                Err(e) => {
                    eprintln!("Warning: Failed to read config: {}", e);
                }
            }
        }
        Self::default()
    }

    /// Save to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path())
    }

    /// Save to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }
}

/// Effective settings after applying command-line overrides.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub endpoint_url: Option<String>,
    pub refresh_interval: Duration,
    pub request_timeout: Duration,
    pub default_window: Window,
    pub export_directory: PathBuf,
    pub table_rows: usize,
    pub demo: bool,
}

impl Settings {
    /// Merge `args` over `config` and validate the result.
    pub fn resolve(config: &Config, args: &SourceArgs) -> Result<Self> {
        let endpoint_url = args
            .url
            .clone()
            .or_else(|| config.endpoint_url.clone())
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty());

        if let Some(url) = &endpoint_url
            && !url.starts_with("http://")
            && !url.starts_with("https://")
        {
            bail!("Endpoint URL must start with http:// or https://, got: {}", url);
        }

        let interval_secs = args.interval.unwrap_or(config.refresh_interval_secs);
        if interval_secs == 0 {
            bail!("Refresh interval must be at least 1 second");
        }

        let timeout_secs = args.timeout.unwrap_or(config.request_timeout_secs);
        if timeout_secs == 0 {
            bail!("Request timeout must be at least 1 second");
        }

        let export_directory = if config.export_directory.trim().is_empty() {
            PathBuf::from(".")
        } else {
            PathBuf::from(config.export_directory.trim())
        };

        Ok(Self {
            endpoint_url,
            refresh_interval: Duration::from_secs(interval_secs),
            request_timeout: Duration::from_secs(timeout_secs),
            default_window: Window::from_key(&config.default_range),
            export_directory,
            table_rows: config.table_rows.max(1),
            demo: args.demo,
        })
    }
}
