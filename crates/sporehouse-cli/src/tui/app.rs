//! Application state for the dashboard.
//!
//! [`App`] owns the [`DataStore`] and applies [`DashboardEvent`]s from the
//! background worker to it. Everything the UI draws is derived from the
//! store, so changing the window re-renders already-fetched data without
//! touching the network.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::style::Color;
use sporehouse_core::{Command, DashboardEvent, DataStore, Window};
use tokio::sync::mpsc;
use tracing::{debug, info};

use super::ui::theme::AppTheme;
use crate::config::Settings;
use crate::util::{today, write_export};

/// Color theme selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Palette for this theme.
    #[must_use]
    pub fn palette(self) -> AppTheme {
        match self {
            Self::Dark => AppTheme::dark(),
            Self::Light => AppTheme::light(),
        }
    }

    /// Frame background.
    #[must_use]
    pub fn bg(self) -> Color {
        match self {
            Self::Dark => Color::Reset,
            Self::Light => Color::Rgb(255, 255, 255),
        }
    }

    /// The other theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

/// Main application state for the dashboard.
pub struct App {
    /// Whether the application should exit.
    pub should_quit: bool,
    /// History, selected window and connection status.
    pub store: DataStore,
    /// Queue of status messages with their creation time.
    pub status_messages: Vec<(String, Instant)>,
    /// How long to show each status message (in seconds).
    pub status_message_timeout: u64,
    /// Whether to show the help overlay.
    pub show_help: bool,
    /// Active color theme.
    pub theme: Theme,
    /// Rows shown in the recent-readings table.
    pub table_rows: usize,
    /// Directory CSV exports are written to.
    pub export_dir: PathBuf,
    /// Endpoint being polled, for the header.
    pub endpoint: String,
    /// Time between automatic fetches.
    pub refresh_interval: Duration,
    /// Channel for sending commands to the background worker.
    pub command_tx: mpsc::Sender<Command>,
    /// Channel for receiving events from the background worker.
    pub event_rx: mpsc::Receiver<DashboardEvent>,
}

impl App {
    /// Create the application state from the resolved settings.
    pub fn new(
        command_tx: mpsc::Sender<Command>,
        event_rx: mpsc::Receiver<DashboardEvent>,
        settings: &Settings,
        endpoint: impl Into<String>,
    ) -> Self {
        Self {
            should_quit: false,
            store: DataStore::with_window(settings.default_window),
            status_messages: Vec::new(),
            status_message_timeout: 5,
            show_help: false,
            theme: Theme::default(),
            table_rows: settings.table_rows,
            export_dir: settings.export_directory.clone(),
            endpoint: endpoint.into(),
            refresh_interval: settings.refresh_interval,
            command_tx,
            event_rx,
        }
    }

    /// Whether the event loop should stop.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Palette for the active theme.
    pub fn app_theme(&self) -> AppTheme {
        self.theme.palette()
    }

    /// Add a status message, keeping at most 5.
    pub fn push_status_message(&mut self, message: String) {
        self.status_messages.push((message, Instant::now()));
        while self.status_messages.len() > 5 {
            self.status_messages.remove(0);
        }
    }

    /// Drop status messages older than the timeout.
    pub fn clean_expired_messages(&mut self) {
        let timeout = Duration::from_secs(self.status_message_timeout);
        self.status_messages
            .retain(|(_, created)| created.elapsed() < timeout);
    }

    /// Most recent status message, if any.
    pub fn current_status_message(&self) -> Option<&str> {
        self.status_messages.last().map(|(msg, _)| msg.as_str())
    }

    /// Switch the chart window. No fetch is triggered.
    pub fn select_window(&mut self, window: Window) {
        if self.store.window() != window {
            self.store.select_window(window);
            self.push_status_message(format!("Showing {}", window.label()));
        }
    }

    /// Flip between dark and light themes.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    /// Write the full history to the export directory.
    pub fn export_history(&self) -> Result<PathBuf> {
        write_export(&self.export_dir, self.store.history(), today())
    }

    /// Apply an event from the worker.
    pub fn handle_event(&mut self, event: DashboardEvent) {
        match event {
            DashboardEvent::StatusChanged(status) => {
                debug!(status = status.label(), "Status changed");
                self.store.set_status(status);
            }
            DashboardEvent::ReadingsFetched {
                readings,
                fetched_at,
            } => {
                info!(count = readings.len(), "Readings updated");
                self.store.replace_history(readings, fetched_at);
            }
            DashboardEvent::FetchFailed { message } => {
                self.push_status_message(format!(
                    "Fetch failed: {}",
                    message.chars().take(60).collect::<String>()
                ));
                self.store.record_failure(message);
            }
        }
    }
}
