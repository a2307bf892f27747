//! In-memory dashboard state.
//!
//! [`DataStore`] is an explicit state object owned by whoever drives the
//! display (the TUI loop or a headless watcher). It holds the full reading
//! history of the last successful fetch, the selected window and the
//! connection status, and derives every view the display needs.

use sporehouse_types::{FetchStatus, Reading, Window};
use time::OffsetDateTime;
use tracing::{debug, warn};

use crate::error::Result;
use crate::filter::filter;

/// Number of rows shown in the recent-readings table.
pub const TABLE_ROWS: usize = 10;

/// Result of applying one fetch cycle to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// History was replaced with `count` readings.
    Success { count: usize },
    /// The cycle failed; history is unchanged.
    Failed { message: String },
}

impl FetchOutcome {
    /// Whether the cycle succeeded.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// Parallel series for plotting the filtered view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSeries {
    /// One blank label per point; the x-axis is sequential, not temporal.
    pub labels: Vec<String>,
    pub temperature: Vec<f64>,
    pub humidity: Vec<f64>,
}

impl ChartSeries {
    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether there are no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Temperature as `(index, value)` points.
    #[must_use]
    pub fn temperature_points(&self) -> Vec<(f64, f64)> {
        indexed(&self.temperature)
    }

    /// Humidity as `(index, value)` points.
    #[must_use]
    pub fn humidity_points(&self) -> Vec<(f64, f64)> {
        indexed(&self.humidity)
    }
}

fn indexed(values: &[f64]) -> Vec<(f64, f64)> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| (i as f64, *v))
        .collect()
}

/// Minimum, maximum and mean of one measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stats {
    pub min: f64,
    pub max: f64,
    pub avg: f64,
}

impl Stats {
    fn of(values: impl Iterator<Item = f64>) -> Option<Self> {
        let mut count = 0usize;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;

        for v in values {
            count += 1;
            min = min.min(v);
            max = max.max(v);
            sum += v;
        }

        (count > 0).then(|| Self {
            min,
            max,
            avg: sum / count as f64,
        })
    }
}

/// Statistics over the filtered view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesSummary {
    pub count: usize,
    pub temperature: Stats,
    pub humidity: Stats,
}

/// Dashboard state: history, selected window and connection status.
#[derive(Debug, Clone, Default)]
pub struct DataStore {
    history: Vec<Reading>,
    window: Window,
    status: FetchStatus,
    last_update: Option<OffsetDateTime>,
    last_error: Option<String>,
}

impl DataStore {
    /// Create an empty store with the default window.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with the given window selected.
    #[must_use]
    pub fn with_window(window: Window) -> Self {
        Self {
            window,
            ..Self::default()
        }
    }

    /// Change the selected window. Never touches the network.
    pub fn select_window(&mut self, window: Window) {
        if self.window != window {
            debug!(from = %self.window, to = %window, "Window changed");
        }
        self.window = window;
    }

    /// Currently selected window.
    #[must_use]
    pub fn window(&self) -> Window {
        self.window
    }

    /// Set the connection status.
    pub fn set_status(&mut self, status: FetchStatus) {
        self.status = status;
    }

    /// Current connection status.
    #[must_use]
    pub fn status(&self) -> &FetchStatus {
        &self.status
    }

    /// Time of the last successful fetch.
    #[must_use]
    pub fn last_update(&self) -> Option<OffsetDateTime> {
        self.last_update
    }

    /// Message of the most recent failed fetch, cleared on success.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Replace the history wholesale after a successful fetch.
    pub fn replace_history(&mut self, readings: Vec<Reading>, fetched_at: OffsetDateTime) {
        self.history = readings;
        self.status = FetchStatus::Connected;
        self.last_update = Some(fetched_at);
        self.last_error = None;
    }

    /// Record a failed fetch. History and last update are kept.
    pub fn record_failure(&mut self, message: impl Into<String>) {
        let message = message.into();
        self.status = FetchStatus::Error(message.clone());
        self.last_error = Some(message);
    }

    /// Apply the result of a fetch.
    pub fn apply_fetch(&mut self, result: Result<Vec<Reading>>, now: OffsetDateTime) -> FetchOutcome {
        match result {
            Ok(readings) => {
                let count = readings.len();
                self.replace_history(readings, now);
                debug!(count, "History replaced");
                FetchOutcome::Success { count }
            }
            Err(e) => {
                let message = e.to_string();
                warn!(error = %message, kept = self.history.len(), "Fetch failed");
                self.record_failure(message.clone());
                FetchOutcome::Failed { message }
            }
        }
    }

    /// Full history, oldest first.
    #[must_use]
    pub fn history(&self) -> &[Reading] {
        &self.history
    }

    /// Number of readings in the history.
    #[must_use]
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Whether the history is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// History restricted to the selected window.
    #[must_use]
    pub fn filtered(&self) -> &[Reading] {
        filter(&self.history, self.window)
    }

    /// Chart series for the filtered view.
    #[must_use]
    pub fn chart_series(&self) -> ChartSeries {
        let view = self.filtered();
        ChartSeries {
            labels: vec![String::new(); view.len()],
            temperature: view.iter().map(|r| r.temperature).collect(),
            humidity: view.iter().map(|r| r.humidity).collect(),
        }
    }

    /// Most recent reading, if any.
    #[must_use]
    pub fn latest(&self) -> Option<&Reading> {
        self.history.last()
    }

    /// Last `n` readings, newest first.
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &Reading> {
        self.history.iter().rev().take(n)
    }

    /// Statistics over the filtered view.
    #[must_use]
    pub fn summary(&self) -> Option<SeriesSummary> {
        let view = self.filtered();
        Some(SeriesSummary {
            count: view.len(),
            temperature: Stats::of(view.iter().map(|r| r.temperature))?,
            humidity: Stats::of(view.iter().map(|r| r.humidity))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use sporehouse_types::{ReadingDate, ReadingTime};
    use time::macros::datetime;

    fn readings(n: usize) -> Vec<Reading> {
        (0..n)
            .map(|i| {
                Reading::new(
                    ReadingDate::Missing,
                    ReadingTime::Missing,
                    20.0 + i as f64,
                    50.0 + i as f64,
                )
            })
            .collect()
    }

    #[test]
    fn test_new_store_is_connecting_and_empty() {
        let store = DataStore::new();
        assert_eq!(store.status(), &FetchStatus::Connecting);
        assert_eq!(store.window(), Window::LastHour);
        assert!(store.is_empty());
        assert!(store.latest().is_none());
        assert!(store.summary().is_none());
        assert!(store.last_update().is_none());
    }

    #[test]
    fn test_apply_fetch_success_replaces_history() {
        let mut store = DataStore::new();
        let now = datetime!(2025-10-30 12:00:00 UTC);

        let outcome = store.apply_fetch(Ok(readings(5)), now);
        assert_eq!(outcome, FetchOutcome::Success { count: 5 });
        assert_eq!(store.len(), 5);
        assert_eq!(store.status(), &FetchStatus::Connected);
        assert_eq!(store.last_update(), Some(now));

        store.apply_fetch(Ok(readings(2)), now);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_apply_fetch_failure_keeps_history() {
        let mut store = DataStore::new();
        let first = datetime!(2025-10-30 12:00:00 UTC);
        store.apply_fetch(Ok(readings(3)), first);

        let outcome = store.apply_fetch(
            Err(Error::EndpointStatus {
                status: "ERROR".into(),
                message: None,
            }),
            datetime!(2025-10-30 12:01:00 UTC),
        );

        assert!(!outcome.is_success());
        assert_eq!(store.len(), 3);
        assert!(store.status().is_error());
        assert_eq!(store.last_update(), Some(first));
        assert!(store.last_error().is_some_and(|m| m.contains("ERROR")));
    }

    #[test]
    fn test_success_clears_last_error() {
        let mut store = DataStore::new();
        store.record_failure("timeout");
        store.apply_fetch(Ok(readings(1)), datetime!(2025-10-30 12:00:00 UTC));
        assert!(store.last_error().is_none());
    }

    #[test]
    fn test_select_window_changes_filtered_view() {
        let mut store = DataStore::new();
        store.apply_fetch(Ok(readings(100)), datetime!(2025-10-30 12:00:00 UTC));

        assert_eq!(store.filtered().len(), 60);
        store.select_window(Window::LastDay);
        assert_eq!(store.filtered().len(), 100);
        assert_eq!(store.len(), 100);
    }

    #[test]
    fn test_chart_series_parallel_arrays() {
        let mut store = DataStore::new();
        store.apply_fetch(Ok(readings(3)), datetime!(2025-10-30 12:00:00 UTC));

        let series = store.chart_series();
        assert_eq!(series.len(), 3);
        assert!(series.labels.iter().all(String::is_empty));
        assert_eq!(series.temperature, vec![20.0, 21.0, 22.0]);
        assert_eq!(series.humidity_points()[2], (2.0, 52.0));
    }

    #[test]
    fn test_recent_is_newest_first() {
        let mut store = DataStore::new();
        store.apply_fetch(Ok(readings(15)), datetime!(2025-10-30 12:00:00 UTC));

        let recent: Vec<f64> = store.recent(TABLE_ROWS).map(|r| r.temperature).collect();
        assert_eq!(recent.len(), 10);
        assert_eq!(recent[0], 34.0);
        assert_eq!(recent[9], 25.0);
        assert_eq!(store.latest().map(|r| r.temperature), Some(34.0));
    }

    #[test]
    fn test_summary_over_filtered_view() {
        let mut store = DataStore::new();
        store.apply_fetch(Ok(readings(3)), datetime!(2025-10-30 12:00:00 UTC));

        let summary = store.summary().unwrap();
        assert_eq!(summary.count, 3);
        assert_eq!(summary.temperature.min, 20.0);
        assert_eq!(summary.temperature.max, 22.0);
        assert_eq!(summary.humidity.avg, 51.0);
    }
}
