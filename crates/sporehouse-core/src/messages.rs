//! Message types for UI/worker communication.
//!
//! # Architecture
//!
//! ```text
//! +------------------+     Command      +------------------+
//! |    UI loop       | --------------> |   FetchWorker    |
//! |  (ratatui/CLI)   |                 |  (tokio task)    |
//! |                  | <-------------- |                  |
//! +------------------+  DashboardEvent +------------------+
//! ```
//!
//! - [`Command`]: Messages sent from the UI to the background worker
//! - [`DashboardEvent`]: Events sent from the worker back to the UI
//!
//! Window selection never crosses this boundary: it is applied directly to
//! the UI's [`DataStore`](crate::store::DataStore) without a fetch.

use sporehouse_types::{FetchStatus, Reading};
use time::OffsetDateTime;

/// Commands sent from the UI to the background worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Fetch now instead of waiting for the next tick.
    Refresh,
    /// Stop the worker.
    Shutdown,
}

/// Events sent from the worker back to the UI.
#[derive(Debug, Clone)]
pub enum DashboardEvent {
    /// The connection status changed.
    StatusChanged(FetchStatus),

    /// A fetch succeeded; `readings` replaces the whole history.
    ReadingsFetched {
        readings: Vec<Reading>,
        fetched_at: OffsetDateTime,
    },

    /// A fetch failed; the history must be kept.
    FetchFailed {
        message: String,
    },
}
