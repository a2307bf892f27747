//! Polling and normalization core for mushroom house sensor dashboards.
//!
//! This crate fetches readings from a spreadsheet-backed endpoint,
//! normalizes the loosely typed cells into canonical
//! [`Reading`](sporehouse_types::Reading)s and derives every view a
//! dashboard needs.
//!
//! # Features
//!
//! - **Normalization**: dates, times and numbers in whatever shape the sheet
//!   emits, resolved without ever failing
//! - **Range filtering**: last hour, day, month or year of readings
//! - **Display formatting**: `DD-MM-YYYY HH:MM AM|PM` timestamps
//! - **Data store**: history, selected window and connection status
//! - **Polling worker**: fixed-interval fetches with manual refresh, never
//!   overlapping
//! - **CSV export** of the full history
//! - **Mock source** for tests and demo mode
//!
//! # Quick Start
//!
//! ```no_run
//! use sporehouse_core::{DataStore, SheetClient, run_fetch_cycle};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SheetClient::new("https://script.example.com/macros/s/abc/exec")?;
//!     let mut store = DataStore::new();
//!
//!     let outcome = run_fetch_cycle(&client, &mut store).await;
//!     println!("{outcome:?}, status: {}", store.status().label());
//!
//!     if let Some(latest) = store.latest() {
//!         println!("{:.1}°C {:.1}%", latest.temperature, latest.humidity);
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod display;
pub mod error;
pub mod export;
pub mod fetch;
pub mod filter;
pub mod messages;
pub mod mock;
pub mod normalize;
pub mod raw;
pub mod store;
pub mod traits;
pub mod worker;

pub use client::SheetClient;
pub use display::{NO_DATA, format_date_time, reading_timestamp};
pub use error::{Error, Result};
pub use export::{default_export_filename, export_csv};
pub use fetch::{fetch_readings, run_fetch_cycle};
pub use filter::{filter, filter_named};
pub use messages::{Command, DashboardEvent};
pub use mock::MockSource;
pub use normalize::{extract_date, extract_number, extract_time, normalize, normalize_rows};
pub use raw::{Envelope, RawRow, RawValue};
pub use store::{ChartSeries, DataStore, FetchOutcome, SeriesSummary, Stats, TABLE_ROWS};
pub use traits::ReadingSource;
pub use worker::{DEFAULT_REFRESH_INTERVAL, FetchWorker};

// Re-export types from sporehouse-types
pub use sporehouse_types::{FetchStatus, Reading, ReadingDate, ReadingTime, Window};
