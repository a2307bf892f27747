//! Mock reading source for testing and demo mode.
//!
//! [`MockSource`] implements [`ReadingSource`] without any network access.
//!
//! # Features
//!
//! - **Scripted responses**: queue envelopes and failures that are returned
//!   in order, falling back to a default envelope once the queue is drained
//! - **Latency simulation**: add an artificial delay to every fetch
//! - **Synthetic data**: [`MockSource::demo`] generates a plausible
//!   one-reading-per-minute history, optionally growing on every fetch

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicU32, AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use time::OffsetDateTime;
use tokio::sync::RwLock;

use crate::error::{Error, Result};
use crate::raw::{Envelope, RawRow, RawValue};
use crate::traits::ReadingSource;

/// Endpoint name reported by mock sources.
pub const MOCK_ENDPOINT: &str = "mock://sheet";

/// One scripted response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return this envelope.
    Envelope(Envelope),
    /// Fail with [`Error::InvalidResponse`] carrying this message.
    Fail(String),
}

/// A mock reading source.
///
/// # Example
///
/// ```
/// use sporehouse_core::{Envelope, MockSource, ReadingSource};
///
/// #[tokio::main]
/// async fn main() {
///     let source = MockSource::new();
///     source.push_envelope(Envelope::failure("ERROR", "quota exceeded")).await;
///
///     let first = source.fetch().await.unwrap();
///     assert!(!first.is_success());
///     assert_eq!(source.fetch_count(), 1);
/// }
/// ```
pub struct MockSource {
    script: RwLock<VecDeque<MockResponse>>,
    default: RwLock<Envelope>,
    /// Append one reading to the default envelope after every fetch.
    grow: AtomicBool,
    fetch_count: AtomicU32,
    /// Simulated latency in milliseconds (0 = no delay).
    latency_ms: AtomicU64,
}

impl std::fmt::Debug for MockSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockSource")
            .field("fetch_count", &self.fetch_count.load(Ordering::Relaxed))
            .field("latency_ms", &self.latency_ms.load(Ordering::Relaxed))
            .finish()
    }
}

impl Default for MockSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSource {
    /// Create a source that answers with an empty successful envelope.
    pub fn new() -> Self {
        Self::with_envelope(Envelope::success(Vec::new()))
    }

    /// Create a source whose default answer is `envelope`.
    pub fn with_envelope(envelope: Envelope) -> Self {
        Self {
            script: RwLock::new(VecDeque::new()),
            default: RwLock::new(envelope),
            grow: AtomicBool::new(false),
            fetch_count: AtomicU32::new(0),
            latency_ms: AtomicU64::new(0),
        }
    }

    /// Create a source answering with `rows`.
    pub fn with_rows(rows: Vec<RawRow>) -> Self {
        Self::with_envelope(Envelope::success(rows))
    }

    /// Create a source with `count` synthetic readings, one per minute,
    /// the last one at `end`. The source grows by one reading per fetch.
    pub fn demo(count: usize, end: OffsetDateTime) -> Self {
        let start = end - time::Duration::minutes(count.saturating_sub(1) as i64);
        let rows = (0..count)
            .map(|i| synthetic_row(i, start + time::Duration::minutes(i as i64)))
            .collect();

        let source = Self::with_rows(rows);
        source.grow.store(true, Ordering::Relaxed);
        source
    }

    /// Queue an envelope to be returned by a future fetch.
    pub async fn push_envelope(&self, envelope: Envelope) {
        self.script
            .write()
            .await
            .push_back(MockResponse::Envelope(envelope));
    }

    /// Queue a failure to be returned by a future fetch.
    pub async fn push_failure(&self, message: &str) {
        self.script
            .write()
            .await
            .push_back(MockResponse::Fail(message.to_string()));
    }

    /// Replace the default envelope.
    pub async fn set_envelope(&self, envelope: Envelope) {
        *self.default.write().await = envelope;
    }

    /// Set simulated latency for every fetch.
    pub fn set_latency(&self, latency: Duration) {
        self.latency_ms
            .store(latency.as_millis() as u64, Ordering::Relaxed);
    }

    /// Number of fetches performed so far.
    pub fn fetch_count(&self) -> u32 {
        self.fetch_count.load(Ordering::Relaxed)
    }

    async fn next_response(&self) -> MockResponse {
        if let Some(scripted) = self.script.write().await.pop_front() {
            return scripted;
        }

        let mut default = self.default.write().await;
        let response = MockResponse::Envelope(default.clone());

        if self.grow.load(Ordering::Relaxed)
            && let Some(rows) = default.data.as_mut()
        {
            let next = rows.len();
            let at = rows
                .last()
                .and_then(|row| match row.date {
                    RawValue::DateTime(dt) => Some(dt + time::Duration::minutes(1)),
                    _ => None,
                })
                .unwrap_or_else(OffsetDateTime::now_utc);
            rows.push(synthetic_row(next, at));
        }

        response
    }
}

/// A sheet-like row: the date as a structured value, the time as the
/// 1899-12-30 epoch string a spreadsheet emits for time-only cells, and
/// measurements split across primary and alternate columns.
fn synthetic_row(index: usize, at: OffsetDateTime) -> RawRow {
    let phase = index as f64;
    let temperature = 22.0 + 1.5 * (phase / 30.0).sin();
    let humidity = 85.0 + 5.0 * (phase / 45.0).cos();

    RawRow {
        date: RawValue::DateTime(at),
        time: RawValue::Text(format!(
            "1899-12-30T{:02}:{:02}:{:02}.000Z",
            at.hour(),
            at.minute(),
            at.second()
        )),
        temperaturec: RawValue::Text(format!("{temperature:.1}")),
        humidity1: RawValue::Number((humidity * 10.0).round() / 10.0),
        ..RawRow::default()
    }
}

#[async_trait]
impl ReadingSource for MockSource {
    async fn fetch(&self) -> Result<Envelope> {
        let latency = self.latency_ms.load(Ordering::Relaxed);
        if latency > 0 {
            tokio::time::sleep(Duration::from_millis(latency)).await;
        }

        self.fetch_count.fetch_add(1, Ordering::Relaxed);

        match self.next_response().await {
            MockResponse::Envelope(envelope) => Ok(envelope),
            MockResponse::Fail(message) => Err(Error::InvalidResponse(message)),
        }
    }

    fn endpoint(&self) -> &str {
        MOCK_ENDPOINT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[tokio::test]
    async fn test_default_envelope_is_empty_success() {
        let source = MockSource::new();
        let envelope = source.fetch().await.unwrap();
        assert!(envelope.is_success());
        assert_eq!(envelope.data.map(|d| d.len()), Some(0));
        assert_eq!(source.endpoint(), MOCK_ENDPOINT);
    }

    #[tokio::test]
    async fn test_scripted_responses_in_order() {
        let source = MockSource::with_rows(vec![RawRow::default()]);
        source.push_failure("boom").await;
        source
            .push_envelope(Envelope::failure("ERROR", "sheet missing"))
            .await;

        assert!(matches!(source.fetch().await, Err(Error::InvalidResponse(m)) if m == "boom"));
        assert!(!source.fetch().await.unwrap().is_success());
        assert_eq!(source.fetch().await.unwrap().data.unwrap().len(), 1);
        assert_eq!(source.fetch_count(), 3);
    }

    #[tokio::test]
    async fn test_set_envelope_replaces_default_answer() {
        let source = MockSource::with_rows(vec![RawRow::default()]);
        source
            .set_envelope(Envelope::failure("ERROR", "sheet renamed"))
            .await;

        for _ in 0..2 {
            let envelope = source.fetch().await.unwrap();
            assert!(!envelope.is_success());
            assert_eq!(envelope.message.as_deref(), Some("sheet renamed"));
        }
    }

    #[tokio::test]
    async fn test_demo_source_grows() {
        let end = datetime!(2025-10-30 12:00:00 UTC);
        let source = MockSource::demo(5, end);

        let first = source.fetch().await.unwrap().data.unwrap();
        assert_eq!(first.len(), 5);
        assert_eq!(first[4].date, RawValue::DateTime(end));
        assert_eq!(
            first[4].time,
            RawValue::Text("1899-12-30T12:00:00.000Z".into())
        );

        let second = source.fetch().await.unwrap().data.unwrap();
        assert_eq!(second.len(), 6);
        assert_eq!(
            second[5].date,
            RawValue::DateTime(datetime!(2025-10-30 12:01:00 UTC))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_latency_simulation() {
        let source = MockSource::new();
        source.set_latency(Duration::from_millis(200));

        let start = tokio::time::Instant::now();
        source.fetch().await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(200));
    }
}
