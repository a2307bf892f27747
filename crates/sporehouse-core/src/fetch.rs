//! One fetch cycle: request, parse, normalize, apply.

use sporehouse_types::{FetchStatus, Reading};
use time::OffsetDateTime;
use tracing::{debug, info};

use crate::error::Result;
use crate::normalize::normalize_rows;
use crate::store::{DataStore, FetchOutcome};
use crate::traits::ReadingSource;

/// Fetch the sheet and normalize every row.
///
/// Fails if the request fails, the body is not a valid envelope, the
/// envelope status is not `SUCCESS`, or a successful envelope has no data.
pub async fn fetch_readings<S: ReadingSource + ?Sized>(source: &S) -> Result<Vec<Reading>> {
    debug!(endpoint = source.endpoint(), "Fetching readings");
    let rows = source.fetch().await?.into_rows()?;
    let readings = normalize_rows(&rows);
    info!(count = readings.len(), "Fetched readings");
    Ok(readings)
}

/// Run one complete cycle against `store`.
///
/// The status goes to `Connecting` while the request is in flight, then to
/// `Connected` with the history replaced, or to `Error` with the history
/// left as it was. Never fails; the next cycle simply tries again.
pub async fn run_fetch_cycle<S: ReadingSource + ?Sized>(
    source: &S,
    store: &mut DataStore,
) -> FetchOutcome {
    store.set_status(FetchStatus::Connecting);
    let result = fetch_readings(source).await;
    store.apply_fetch(result, OffsetDateTime::now_utc())
}
