//! Trait abstraction over reading sources.
//!
//! [`ReadingSource`] abstracts over the real spreadsheet endpoint
//! ([`SheetClient`](crate::client::SheetClient)) and the scripted
//! [`MockSource`](crate::mock::MockSource) used by tests and demo mode.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::raw::Envelope;

/// Something that can deliver the current sheet contents.
///
/// # Example
///
/// ```
/// use sporehouse_core::{MockSource, ReadingSource};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let source = MockSource::new();
/// let envelope = source.fetch().await.unwrap();
/// assert!(envelope.is_success());
/// # }
/// ```
#[async_trait]
pub trait ReadingSource: Send + Sync {
    /// Fetch the full response envelope.
    async fn fetch(&self) -> Result<Envelope>;

    /// Where the readings come from, for logs and the status line.
    fn endpoint(&self) -> &str;
}

#[async_trait]
impl<S: ReadingSource + ?Sized> ReadingSource for Arc<S> {
    async fn fetch(&self) -> Result<Envelope> {
        (**self).fetch().await
    }

    fn endpoint(&self) -> &str {
        (**self).endpoint()
    }
}
