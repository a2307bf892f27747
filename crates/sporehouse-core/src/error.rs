//! Error types for sporehouse-core.
//!
//! Every error in this module is confined to a single fetch cycle. None of
//! them is fatal: the polling worker reports the failure through the status
//! indicator and the next tick retries unconditionally.
//!
//! | Error | Origin | Shown as |
//! |-------|--------|----------|
//! | [`Error::Unreachable`], [`Error::Request`] | transport | `Connection Error` |
//! | [`Error::Http`] | non-2xx response | `Connection Error` |
//! | [`Error::InvalidResponse`] | malformed JSON | `Connection Error` |
//! | [`Error::EndpointStatus`], [`Error::MissingData`] | endpoint-reported failure | `Connection Error` |
//! | [`Error::NoData`] | export with empty history | message to the user |
//!
//! Unparseable dates, times or numbers inside a row are not errors at all;
//! the normalizer resolves them to sentinels.

use std::io;

use thiserror::Error;

/// Errors that can occur while fetching, exporting or configuring.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error variants
/// in future versions without breaking downstream code.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The endpoint could not be reached at all.
    #[error("Endpoint not reachable at {url}: {source}")]
    Unreachable {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The HTTP request failed after a connection was made.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The endpoint answered with a non-success HTTP status.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// The response body was not a valid envelope.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// The endpoint URL is malformed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The envelope reported a status other than `SUCCESS`.
    #[error("Endpoint reported {status}: {}", message.as_deref().unwrap_or("no message"))]
    EndpointStatus {
        status: String,
        message: Option<String>,
    },

    /// The envelope reported success but carried no `data` array.
    #[error("Endpoint response has no data")]
    MissingData,

    /// There are no readings to export.
    #[error("No data to export")]
    NoData,

    /// CSV serialization failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The operation was cancelled.
    #[error("Operation cancelled")]
    Cancelled,
}

/// Result type alias using sporehouse-core's Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_status_display_with_message() {
        let err = Error::EndpointStatus {
            status: "ERROR".to_string(),
            message: Some("Sheet not found".to_string()),
        };
        assert_eq!(err.to_string(), "Endpoint reported ERROR: Sheet not found");
    }

    #[test]
    fn test_endpoint_status_display_without_message() {
        let err = Error::EndpointStatus {
            status: "FAIL".to_string(),
            message: None,
        };
        assert_eq!(err.to_string(), "Endpoint reported FAIL: no message");
    }

    #[test]
    fn test_http_display() {
        let err = Error::Http {
            status: 503,
            message: "Service Unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 503: Service Unavailable");
    }

    #[test]
    fn test_no_data_display() {
        assert_eq!(Error::NoData.to_string(), "No data to export");
    }

    #[test]
    fn test_io_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
