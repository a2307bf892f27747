//! Error types for sporehouse-types.

use thiserror::Error;

/// Errors that can occur when parsing sporehouse values from text.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error variants
/// in future versions without breaking downstream code.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// The window key is not one of `60`, `hour`, `day`, `month`, `year`.
    #[error("Unknown range '{0}' (expected 60, hour, day, month or year)")]
    UnknownWindow(String),
}

/// Result type alias using sporehouse-types' ParseError type.
pub type ParseResult<T> = std::result::Result<T, ParseError>;
