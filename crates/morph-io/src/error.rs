//! Error types for pixel-map I/O.

use thiserror::Error;

/// Result type alias using [`PnmError`] as the error type.
pub type PnmResult<T> = std::result::Result<T, PnmError>;

/// Errors that can occur while reading or writing plain-text pixel
/// maps.
#[derive(Debug, Error)]
pub enum PnmError {
    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Header is missing a field or declares unusable dimensions.
    #[error("invalid header: {0}")]
    InvalidHeader(String),

    /// A token could not be parsed as a channel value.
    #[error("malformed pixel map: {0}")]
    Malformed(String),

    /// Token stream ended before the declared pixel count was read.
    #[error("truncated pixel data: expected {expected} channel values, got {got}")]
    Truncated {
        /// Channel values the header promised.
        expected: usize,
        /// Channel values actually present.
        got: usize,
    },
}

impl PnmError {
    /// Creates a [`PnmError::InvalidHeader`] error.
    #[inline]
    pub fn invalid_header(msg: impl Into<String>) -> Self {
        Self::InvalidHeader(msg.into())
    }

    /// Creates a [`PnmError::Malformed`] error.
    #[inline]
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::Malformed(msg.into())
    }
}
