//! Error types for frame rendering and the morph engine.

use morph_ops::OpsError;
use thiserror::Error;

/// Result type alias using [`ViewError`] as the error type.
pub type ViewResult<T> = std::result::Result<T, ViewError>;

/// Errors that can occur while rendering frames.
#[derive(Debug, Error)]
pub enum ViewError {
    /// Underlying I/O failure while writing to the render target.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid engine parameter (e.g. a non-positive step count).
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Renderer used in an invalid state or asked to draw outside
    /// its configured canvas.
    #[error("renderer error: {0}")]
    Renderer(String),

    /// A delegated raster operation failed.
    #[error(transparent)]
    Ops(#[from] OpsError),
}

impl ViewError {
    /// Creates a [`ViewError::InvalidParameter`] error.
    #[inline]
    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }

    /// Creates a [`ViewError::Renderer`] error.
    #[inline]
    pub fn renderer(msg: impl Into<String>) -> Self {
        Self::Renderer(msg.into())
    }
}
