//! Error types for morph-core operations.
//!
//! Covers raster construction: dimension validation and the pixel
//! buffer length check.

use thiserror::Error;

/// Result type alias using [`CoreError`] as the error type.
pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Errors that can occur while building rasters.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Invalid raster dimensions.
    ///
    /// A raster must be at least 1x1 and its pixel buffer must match
    /// `width * height` exactly (no holes, no trailing data).
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Reason why dimensions are invalid
        reason: String,
    },
}

impl CoreError {
    /// Creates a [`CoreError::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_dimensions_message() {
        let err = CoreError::invalid_dimensions(0, 5, "width must be >= 1");
        let msg = err.to_string();
        assert!(msg.contains("0x5"));
        assert!(msg.contains("width must be >= 1"));
    }
}
