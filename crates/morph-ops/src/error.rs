//! Error types for raster operations.

use thiserror::Error;

/// Error type for raster operations.
#[derive(Error, Debug)]
pub enum OpsError {
    /// A target shape was rejected: `rescale` to a zero width or
    /// height, or a pixel buffer that does not match its declared
    /// dimensions.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// `blend` was given two rasters of differing dimensions.
    #[error("size mismatch: {0}")]
    SizeMismatch(String),
}

/// Result type for raster operations.
pub type OpsResult<T> = Result<T, OpsError>;
