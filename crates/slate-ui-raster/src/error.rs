//! Error types for the raster crate.

use thiserror::Error;

/// Errors that can occur during raster operations.
#[derive(Error, Debug)]
pub enum RasterError {
    /// Failed to load or decode an image.
    #[error("failed to load image: {0}")]
    ImageLoad(String),

    /// Invalid surface dimensions (zero width or height).
    #[error("invalid surface dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}

/// Result type for raster operations.
pub type RasterResult<T> = Result<T, RasterError>;
