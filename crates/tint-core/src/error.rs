//! Error types for core buffer operations.

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when constructing image buffers.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid image dimensions or a buffer that does not match them.
    ///
    /// Returned when raw data has the wrong length for the requested
    /// dimensions.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
        /// Reason why dimensions are invalid.
        reason: String,
    },
}

impl Error {
    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }
}
