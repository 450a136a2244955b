//! Error types for I/O operations.

use std::io;
use thiserror::Error;

/// Result type for I/O operations.
pub type IoResult<T> = Result<T, IoError>;

/// I/O operation error.
#[derive(Debug, Error)]
pub enum IoError {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Decoding error.
    #[error("decode error: {0}")]
    DecodeError(String),

    /// Encoding error.
    #[error("encode error: {0}")]
    EncodeError(String),

    /// Unsupported pixel layout or bit depth.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Decoded data did not form a valid image buffer.
    #[error(transparent)]
    Core(#[from] tint_core::Error),

    /// Palette loading error.
    #[error(transparent)]
    Palette(#[from] tint_palette::PaletteError),
}
