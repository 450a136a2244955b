//! Error types for palette loading and validation.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for palette operations.
pub type PaletteResult<T> = Result<T, PaletteError>;

/// Errors that can occur when loading or validating a palette.
#[derive(Debug, Error)]
pub enum PaletteError {
    /// Palette file does not exist.
    #[error("palette file not found: {path}")]
    NotFound {
        /// Path that was looked up.
        path: PathBuf,
    },

    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parse error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// An adjustment record failed range validation.
    #[error("invalid adjustment '{name}': {reason}")]
    Invalid {
        /// Name of the offending record (or its index when unnamed).
        name: String,
        /// What was out of range.
        reason: String,
    },

    /// Palette contains no adjustments.
    #[error("palette is empty")]
    Empty,
}
