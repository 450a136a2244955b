//! # tint-palette
//!
//! Named color adjustments and palette configuration.
//!
//! A [`Palette`] is an ordered list of [`Adjustment`] records, each naming
//! one output color variant and carrying the three HLS parameters of the
//! recolor transform. Palettes load from YAML files and are validated once
//! at load time; out-of-range values are rejected there, never clamped
//! mid-transform.
//!
//! Record order matters only for output naming and iteration order — it has
//! no effect on the per-pixel transform.
//!
//! # File format
//!
//! ```yaml
//! colors:
//!   - name: Red
//!     hue_shift: 0
//!     saturation: 0.6
//!     lightness_percent: -40
//!   - name: Green
//!     hue_shift: 120
//!     saturation: 0.3
//!     lightness_percent: -60
//! ```

#![warn(missing_docs)]

mod adjustment;
mod error;
mod palette;

pub use adjustment::Adjustment;
pub use error::{PaletteError, PaletteResult};
pub use palette::Palette;
