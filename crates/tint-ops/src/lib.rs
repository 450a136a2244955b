//! # tint-ops
//!
//! Image operations for palette-driven texture variants.
//!
//! # Modules
//!
//! - [`recolor`] - per-pixel and whole-image HLS recoloring
//! - [`overlay`] - alpha-presence overlay compositing
//! - [`parallel`] - rayon-parallel drivers (feature `parallel`, default on)
//!
//! # Example
//!
//! ```rust
//! use tint_core::Image;
//! use tint_palette::Adjustment;
//! use tint_ops::recolor::recolor;
//!
//! let src = Image::filled(16, 16, [1.0, 0.0, 0.0, 1.0]);
//! let adj = Adjustment::new("Green", 120.0, 1.0, 0.0);
//! let out = recolor(&src, &adj).unwrap();
//! assert_eq!(out.dimensions(), src.dimensions());
//! ```
//!
//! Every operation is a pure function from input image(s) to a freshly
//! allocated output image; pixels are independent, so the parallel drivers
//! produce bit-identical results to the serial ones.

#![warn(missing_docs)]

mod error;
pub mod overlay;
pub mod recolor;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use error::{OpsError, OpsResult};
