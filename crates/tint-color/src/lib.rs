//! # tint-color
//!
//! RGB <-> HLS color-space conversion.
//!
//! This crate holds the algorithmic core of the recolor pipeline: the
//! classic hue/lightness/saturation cylinder model. Hue is expressed as a
//! fraction of a full turn in [0, 1) so that hue arithmetic is a plain
//! `mod 1` and no degree/radian bookkeeping leaks into callers.
//!
//! All functions are pure and deterministic: identical f32 inputs produce
//! bit-identical outputs regardless of call order, which is what lets the
//! image-level drivers in `tint-ops` parallelize freely.
//!
//! # Example
//!
//! ```rust
//! use tint_color::{rgb_to_hls, hls_to_rgb};
//!
//! let [h, l, s] = rgb_to_hls([1.0, 0.0, 0.0]); // pure red
//! assert_eq!(h, 0.0);
//! assert_eq!(s, 1.0);
//!
//! let rgb = hls_to_rgb([h, l, s]);
//! assert!((rgb[0] - 1.0).abs() < 1e-6);
//! ```

#![warn(missing_docs)]

mod hls;

pub use hls::{hls_to_rgb, hue_to_channel, rgb_to_hls};
