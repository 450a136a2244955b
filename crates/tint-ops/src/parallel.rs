//! Rayon-parallel drivers for the image-level operations.
//!
//! Pixels carry no cross-pixel dependency, so the work splits freely across
//! threads. Each worker calls the exact same per-pixel function as the
//! serial driver, so results are bit-identical regardless of thread count
//! or scheduling.
//!
//! # Example
//!
//! ```rust
//! use tint_core::Image;
//! use tint_palette::Adjustment;
//! use tint_ops::parallel;
//!
//! let src = Image::filled(256, 256, [0.5, 0.2, 0.1, 1.0]);
//! let adj = Adjustment::new("Blue", 208.0, 0.61, -55.0);
//! let out = parallel::recolor(&src, &adj).unwrap();
//! ```

use rayon::prelude::*;
use tint_core::pixel::CHANNELS;
use tint_core::Image;
use tint_palette::Adjustment;

use crate::overlay::overlay_pixel;
use crate::recolor::recolor_pixel;
use crate::{OpsError, OpsResult};

/// Parallel version of [`crate::recolor::recolor`].
///
/// # Errors
///
/// Returns [`OpsError::InvalidDimensions`] for zero-dimension images.
pub fn recolor(src: &Image, adj: &Adjustment) -> OpsResult<Image> {
    if src.is_empty() {
        return Err(OpsError::InvalidDimensions(
            "width and height must be > 0".into(),
        ));
    }

    let data = src.data();
    let mut out = vec![0.0f32; data.len()];

    out.par_chunks_mut(CHANNELS)
        .enumerate()
        .for_each(|(i, dst)| {
            let idx = i * CHANNELS;
            let px = [data[idx], data[idx + 1], data[idx + 2], data[idx + 3]];
            dst.copy_from_slice(&recolor_pixel(px, adj));
        });

    Ok(Image::from_data(src.width(), src.height(), out)?)
}

/// Parallel version of [`crate::overlay::apply_overlay`].
///
/// # Errors
///
/// Returns [`OpsError::SizeMismatch`] when dimensions differ and
/// [`OpsError::InvalidDimensions`] for zero-dimension inputs.
pub fn apply_overlay(base: &Image, overlay: &Image) -> OpsResult<Image> {
    if base.is_empty() {
        return Err(OpsError::InvalidDimensions(
            "width and height must be > 0".into(),
        ));
    }
    if base.dimensions() != overlay.dimensions() {
        return Err(OpsError::SizeMismatch(format!(
            "base {}x{} vs overlay {}x{}",
            base.width(),
            base.height(),
            overlay.width(),
            overlay.height()
        )));
    }

    let base_data = base.data();
    let over_data = overlay.data();
    let mut out = vec![0.0f32; base_data.len()];

    out.par_chunks_mut(CHANNELS)
        .enumerate()
        .for_each(|(i, dst)| {
            let idx = i * CHANNELS;
            let b = [
                base_data[idx],
                base_data[idx + 1],
                base_data[idx + 2],
                base_data[idx + 3],
            ];
            let o = [
                over_data[idx],
                over_data[idx + 1],
                over_data[idx + 2],
                over_data[idx + 3],
            ];
            dst.copy_from_slice(&overlay_pixel(b, o));
        });

    Ok(Image::from_data(base.width(), base.height(), out)?)
}
