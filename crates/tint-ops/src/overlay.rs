//! Alpha-presence overlay compositing.
//!
//! Not an alpha blend: any overlay pixel with non-zero alpha fully replaces
//! the base pixel (overlay alpha included). Overlay pixels with alpha 0 let
//! the base show through. This matches stencil-style clothing overlays
//! (logos, trim) that are either present or absent per texel.

use tint_core::pixel::{CHANNELS, Rgba};
use tint_core::Image;
#[allow(unused_imports)]
use tracing::{debug, trace};

use crate::{OpsError, OpsResult};

/// Composites one overlay pixel onto a base pixel.
///
/// # Example
///
/// ```rust
/// use tint_ops::overlay::overlay_pixel;
///
/// let base = [1.0, 0.0, 0.0, 1.0];
/// assert_eq!(overlay_pixel(base, [0.0, 1.0, 0.0, 0.5]), [0.0, 1.0, 0.0, 0.5]);
/// assert_eq!(overlay_pixel(base, [0.0, 1.0, 0.0, 0.0]), base);
/// ```
#[inline]
pub fn overlay_pixel(base: Rgba, overlay: Rgba) -> Rgba {
    if overlay[3] > 0.0 { overlay } else { base }
}

/// Composites an overlay image onto a base image.
///
/// Produces a new image of the shared dimensions.
///
/// # Errors
///
/// Returns [`OpsError::SizeMismatch`] when the images differ in size and
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
    trace!(width = base.width(), height = base.height(), "apply_overlay");

    let mut out = vec![0.0f32; base.data().len()];
    for ((b, o), dst) in base
        .data()
        .chunks_exact(CHANNELS)
        .zip(overlay.data().chunks_exact(CHANNELS))
        .zip(out.chunks_exact_mut(CHANNELS))
    {
        let base_px = [b[0], b[1], b[2], b[3]];
        let over_px = [o[0], o[1], o[2], o[3]];
        dst.copy_from_slice(&overlay_pixel(base_px, over_px));
    }

    Ok(Image::from_data(base.width(), base.height(), out)?)
}
