//! HLS recoloring of RGBA pixels and images.
//!
//! The transform, per pixel:
//!
//! 1. Fully transparent pixels (alpha == 0) pass through unchanged.
//! 2. RGB is converted to HLS.
//! 3. The adjustment's hue shift is added to the source hue, wrapping mod 1.
//! 4. The adjustment's saturation *replaces* the source saturation.
//! 5. Lightness is scaled by `1 + lightness_percent / 100` and clamped to
//!    [0, 1]; this clamp is part of the transform, not input validation.
//! 6. HLS is converted back to RGB; the source alpha is kept.
//!
//! # Example
//!
//! ```rust
//! use tint_ops::recolor::recolor_pixel;
//! use tint_palette::Adjustment;
//!
//! // 120 degrees around the hue circle turns pure red into pure green.
//! let adj = Adjustment::new("Green", 120.0, 1.0, 0.0);
//! let out = recolor_pixel([1.0, 0.0, 0.0, 1.0], &adj);
//! assert!(out[1] > 0.99 && out[0] < 0.01);
//! ```

use tint_color::{hls_to_rgb, rgb_to_hls};
use tint_core::pixel::{self, CHANNELS, Rgba};
use tint_core::Image;
use tint_palette::Adjustment;
#[allow(unused_imports)]
use tracing::{debug, trace};

use crate::{OpsError, OpsResult};

/// Applies a color adjustment to a single pixel.
///
/// A no-op for fully transparent pixels; otherwise the alpha channel is
/// preserved exactly while RGB is remapped through HLS.
#[inline]
pub fn recolor_pixel(px: Rgba, adj: &Adjustment) -> Rgba {
    if pixel::is_transparent(px) {
        return px;
    }

    let [h, l, _] = rgb_to_hls([px[0], px[1], px[2]]);

    let h = (adj.hue_shift / 360.0 + h) % 1.0;
    let s = adj.saturation;
    let l = (l * (1.0 + adj.lightness_percent / 100.0)).clamp(0.0, 1.0);

    let [r, g, b] = hls_to_rgb([h, l, s]);
    [r, g, b, px[3]]
}

/// Recolors an entire image with one adjustment.
///
/// Allocates an output image of identical dimensions and applies
/// [`recolor_pixel`] to every pixel independently.
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
    trace!(
        width = src.width(),
        height = src.height(),
        color = %adj.name,
        "recolor"
    );

    let mut out = vec![0.0f32; src.data().len()];
    for (src_px, dst) in src
        .data()
        .chunks_exact(CHANNELS)
        .zip(out.chunks_exact_mut(CHANNELS))
    {
        let px = [src_px[0], src_px[1], src_px[2], src_px[3]];
        dst.copy_from_slice(&recolor_pixel(px, adj));
    }

    Ok(Image::from_data(src.width(), src.height(), out)?)
}
