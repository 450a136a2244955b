//! HLS cylinder conversions.
//!
//! Conventions:
//! - RGB channels in [0, 1].
//! - Hue in [0, 1) as a fraction of a full turn (multiply by 360 for degrees).
//! - Lightness `(max + min) / 2` in [0, 1].
//! - Saturation in [0, 1], with the standard achromatic/chromatic split.

/// Converts an RGB triple to HLS.
///
/// Returns `[h, l, s]` with hue in [0, 1). Achromatic inputs (all channels
/// equal) yield `h = 0, s = 0`.
///
/// # Example
///
/// ```rust
/// use tint_color::rgb_to_hls;
///
/// // Pure green sits a third of the way around the hue circle.
/// let [h, l, s] = rgb_to_hls([0.0, 1.0, 0.0]);
/// assert!((h - 1.0 / 3.0).abs() < 1e-6);
/// assert!((l - 0.5).abs() < 1e-6);
/// assert!((s - 1.0).abs() < 1e-6);
/// ```
#[inline]
pub fn rgb_to_hls(rgb: [f32; 3]) -> [f32; 3] {
    let [r, g, b] = rgb;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        // Achromatic: hue is undefined, pinned to 0.
        return [0.0, l, 0.0];
    }

    let delta = max - min;
    let s = if l < 0.5 {
        delta / (max + min)
    } else {
        delta / (2.0 - max - min)
    };

    let mut h = if max == r {
        (g - b) / delta + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };
    h /= 6.0;
    // Guard the upper boundary so hue stays in [0, 1).
    if h >= 1.0 {
        h -= 1.0;
    }

    [h, l, s]
}

/// Converts an HLS triple back to RGB.
///
/// Inverse of [`rgb_to_hls`] using the standard p/q construction. A
/// saturation of 0 short-circuits to the grayscale value `l`.
///
/// # Example
///
/// ```rust
/// use tint_color::hls_to_rgb;
///
/// let rgb = hls_to_rgb([0.0, 0.5, 1.0]); // fully saturated red
/// assert!((rgb[0] - 1.0).abs() < 1e-6);
/// assert!(rgb[1].abs() < 1e-6);
/// ```
#[inline]
pub fn hls_to_rgb(hls: [f32; 3]) -> [f32; 3] {
    let [h, l, s] = hls;

    if s == 0.0 {
        return [l, l, l];
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    [
        hue_to_channel(p, q, h + 1.0 / 3.0),
        hue_to_channel(p, q, h),
        hue_to_channel(p, q, h - 1.0 / 3.0),
    ]
}

/// Maps a hue offset to a single channel value.
///
/// `t` is wrapped by +/-1 into [0, 1], then one of six piecewise-linear
/// segments applies. Used by [`hls_to_rgb`] with `t` offset by a third of a
/// turn per channel.
#[inline]
pub fn hue_to_channel(p: f32, q: f32, t: f32) -> f32 {
    let mut t = t;
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const EPS: f32 = 1e-5;

    #[test]
    fn test_primaries() {
        assert_abs_diff_eq!(rgb_to_hls([1.0, 0.0, 0.0])[0], 0.0, epsilon = EPS);
        assert_abs_diff_eq!(rgb_to_hls([0.0, 1.0, 0.0])[0], 1.0 / 3.0, epsilon = EPS);
        assert_abs_diff_eq!(rgb_to_hls([0.0, 0.0, 1.0])[0], 2.0 / 3.0, epsilon = EPS);
    }

    #[test]
    fn test_achromatic() {
        for v in [0.0, 0.25, 0.5, 0.75, 1.0] {
            let [h, l, s] = rgb_to_hls([v, v, v]);
            assert_eq!(h, 0.0);
            assert_eq!(s, 0.0);
            assert_abs_diff_eq!(l, v, epsilon = EPS);
        }
    }

    #[test]
    fn test_grayscale_shortcut() {
        let rgb = hls_to_rgb([0.37, 0.42, 0.0]);
        assert_eq!(rgb, [0.42, 0.42, 0.42]);
    }

    #[test]
    fn test_hue_stays_in_range() {
        // Magenta-ish values drive the red-is-max branch with g < b,
        // the +6 wrap case.
        let [h, _, _] = rgb_to_hls([1.0, 0.0, 0.5]);
        assert!((0.0..1.0).contains(&h), "hue {} out of range", h);
        let [h, _, _] = rgb_to_hls([1.0, 0.0, 1e-7]);
        assert!((0.0..1.0).contains(&h), "hue {} out of range", h);
    }

    #[test]
    fn test_roundtrip() {
        // Sweep a coarse grid of the RGB cube.
        let steps = [0.0, 0.1, 0.3, 0.5, 0.7, 0.9, 1.0];
        for &r in &steps {
            for &g in &steps {
                for &b in &steps {
                    let back = hls_to_rgb(rgb_to_hls([r, g, b]));
                    assert_abs_diff_eq!(back[0], r, epsilon = 1e-4);
                    assert_abs_diff_eq!(back[1], g, epsilon = 1e-4);
                    assert_abs_diff_eq!(back[2], b, epsilon = 1e-4);
                }
            }
        }
    }

    #[test]
    fn test_hue_to_channel_segments() {
        let (p, q) = (0.2, 0.8);
        // t < 1/6: rising edge
        assert_abs_diff_eq!(hue_to_channel(p, q, 1.0 / 12.0), 0.5, epsilon = EPS);
        // 1/6 <= t < 1/2: plateau at q
        assert_abs_diff_eq!(hue_to_channel(p, q, 0.25), q, epsilon = EPS);
        // t < 2/3: falling edge
        assert_abs_diff_eq!(hue_to_channel(p, q, 7.0 / 12.0), 0.5, epsilon = EPS);
        // t >= 2/3: floor at p
        assert_abs_diff_eq!(hue_to_channel(p, q, 0.9), p, epsilon = EPS);
        // wrapping
        assert_abs_diff_eq!(
            hue_to_channel(p, q, 0.25 - 1.0),
            hue_to_channel(p, q, 0.25),
            epsilon = EPS
        );
        assert_abs_diff_eq!(
            hue_to_channel(p, q, 0.9 + 1.0),
            hue_to_channel(p, q, 0.9),
            epsilon = EPS
        );
    }

    #[test]
    fn test_half_lightness_full_saturation() {
        let rgb = hls_to_rgb([0.5, 0.5, 1.0]); // cyan
        assert_abs_diff_eq!(rgb[0], 0.0, epsilon = EPS);
        assert_abs_diff_eq!(rgb[1], 1.0, epsilon = EPS);
        assert_abs_diff_eq!(rgb[2], 1.0, epsilon = EPS);
    }
}
