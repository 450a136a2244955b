//! Pixel representation and channel conversion helpers.
//!
//! A pixel is a plain `[f32; 4]` RGBA array with straight alpha and all
//! channels normalized to [0, 1]. Keeping pixels as bare arrays (rather
//! than a wrapper struct) lets operations work directly on the flat image
//! buffer with `chunks_exact`.

/// Straight-alpha RGBA pixel, channels in [0, 1].
pub type Rgba = [f32; 4];

/// Number of channels per pixel.
pub const CHANNELS: usize = 4;

/// Converts an 8-bit channel value to normalized f32.
#[inline]
pub fn channel_from_u8(v: u8) -> f32 {
    v as f32 / 255.0
}

/// Converts a normalized f32 channel value to 8-bit.
///
/// Values outside [0, 1] are clamped before rounding.
#[inline]
pub fn channel_to_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Converts a 16-bit channel value to normalized f32.
#[inline]
pub fn channel_from_u16(v: u16) -> f32 {
    v as f32 / 65535.0
}

/// Converts four 8-bit channel values to an [`Rgba`] pixel.
#[inline]
pub fn rgba_from_u8(rgba: [u8; 4]) -> Rgba {
    [
        channel_from_u8(rgba[0]),
        channel_from_u8(rgba[1]),
        channel_from_u8(rgba[2]),
        channel_from_u8(rgba[3]),
    ]
}

/// Converts an [`Rgba`] pixel to four 8-bit channel values.
#[inline]
pub fn rgba_to_u8(rgba: Rgba) -> [u8; 4] {
    [
        channel_to_u8(rgba[0]),
        channel_to_u8(rgba[1]),
        channel_to_u8(rgba[2]),
        channel_to_u8(rgba[3]),
    ]
}

/// Returns `true` if the pixel is fully transparent.
///
/// Only an alpha of exactly 0 counts as transparent; partially translucent
/// pixels are still recolored.
#[inline]
pub fn is_transparent(rgba: Rgba) -> bool {
    rgba[3] == 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_channel_roundtrip() {
        for v in [0u8, 1, 127, 128, 254, 255] {
            assert_eq!(channel_to_u8(channel_from_u8(v)), v);
        }
    }

    #[test]
    fn test_channel_to_u8_clamps() {
        assert_eq!(channel_to_u8(-0.5), 0);
        assert_eq!(channel_to_u8(1.5), 255);
    }

    #[test]
    fn test_channel_from_u16() {
        assert_abs_diff_eq!(channel_from_u16(0), 0.0);
        assert_abs_diff_eq!(channel_from_u16(65535), 1.0);
        assert_abs_diff_eq!(channel_from_u16(32768), 0.5, epsilon = 1e-4);
    }

    #[test]
    fn test_rgba_roundtrip() {
        let px = [255u8, 128, 64, 0];
        assert_eq!(rgba_to_u8(rgba_from_u8(px)), px);
    }

    #[test]
    fn test_is_transparent() {
        assert!(is_transparent([1.0, 0.5, 0.0, 0.0]));
        assert!(!is_transparent([0.0, 0.0, 0.0, 1.0 / 255.0]));
    }
}
