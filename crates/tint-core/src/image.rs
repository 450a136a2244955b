//! Owned RGBA image buffer.
//!
//! [`Image`] stores pixels in **row-major** order, top-to-bottom, with
//! interleaved channels:
//!
//! ```text
//! Memory: [R G B A R G B A ...]  <- Row 0
//!         [R G B A R G B A ...]  <- Row 1
//!         ...
//! ```
//!
//! # Usage
//!
//! ```rust
//! use tint_core::Image;
//!
//! let mut img = Image::new(64, 64);
//! img.set_pixel(10, 10, [1.0, 0.5, 0.25, 1.0]);
//! let px = img.pixel(10, 10);
//! assert_eq!(px[0], 1.0);
//! ```

use crate::pixel::{self, CHANNELS, Rgba};
use crate::{Error, Result};

/// Owned RGBA f32 image buffer with fixed dimensions.
///
/// The buffer always holds exactly `width * height * 4` values. Transform
/// operations produce a new `Image` of identical dimensions rather than
/// mutating in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    /// Interleaved RGBA pixel data.
    data: Vec<f32>,
    /// Image width in pixels.
    width: u32,
    /// Image height in pixels.
    height: u32,
}

impl Image {
    /// Creates a new image filled with transparent black.
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize * CHANNELS;
        Self {
            data: vec![0.0; len],
            width,
            height,
        }
    }

    /// Creates an image from existing interleaved RGBA data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `data` does not hold exactly
    /// `width * height * 4` values.
    pub fn from_data(width: u32, height: u32, data: Vec<f32>) -> Result<Self> {
        let expected = width as usize * height as usize * CHANNELS;
        if data.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} values, got {}", expected, data.len()),
            ));
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Creates an image filled with a specific pixel value.
    pub fn filled(width: u32, height: u32, px: Rgba) -> Self {
        let count = width as usize * height as usize;
        let mut data = Vec::with_capacity(count * CHANNELS);
        for _ in 0..count {
            data.extend_from_slice(&px);
        }
        Self {
            data,
            width,
            height,
        }
    }

    /// Creates an image from interleaved 8-bit RGBA data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] on a length mismatch.
    pub fn from_rgba8(width: u32, height: u32, data: &[u8]) -> Result<Self> {
        let expected = width as usize * height as usize * CHANNELS;
        if data.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} bytes, got {}", expected, data.len()),
            ));
        }
        let floats = data.iter().map(|&b| pixel::channel_from_u8(b)).collect();
        Ok(Self {
            data: floats,
            width,
            height,
        })
    }

    /// Converts the image to interleaved 8-bit RGBA data.
    ///
    /// Channels are clamped to [0, 1] and rounded.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.data.iter().map(|&v| pixel::channel_to_u8(v)).collect()
    }

    /// Returns the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the image dimensions as (width, height).
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Returns `true` if the image has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns a reference to the raw interleaved data.
    #[inline]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Returns a mutable reference to the raw interleaved data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Returns the buffer offset for pixel (x, y).
    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * CHANNELS
    }

    /// Returns the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics in debug builds if (x, y) is out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Rgba {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let off = self.offset(x, y);
        let mut px = [0.0; CHANNELS];
        px.copy_from_slice(&self.data[off..off + CHANNELS]);
        px
    }

    /// Returns the pixel at (x, y), or `None` if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x < self.width && y < self.height {
            Some(self.pixel(x, y))
        } else {
            None
        }
    }

    /// Sets the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics in debug builds if (x, y) is out of bounds.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, px: Rgba) {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let off = self.offset(x, y);
        self.data[off..off + CHANNELS].copy_from_slice(&px);
    }

    /// Returns a row of pixels as an interleaved slice.
    #[inline]
    pub fn row(&self, y: u32) -> &[f32] {
        debug_assert!(y < self.height, "row out of bounds");
        let start = y as usize * self.width as usize * CHANNELS;
        let end = start + self.width as usize * CHANNELS;
        &self.data[start..end]
    }

    /// Iterates over all pixels with their coordinates.
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32, Rgba)> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| (x, y, self.pixel(x, y))))
    }

    /// Applies a function to each pixel in place.
    pub fn map_pixels<F>(&mut self, f: F)
    where
        F: Fn(Rgba) -> Rgba,
    {
        for chunk in self.data.chunks_exact_mut(CHANNELS) {
            let mut px = [0.0; CHANNELS];
            px.copy_from_slice(chunk);
            chunk.copy_from_slice(&f(px));
        }
    }
}
