//! PNG format support.
//!
//! Reading accepts 8-bit and 16-bit grayscale, grayscale+alpha, RGB, and
//! RGBA files; everything is normalized to the pipeline's RGBA f32
//! representation (missing alpha becomes fully opaque). Writing always
//! produces 8-bit RGBA with an sRGB chunk, which is what the texture
//! pipeline downstream expects.
//!
//! # Example
//!
//! ```rust,ignore
//! use tint_io::png::{read, write};
//!
//! let image = read("input.png")?;
//! write("output.png", &image)?;
//! ```

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use tint_core::pixel::{channel_from_u8, channel_from_u16};
use tint_core::Image;
use tracing::trace;

use crate::{IoError, IoResult};

/// Reads a PNG file into an RGBA f32 image.
///
/// # Errors
///
/// Returns [`IoError::DecodeError`] on malformed files and
/// [`IoError::UnsupportedFormat`] for color type / bit depth combinations
/// the pipeline does not handle (e.g. indexed PNGs).
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<Image> {
    let file = File::open(path.as_ref())?;
    let decoder = png::Decoder::new(std::io::BufReader::new(file));
    let mut reader = decoder
        .read_info()
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("cannot determine output buffer size".into()))?;
    let mut buf = vec![0u8; buf_size];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;

    let width = info.width;
    let height = info.height;
    let bytes = &buf[..info.buffer_size()];
    trace!(width, height, color_type = ?info.color_type, bit_depth = ?info.bit_depth, "png::read");

    let data: Vec<f32> = match (info.color_type, info.bit_depth) {
        (png::ColorType::Rgba, png::BitDepth::Eight) => {
            bytes.iter().map(|&b| channel_from_u8(b)).collect()
        }
        (png::ColorType::Rgb, png::BitDepth::Eight) => bytes
            .chunks_exact(3)
            .flat_map(|rgb| {
                [
                    channel_from_u8(rgb[0]),
                    channel_from_u8(rgb[1]),
                    channel_from_u8(rgb[2]),
                    1.0,
                ]
            })
            .collect(),
        (png::ColorType::Rgba, png::BitDepth::Sixteen) => bytes_to_u16(bytes)
            .into_iter()
            .map(channel_from_u16)
            .collect(),
        (png::ColorType::Rgb, png::BitDepth::Sixteen) => bytes_to_u16(bytes)
            .chunks_exact(3)
            .flat_map(|rgb| {
                [
                    channel_from_u16(rgb[0]),
                    channel_from_u16(rgb[1]),
                    channel_from_u16(rgb[2]),
                    1.0,
                ]
            })
            .collect(),
        (png::ColorType::Grayscale, png::BitDepth::Eight) => bytes
            .iter()
            .flat_map(|&g| {
                let v = channel_from_u8(g);
                [v, v, v, 1.0]
            })
            .collect(),
        (png::ColorType::GrayscaleAlpha, png::BitDepth::Eight) => bytes
            .chunks_exact(2)
            .flat_map(|ga| {
                let v = channel_from_u8(ga[0]);
                [v, v, v, channel_from_u8(ga[1])]
            })
            .collect(),
        (png::ColorType::Grayscale, png::BitDepth::Sixteen) => bytes_to_u16(bytes)
            .into_iter()
            .flat_map(|g| {
                let v = channel_from_u16(g);
                [v, v, v, 1.0]
            })
            .collect(),
        (png::ColorType::GrayscaleAlpha, png::BitDepth::Sixteen) => bytes_to_u16(bytes)
            .chunks_exact(2)
            .flat_map(|ga| {
                let v = channel_from_u16(ga[0]);
                [v, v, v, channel_from_u16(ga[1])]
            })
            .collect(),
        (color_type, bit_depth) => {
            return Err(IoError::UnsupportedFormat(format!(
                "{:?} at {:?} bit depth",
                color_type, bit_depth
            )));
        }
    };

    Ok(Image::from_data(width, height, data)?)
}

/// Writes an image as an 8-bit RGBA PNG.
///
/// # Errors
///
/// Returns [`IoError::EncodeError`] when the encoder rejects the data.
pub fn write<P: AsRef<Path>>(path: P, image: &Image) -> IoResult<()> {
    let file = File::create(path.as_ref())?;
    let writer = BufWriter::new(file);
    trace!(width = image.width(), height = image.height(), "png::write");

    let mut encoder = png::Encoder::new(writer, image.width(), image.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::default());
    encoder.set_source_srgb(png::SrgbRenderingIntent::Perceptual);

    let mut png_writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(e.to_string()))?;

    png_writer
        .write_image_data(&image.to_rgba8())
        .map_err(|e| IoError::EncodeError(e.to_string()))?;

    Ok(())
}

/// Converts a big-endian byte slice to u16 values.
fn bytes_to_u16(bytes: &[u8]) -> Vec<u16> {
    bytes
        .chunks_exact(2)
        .map(|chunk| u16::from_be_bytes([chunk[0], chunk[1]]))
        .collect()
}
