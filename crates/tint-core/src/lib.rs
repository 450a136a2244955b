//! # tint-core
//!
//! Core types for palette-driven texture recoloring.
//!
//! This crate provides the foundational types used throughout the TINT-RS
//! workspace:
//!
//! - [`Rgba`] - straight-alpha RGBA pixel, four `f32` channels in [0, 1]
//! - [`Image`] - owned RGBA image buffer in row-major order
//! - [`Error`] - unified error type for buffer operations
//!
//! ## Design
//!
//! Every stage of the recolor pipeline works on the same representation:
//! straight (non-premultiplied) alpha, normalized f32 channels. Integer
//! formats exist only at the I/O boundary and are converted on entry/exit
//! with [`pixel::channel_from_u8`] / [`pixel::channel_to_u8`].
//!
//! An alpha of exactly 0 marks a pixel as fully transparent; transform
//! operations must leave such pixels untouched.
//!
//! ## Used By
//!
//! - `tint-ops` - recolor and overlay operations
//! - `tint-io` - image decode/encode

#![warn(missing_docs)]

pub mod error;
pub mod image;
pub mod pixel;

pub use error::{Error, Result};
pub use image::Image;
pub use pixel::{CHANNELS, Rgba};
