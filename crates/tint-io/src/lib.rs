//! # tint-io
//!
//! Image decode/encode and the host boundary for the recolor pipeline.
//!
//! The transform crates (`tint-color`, `tint-ops`) never touch the
//! filesystem. Everything host-side goes through the [`AssetStore`] trait:
//! decode an image by path, encode one back, read a palette. [`FsStore`] is
//! the shipped filesystem implementation, backed by the [`png`] module and
//! `tint-palette`'s YAML loader.
//!
//! # Example
//!
//! ```rust,ignore
//! use tint_io::{AssetStore, FsStore};
//!
//! let store = FsStore;
//! let img = store.decode_image("shirt.png".as_ref())?;
//! store.encode_image("shirt_red.png".as_ref(), &img)?;
//! ```

#![warn(missing_docs)]

mod error;
pub mod png;
mod store;

pub use error::{IoError, IoResult};
pub use store::{AssetStore, FsStore};
