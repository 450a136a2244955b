//! CLI command implementations

pub mod overlay;
pub mod palette;
pub mod recolor;
pub mod variants;

use anyhow::{Context, Result};
use std::path::Path;
use tint_core::Image;
use tint_io::{AssetStore, FsStore};
use tint_palette::Palette;

/// Load an image from a path.
pub fn load_image(path: &Path) -> Result<Image> {
    FsStore
        .decode_image(path)
        .with_context(|| format!("Failed to load: {}", path.display()))
}

/// Save an image to a path.
pub fn save_image(path: &Path, image: &Image) -> Result<()> {
    FsStore
        .encode_image(path, image)
        .with_context(|| format!("Failed to save: {}", path.display()))
}

/// Load a palette file, or fall back to the builtin palette.
pub fn load_palette(path: Option<&Path>) -> Result<Palette> {
    match path {
        Some(p) => FsStore
            .read_adjustments(p)
            .with_context(|| format!("Failed to load palette: {}", p.display())),
        None => Ok(Palette::builtin()),
    }
}
