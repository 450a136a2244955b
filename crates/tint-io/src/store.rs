//! Host asset-store boundary.
//!
//! Drivers (the CLI, tests, an embedding application such as an editor
//! asset database) work against the [`AssetStore`] trait, so the transform
//! pipeline never depends on where images and palettes actually live.

use std::path::Path;

use tint_core::Image;
use tint_palette::Palette;

use crate::{png, IoResult};

/// Boundary between the transform pipeline and its host.
///
/// Implementations map paths to decoded images, accept encoded results, and
/// supply the adjustment configuration.
pub trait AssetStore {
    /// Decodes the image resource at `path`.
    fn decode_image(&self, path: &Path) -> IoResult<Image>;

    /// Encodes `image` to the resource at `path`.
    fn encode_image(&self, path: &Path, image: &Image) -> IoResult<()>;

    /// Reads the ordered adjustment list from `path`.
    fn read_adjustments(&self, path: &Path) -> IoResult<Palette>;
}

/// Filesystem-backed store: PNG images, YAML palettes.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsStore;

impl AssetStore for FsStore {
    fn decode_image(&self, path: &Path) -> IoResult<Image> {
        png::read(path)
    }

    fn encode_image(&self, path: &Path, image: &Image) -> IoResult<()> {
        png::write(path, image)
    }

    fn read_adjustments(&self, path: &Path) -> IoResult<Palette> {
        Ok(Palette::from_file(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_fs_store_image_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.png");
        let store = FsStore;

        let img = Image::filled(8, 8, [0.2, 0.4, 0.6, 1.0]);
        store.encode_image(&path, &img).unwrap();
        let loaded = store.decode_image(&path).unwrap();
        assert_eq!(loaded.dimensions(), (8, 8));
    }

    #[test]
    fn test_fs_store_reads_palette() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("palette.yaml");
        std::fs::write(
            &path,
            "colors:\n  - name: Red\n    hue_shift: 0\n    saturation: 0.6\n    lightness_percent: -40\n",
        )
        .unwrap();

        let store = FsStore;
        let palette = store.read_adjustments(&path).unwrap();
        assert_eq!(palette.len(), 1);
    }

    #[test]
    fn test_fs_store_missing_palette() {
        let store = FsStore;
        assert!(store
            .read_adjustments(Path::new("/nonexistent/palette.yaml"))
            .is_err());
    }
}
