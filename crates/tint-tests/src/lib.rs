//! Integration tests for TINT-RS crates.
//!
//! This crate contains end-to-end tests that verify the interaction
//! between the core, color, ops, palette, and io crates.

#[cfg(test)]
mod tests {
    use std::path::Path;

    use tempfile::tempdir;
    use tint_core::Image;
    use tint_io::{AssetStore, FsStore};
    use tint_ops::{overlay, parallel, recolor};
    use tint_palette::{Adjustment, Palette};

    /// A small garment-like texture: opaque body, transparent border.
    fn base_texture() -> Image {
        let mut img = Image::new(16, 16);
        for y in 2..14 {
            for x in 2..14 {
                img.set_pixel(x, y, [1.0, 0.0, 0.0, 1.0]);
            }
        }
        img
    }

    #[test]
    fn test_full_variant_pipeline() {
        let dir = tempdir().unwrap();
        let store = FsStore;

        // Source texture and a one-pixel trim overlay on disk.
        let base_path = dir.path().join("shirt.png");
        store.encode_image(&base_path, &base_texture()).unwrap();

        let mut trim = Image::new(16, 16);
        trim.set_pixel(8, 8, [0.0, 0.0, 1.0, 1.0]);
        let overlay_path = dir.path().join("overlay.png");
        store.encode_image(&overlay_path, &trim).unwrap();

        // Palette from YAML, the way the batch driver consumes it.
        let palette_path = dir.path().join("palette.yaml");
        std::fs::write(
            &palette_path,
            "colors:\n  - name: Green\n    hue_shift: 120\n    saturation: 1.0\n    lightness_percent: 0\n",
        )
        .unwrap();
        let palette = store.read_adjustments(&palette_path).unwrap();

        // Decode -> recolor -> overlay -> encode -> re-decode.
        let base = store.decode_image(&base_path).unwrap();
        let overlay_img = store.decode_image(&overlay_path).unwrap();
        let adj = palette.get("green").unwrap();
        let recolored = recolor::recolor(&base, adj).unwrap();
        let composed = overlay::apply_overlay(&recolored, &overlay_img).unwrap();

        let out_path = dir.path().join("shirt_Green.png");
        store.encode_image(&out_path, &composed).unwrap();
        let result = store.decode_image(&out_path).unwrap();

        assert_eq!(result.dimensions(), (16, 16));
        // Body: 120 degrees from red is green.
        let body = result.pixel(4, 4);
        assert!(body[1] > 0.99 && body[0] < 0.01 && body[2] < 0.01);
        assert_eq!(body[3], 1.0);
        // Border: still fully transparent.
        assert_eq!(result.pixel(0, 0)[3], 0.0);
        // Trim pixel: overlay replaced the recolored body.
        let trim_px = result.pixel(8, 8);
        assert!(trim_px[2] > 0.99 && trim_px[1] < 0.01);
    }

    #[test]
    fn test_serial_and_parallel_agree_after_io() {
        let dir = tempdir().unwrap();
        let store = FsStore;

        let path = dir.path().join("gradient.png");
        let mut img = Image::new(32, 32);
        for y in 0..32 {
            for x in 0..32 {
                img.set_pixel(
                    x,
                    y,
                    [x as f32 / 32.0, y as f32 / 32.0, 0.3, 1.0],
                );
            }
        }
        store.encode_image(&path, &img).unwrap();
        let loaded = store.decode_image(&path).unwrap();

        let adj = Adjustment::new("Olive", 78.0, 0.20, -45.0);
        let serial = recolor::recolor(&loaded, &adj).unwrap();
        let par = parallel::recolor(&loaded, &adj).unwrap();
        assert_eq!(serial.data(), par.data());
    }

    #[test]
    fn test_builtin_palette_generates_all_variants() {
        let palette = Palette::builtin();
        let base = base_texture();

        let mut names = Vec::new();
        for adj in &palette {
            let out = recolor::recolor(&base, adj).unwrap();
            assert_eq!(out.dimensions(), base.dimensions());
            // Transparent border is untouched by every adjustment.
            assert_eq!(out.pixel(0, 0), [0.0, 0.0, 0.0, 0.0]);
            names.push(format!("shirt_{}", adj.name));
        }

        // Output naming follows palette order.
        assert_eq!(names.len(), 10);
        assert_eq!(names[0], "shirt_White");
        assert_eq!(names[3], "shirt_Red");
    }

    #[test]
    fn test_missing_palette_surfaces_as_error() {
        let store = FsStore;
        let err = store
            .read_adjustments(Path::new("/nonexistent/colors.yaml"))
            .unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_white_variant_roundtrips_exactly() {
        // The White entry (no hue shift, saturation 0, no lightness change)
        // maps every opaque pixel to its own lightness; gray inputs are
        // preserved bit-for-bit through an 8-bit encode/decode cycle.
        let dir = tempdir().unwrap();
        let store = FsStore;

        let img = Image::filled(8, 8, [0.5, 0.5, 0.5, 1.0]);
        let adj = Palette::builtin().get("White").unwrap().clone();
        let out = recolor::recolor(&img, &adj).unwrap();

        let path = dir.path().join("white.png");
        store.encode_image(&path, &out).unwrap();
        let loaded = store.decode_image(&path).unwrap();
        assert_eq!(loaded.to_rgba8(), img.to_rgba8());
    }
}
