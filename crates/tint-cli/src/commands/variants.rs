//! Variants command - batch palette recoloring of a texture directory.
//!
//! Walks one subdirectory per item under the input directory. Every PNG in
//! an item directory is a base texture, except the overlay file, which (when
//! present) is composited onto each recolored result. One output is written
//! per palette color: `<output>/<item>/<base>_<color>.png`.

use anyhow::{Context, Result, bail};
use std::fs;
use std::path::{Path, PathBuf};
use tint_core::Image;
use tint_ops::parallel;
use tint_palette::Palette;
use tracing::debug;

use crate::VariantsArgs;

pub fn run(args: VariantsArgs, verbose: bool) -> Result<()> {
    if !args.input_dir.is_dir() {
        bail!("Input directory does not exist: {}", args.input_dir.display());
    }

    let palette = super::load_palette(args.palette.as_deref())?;

    let mut item_dirs: Vec<PathBuf> = Vec::new();
    for entry in fs::read_dir(&args.input_dir)
        .with_context(|| format!("Failed to read: {}", args.input_dir.display()))?
    {
        let path = entry?.path();
        if path.is_dir() {
            item_dirs.push(path);
        }
    }
    item_dirs.sort();
    // A flat directory of textures counts as a single item.
    if item_dirs.is_empty() {
        item_dirs.push(args.input_dir.clone());
    }

    let mut generated = 0usize;
    for item_dir in &item_dirs {
        generated += process_item(item_dir, &args, &palette, verbose)?;
    }

    if generated == 0 {
        bail!("No PNG textures found under {}", args.input_dir.display());
    }
    println!(
        "Generated {} variant(s) in {}",
        generated,
        args.output_dir.display()
    );
    Ok(())
}

/// Recolors every base texture in one item directory against the palette.
fn process_item(
    item_dir: &Path,
    args: &VariantsArgs,
    palette: &Palette,
    verbose: bool,
) -> Result<usize> {
    let item_name = item_dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "item".to_string());

    let mut textures: Vec<PathBuf> = Vec::new();
    let mut overlay_path: Option<PathBuf> = None;
    for entry in fs::read_dir(item_dir)
        .with_context(|| format!("Failed to read: {}", item_dir.display()))?
    {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().map(|n| n.to_string_lossy().into_owned()) else {
            continue;
        };
        if name.eq_ignore_ascii_case(&args.overlay_name) {
            overlay_path = Some(path);
        } else if name.to_ascii_lowercase().ends_with(".png") {
            textures.push(path);
        }
    }
    textures.sort();
    debug!(
        item = %item_name,
        textures = textures.len(),
        overlay = overlay_path.is_some(),
        "processing item"
    );

    let overlay: Option<Image> = match &overlay_path {
        Some(path) => Some(super::load_image(path)?),
        None => None,
    };

    let mut generated = 0usize;
    for texture_path in &textures {
        let base_name = texture_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "texture".to_string());
        let base = super::load_image(texture_path)?;

        let out_dir = args.output_dir.join(&item_name);
        fs::create_dir_all(&out_dir)
            .with_context(|| format!("Failed to create: {}", out_dir.display()))?;

        for adjustment in palette {
            let mut out = parallel::recolor(&base, adjustment)?;
            if let Some(overlay) = &overlay {
                out = parallel::apply_overlay(&out, overlay)?;
            }

            let out_path = out_dir.join(format!("{}_{}.png", base_name, adjustment.name));
            super::save_image(&out_path, &out)?;
            generated += 1;

            if verbose {
                println!("Generated: {}", out_path.display());
            }
        }
    }

    Ok(generated)
}
