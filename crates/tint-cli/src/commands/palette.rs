//! Palette command

use anyhow::Result;

use crate::PaletteArgs;

pub fn run(args: PaletteArgs) -> Result<()> {
    let palette = super::load_palette(args.file.as_deref())?;

    match &args.file {
        Some(path) => println!("Palette {} ({} colors):", path.display(), palette.len()),
        None => println!("Builtin palette ({} colors):", palette.len()),
    }

    println!(
        "{:<12} {:>9} {:>11} {:>11}",
        "name", "hue", "saturation", "lightness%"
    );
    for adj in &palette {
        println!(
            "{:<12} {:>9} {:>11} {:>11}",
            adj.name, adj.hue_shift, adj.saturation, adj.lightness_percent
        );
    }

    Ok(())
}
