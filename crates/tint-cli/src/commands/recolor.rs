//! Recolor command

use anyhow::{Result, bail};
use tint_ops::parallel;
use tint_palette::Adjustment;

use crate::RecolorArgs;

pub fn run(args: RecolorArgs, verbose: bool) -> Result<()> {
    let adjustment = resolve_adjustment(&args)?;

    if verbose {
        println!(
            "Recoloring {} as '{}' (hue {}, saturation {}, lightness {}%)",
            args.input.display(),
            adjustment.name,
            adjustment.hue_shift,
            adjustment.saturation,
            adjustment.lightness_percent
        );
    }

    let src = super::load_image(&args.input)?;
    let out = parallel::recolor(&src, &adjustment)?;
    super::save_image(&args.output, &out)?;

    if verbose {
        println!("Wrote {}", args.output.display());
    }

    Ok(())
}

/// Picks the adjustment: a named palette entry, or the explicit HLS flags.
fn resolve_adjustment(args: &RecolorArgs) -> Result<Adjustment> {
    if let Some(name) = &args.color {
        let palette = super::load_palette(args.palette.as_deref())?;
        return match palette.get(name) {
            Some(adj) => Ok(adj.clone()),
            None => bail!("No color '{}' in palette", name),
        };
    }

    let Some(saturation) = args.saturation else {
        bail!("Either --color or --saturation is required");
    };
    let adjustment = Adjustment::new("custom", args.hue, saturation, args.lightness);
    adjustment.validate()?;
    Ok(adjustment)
}
