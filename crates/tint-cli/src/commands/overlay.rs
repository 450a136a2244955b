//! Overlay command

use anyhow::Result;
use tint_ops::parallel;

use crate::OverlayArgs;

pub fn run(args: OverlayArgs, verbose: bool) -> Result<()> {
    let base = super::load_image(&args.base)?;
    let overlay = super::load_image(&args.overlay)?;

    if verbose {
        println!(
            "Compositing {} onto {}",
            args.overlay.display(),
            args.base.display()
        );
    }

    let out = parallel::apply_overlay(&base, &overlay)?;
    super::save_image(&args.output, &out)?;

    if verbose {
        println!("Wrote {}", args.output.display());
    }

    Ok(())
}
