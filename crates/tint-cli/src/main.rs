//! tint - palette texture variant generator
//!
//! Recolors RGBA textures through HLS remapping, composites overlays, and
//! batch-generates one output per palette color.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "tint")]
#[command(author, version, about = "Palette texture variant generator")]
#[command(long_about = "
Generates per-color variants of RGBA textures via hue/lightness/saturation
remapping, with optional overlay compositing.

Examples:
  tint recolor shirt.png -o shirt_red.png --color Red
  tint recolor shirt.png -o out.png --hue 120 --saturation 0.3 --lightness -60
  tint overlay shirt_red.png Overlay.png -o final.png
  tint variants ./Input -o ./Output --palette colors.yaml
  tint palette colors.yaml
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Recolor a single texture
    #[command(visible_alias = "r")]
    Recolor(RecolorArgs),

    /// Composite an overlay onto a base texture
    Overlay(OverlayArgs),

    /// Batch-generate color variants for a directory of textures
    #[command(visible_alias = "v")]
    Variants(VariantsArgs),

    /// Validate and list a palette
    Palette(PaletteArgs),
}

#[derive(Args)]
struct RecolorArgs {
    /// Input texture (PNG)
    input: PathBuf,

    /// Output texture
    #[arg(short, long)]
    output: PathBuf,

    /// Palette color name to apply (looked up in --palette or the builtin)
    #[arg(short, long, conflicts_with_all = ["hue", "saturation", "lightness"])]
    color: Option<String>,

    /// Palette file (YAML); builtin ten-color palette when omitted
    #[arg(short, long)]
    palette: Option<PathBuf>,

    /// Hue shift in degrees, [0, 360)
    #[arg(long, default_value = "0")]
    hue: f32,

    /// Replacement saturation, [0, 1]
    #[arg(long)]
    saturation: Option<f32>,

    /// Lightness scale percentage, [-100, 100]
    #[arg(long, default_value = "0")]
    lightness: f32,
}

#[derive(Args)]
struct OverlayArgs {
    /// Base texture
    base: PathBuf,

    /// Overlay texture (same dimensions as the base)
    overlay: PathBuf,

    /// Output texture
    #[arg(short, long)]
    output: PathBuf,
}

#[derive(Args)]
struct VariantsArgs {
    /// Input directory: one subdirectory per item, PNG textures inside
    input_dir: PathBuf,

    /// Output directory
    #[arg(short, long)]
    output_dir: PathBuf,

    /// Palette file (YAML); builtin ten-color palette when omitted
    #[arg(short, long)]
    palette: Option<PathBuf>,

    /// Overlay file name looked up next to each base texture
    #[arg(long, default_value = "Overlay.png")]
    overlay_name: String,
}

#[derive(Args)]
struct PaletteArgs {
    /// Palette file (YAML); shows the builtin palette when omitted
    file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Commands::Recolor(args) => commands::recolor::run(args, cli.verbose),
        Commands::Overlay(args) => commands::overlay::run(args, cli.verbose),
        Commands::Variants(args) => commands::variants::run(args, cli.verbose),
        Commands::Palette(args) => commands::palette::run(args),
    }
}
