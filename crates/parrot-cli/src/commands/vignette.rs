use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use parrot_core::io::image_io::{load_raster, save_rgba_png};
use parrot_core::vignette::oval_vignette;

#[derive(Args)]
pub struct VignetteArgs {
    /// Input face crop (must already be the fixed crop size)
    pub file: PathBuf,

    /// Output PNG with alpha
    #[arg(short, long, default_value = "oval.png")]
    pub output: PathBuf,
}

pub fn run(args: &VignetteArgs) -> Result<()> {
    let image = load_raster(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;

    let oval = oval_vignette(&image).context("Oval vignette failed")?;

    save_rgba_png(&oval, &args.output)?;
    println!("Saved to {}", args.output.display());

    Ok(())
}
