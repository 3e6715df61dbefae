use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use parrot_core::io::image_io::{load_raster, save_rgba_png};
use parrot_core::segment::segment_foreground;

#[derive(Args)]
pub struct SegmentArgs {
    /// Input photograph
    pub file: PathBuf,

    /// Output PNG (blended composite with the foreground mask as alpha)
    #[arg(short, long, default_value = "masked.png")]
    pub output: PathBuf,
}

pub fn run(args: &SegmentArgs) -> Result<()> {
    let image = load_raster(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;

    println!("Loaded {}x{} image", image.width(), image.height());

    let masked = segment_foreground(&image).context("Foreground segmentation failed")?;

    save_rgba_png(&masked, &args.output)?;
    println!("Saved to {}", args.output.display());

    Ok(())
}
