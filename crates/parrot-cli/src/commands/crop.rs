use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use parrot_core::face::{crop_to_face, FaceCropConfig, FaceDetector, NullDetector, RustfaceDetector};
use parrot_core::filters::resize::resize_area;
use parrot_core::io::image_io::{load_raster, save_png};

#[derive(Args)]
pub struct CropArgs {
    /// Input photograph
    pub file: PathBuf,

    /// SeetaFace detection model; without it the fallback resize runs
    #[arg(long)]
    pub model: Option<PathBuf>,

    /// Output width in pixels
    #[arg(long, default_value = "70")]
    pub width: usize,

    /// Output height in pixels
    #[arg(long, default_value = "90")]
    pub height: usize,

    /// Percentage of the output height the face should occupy
    #[arg(long, default_value = "90")]
    pub face_percent: f32,

    /// Output file path
    #[arg(short, long, default_value = "cropped.png")]
    pub output: PathBuf,
}

pub fn run(args: &CropArgs) -> Result<()> {
    let image = load_raster(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;

    let detector: Box<dyn FaceDetector> = match &args.model {
        Some(path) => Box::new(
            RustfaceDetector::from_model_path(path)
                .with_context(|| format!("Failed to load face model {}", path.display()))?,
        ),
        None => {
            println!("No face model given, skipping detection");
            Box::new(NullDetector)
        }
    };

    let config = FaceCropConfig {
        width: args.width,
        height: args.height,
        face_percent: args.face_percent,
    };

    let cropped = match crop_to_face(&image, detector.as_ref(), &config) {
        Some(face) => {
            println!("Face found, cropped to {}x{}", args.width, args.height);
            face
        }
        None => {
            println!("No face detected, resizing to {}x{}", args.width, args.height);
            resize_area(&image, args.width, args.height)
        }
    };

    save_png(&cropped, &args.output)?;
    println!("Saved to {}", args.output.display());

    Ok(())
}
