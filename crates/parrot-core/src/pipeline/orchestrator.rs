use tracing::info;

use crate::animate::assemble_gif;
use crate::compose::{composite_frames, FrameTemplate};
use crate::error::Result;
use crate::face::{crop_to_face, FaceCropConfig, FaceDetector};
use crate::filters::resize::resize_area;
use crate::io::image_io::load_raster;
use crate::raster::Raster;
use crate::segment::segment_foreground;
use crate::vignette::oval_vignette;

use super::config::{AnimationConfig, PipelineConfig};
use super::{AvatarArtifact, CropPath, NoOpReporter, PipelineStage, ProgressReporter};

/// Run the avatar pipeline on an in-memory image.
///
/// Stages: Segmenting -> Cropping -> (CroppedOK | CropFailed->Resizing)
/// -> Vignetting -> Compositing -> Assembling. A face-detection miss is
/// a normal branch, surfaced as [`CropPath::Resized`]; any stage error
/// aborts the run with no partial artifact.
pub fn generate_avatar(
    image: &Raster,
    detector: &dyn FaceDetector,
    template: &FrameTemplate,
    face_config: &FaceCropConfig,
    animation: &AnimationConfig,
    reporter: &dyn ProgressReporter,
) -> Result<AvatarArtifact> {
    reporter.begin_stage(PipelineStage::Segmenting, None);
    let masked = segment_foreground(image)?;
    reporter.finish_stage();
    info!(
        width = masked.width(),
        height = masked.height(),
        "Foreground segmented"
    );

    reporter.begin_stage(PipelineStage::Cropping, None);
    let cropped = crop_to_face(&masked.color, detector, face_config);
    reporter.finish_stage();

    // The fallback resizes the raw input, not the segmented composite.
    let (face_rgb, crop_path) = match cropped {
        Some(face) => {
            info!("Face crop succeeded");
            (face, CropPath::Face)
        }
        None => {
            info!("No face detected, using fallback resize");
            reporter.begin_stage(PipelineStage::Resizing, None);
            let resized = resize_area(image, face_config.width, face_config.height);
            reporter.finish_stage();
            (resized, CropPath::Resized)
        }
    };

    reporter.begin_stage(PipelineStage::Vignetting, None);
    let face = oval_vignette(&face_rgb)?;
    reporter.finish_stage();

    reporter.begin_stage(PipelineStage::Compositing, Some(template.frames().len()));
    let frames = composite_frames(&face, template);
    reporter.advance(frames.len());
    reporter.finish_stage();

    reporter.begin_stage(PipelineStage::Assembling, None);
    let gif = assemble_gif(&frames, animation.frame_delay_ms)?;
    reporter.finish_stage();
    info!(
        frames = frames.len(),
        bytes = gif.len(),
        path = ?crop_path,
        "Animation assembled"
    );

    Ok(AvatarArtifact { gif, crop_path })
}

/// Run the full pipeline from a config with a progress reporter: load
/// the input image and template assets, generate the avatar, write the
/// GIF to the configured output path.
pub fn run_pipeline_reported(
    config: &PipelineConfig,
    detector: &dyn FaceDetector,
    reporter: &dyn ProgressReporter,
) -> Result<AvatarArtifact> {
    let image = load_raster(&config.input)?;
    info!(
        width = image.width(),
        height = image.height(),
        template = %config.template,
        "Loaded input image"
    );
    let template = FrameTemplate::load(&config.assets_dir, config.template)?;

    let artifact = generate_avatar(
        &image,
        detector,
        &template,
        &config.face,
        &config.animation,
        reporter,
    )?;

    reporter.begin_stage(PipelineStage::Writing, None);
    std::fs::write(&config.output, &artifact.gif)?;
    reporter.finish_stage();
    info!(output = %config.output.display(), "Animation written");

    Ok(artifact)
}

/// Run the full pipeline without progress reporting.
pub fn run_pipeline(config: &PipelineConfig, detector: &dyn FaceDetector) -> Result<AvatarArtifact> {
    run_pipeline_reported(config, detector, &NoOpReporter)
}
