pub mod config;
mod orchestrator;

pub use orchestrator::{generate_avatar, run_pipeline, run_pipeline_reported};

/// Pipeline processing stage, used for progress reporting.
#[derive(Clone, Copy, Debug)]
pub enum PipelineStage {
    Segmenting,
    Cropping,
    Resizing,
    Vignetting,
    Compositing,
    Assembling,
    Writing,
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Segmenting => write!(f, "Segmenting foreground"),
            Self::Cropping => write!(f, "Cropping to face"),
            Self::Resizing => write!(f, "Resizing (no face)"),
            Self::Vignetting => write!(f, "Applying oval vignette"),
            Self::Compositing => write!(f, "Compositing frames"),
            Self::Assembling => write!(f, "Assembling animation"),
            Self::Writing => write!(f, "Writing output"),
        }
    }
}

/// Which crop path produced the face raster.
///
/// `Resized` is the expected fallback when face detection finds nothing;
/// it is not a failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CropPath {
    Face,
    Resized,
}

/// The finished animation: encoded GIF bytes plus the crop path taken.
#[derive(Clone, Debug)]
pub struct AvatarArtifact {
    pub gif: Vec<u8>,
    pub crop_path: CropPath,
}

/// Progress reporting for the pipeline.
///
/// Implementors can drive progress bars or logging. All methods have
/// default no-op implementations.
pub trait ProgressReporter {
    /// A new pipeline stage has started. `total_items` is the number of
    /// work items in this stage (e.g. frame count), if known.
    fn begin_stage(&self, _stage: PipelineStage, _total_items: Option<usize>) {}

    /// One work item within the current stage has completed.
    fn advance(&self, _items_done: usize) {}

    /// The current stage is finished.
    fn finish_stage(&self) {}
}

/// No-op progress reporter, used when `run_pipeline` delegates.
pub(super) struct NoOpReporter;
impl ProgressReporter for NoOpReporter {}
