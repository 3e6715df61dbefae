use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::compose::TemplateKind;
use crate::consts::FRAME_DELAY_MS;
use crate::face::FaceCropConfig;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Input photograph.
    pub input: PathBuf,
    /// Output animation file.
    pub output: PathBuf,
    /// Directory holding the frame assets, one subdirectory per template
    /// kind.
    pub assets_dir: PathBuf,
    /// Frame theme to composite onto.
    #[serde(default)]
    pub template: TemplateKind,
    /// SeetaFace detection model. Without one, face detection is skipped
    /// and the fallback resizer always runs.
    #[serde(default)]
    pub face_model: Option<PathBuf>,
    #[serde(default)]
    pub face: FaceCropConfig,
    #[serde(default)]
    pub animation: AnimationConfig,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Per-frame display duration in milliseconds.
    #[serde(default = "default_frame_delay_ms")]
    pub frame_delay_ms: u32,
}

fn default_frame_delay_ms() -> u32 {
    FRAME_DELAY_MS
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            frame_delay_ms: FRAME_DELAY_MS,
        }
    }
}
