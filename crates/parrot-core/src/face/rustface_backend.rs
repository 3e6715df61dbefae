use std::path::Path;

use crate::consts::{
    DETECT_MIN_FACE_SIZE, DETECT_PYRAMID_SCALE, DETECT_SCORE_THRESHOLD, DETECT_WINDOW_STEP,
};
use crate::error::{ParrotError, Result};

use super::{FaceDetector, FaceRegion};

/// Face detector backed by the `rustface` crate (SeetaFace engine).
///
/// The model is loaded once from a file path; detection builds a fresh
/// engine per call, keeping the detector shareable across threads.
pub struct RustfaceDetector {
    model: rustface::Model,
}

impl RustfaceDetector {
    /// Load a SeetaFace frontal-face model from disk.
    pub fn from_model_path(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let model = rustface::read_model(std::io::BufReader::new(file))
            .map_err(|e| ParrotError::FaceModel(format!("{}: {e}", path.display())))?;
        Ok(Self { model })
    }
}

impl FaceDetector for RustfaceDetector {
    fn detect(&self, gray: &[u8], width: u32, height: u32) -> Vec<FaceRegion> {
        let mut detector = rustface::create_detector_with_model(self.model.clone());
        detector.set_min_face_size(DETECT_MIN_FACE_SIZE);
        detector.set_score_thresh(DETECT_SCORE_THRESHOLD);
        detector.set_pyramid_scale_factor(DETECT_PYRAMID_SCALE);
        detector.set_slide_window_step(DETECT_WINDOW_STEP.0, DETECT_WINDOW_STEP.1);

        let faces = detector.detect(&rustface::ImageData::new(gray, width, height));

        faces
            .iter()
            .map(|face| {
                let bbox = face.bbox();
                FaceRegion {
                    x: bbox.x() as f64,
                    y: bbox.y() as f64,
                    width: bbox.width() as f64,
                    height: bbox.height() as f64,
                    confidence: face.score(),
                }
            })
            .collect()
    }
}
