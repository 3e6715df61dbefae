use ndarray::s;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::{DEFAULT_FACE_PERCENT, FACE_HEIGHT, FACE_WIDTH};
use crate::filters::resize::resize_area;
use crate::raster::Raster;

use super::FaceDetector;

/// Geometry of the face-centered crop.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FaceCropConfig {
    /// Output width in pixels.
    #[serde(default = "default_width")]
    pub width: usize,
    /// Output height in pixels.
    #[serde(default = "default_height")]
    pub height: usize,
    /// Percentage of the output height the face should occupy.
    #[serde(default = "default_face_percent")]
    pub face_percent: f32,
}

fn default_width() -> usize {
    FACE_WIDTH
}
fn default_height() -> usize {
    FACE_HEIGHT
}
fn default_face_percent() -> f32 {
    DEFAULT_FACE_PERCENT
}

impl Default for FaceCropConfig {
    fn default() -> Self {
        Self {
            width: FACE_WIDTH,
            height: FACE_HEIGHT,
            face_percent: DEFAULT_FACE_PERCENT,
        }
    }
}

/// Produce a fixed-size crop centered on the dominant face.
///
/// The crop window is sized so the detected face occupies
/// `face_percent` of the output height, matched to the output aspect
/// ratio, clamped to the image bounds, then resampled to exactly
/// `width` x `height`.
///
/// Returns `None` when no face is detected. That is an expected outcome,
/// not an error; the caller branches to the fallback resizer.
pub fn crop_to_face(
    image: &Raster,
    detector: &dyn FaceDetector,
    config: &FaceCropConfig,
) -> Option<Raster> {
    let (h, w) = (image.height(), image.width());
    let gray = image.luminance_u8();

    let regions = detector.detect(&gray, w as u32, h as u32);
    // Largest face wins; ties resolve to the first reported region.
    let face = regions
        .iter()
        .reduce(|best, r| if r.area() > best.area() { r } else { best })?;
    debug!(
        faces = regions.len(),
        confidence = face.confidence,
        "Face detected"
    );

    let (cx, cy) = face.center();
    let crop_h = (face.height * 100.0 / config.face_percent as f64).max(1.0);
    let crop_w = (crop_h * config.width as f64 / config.height as f64).max(1.0);

    let (x0, crop_w) = clamp_span(cx - crop_w / 2.0, crop_w, w);
    let (y0, crop_h) = clamp_span(cy - crop_h / 2.0, crop_h, h);

    let window = Raster::new(
        image.red.slice(s![y0..y0 + crop_h, x0..x0 + crop_w]).to_owned(),
        image
            .green
            .slice(s![y0..y0 + crop_h, x0..x0 + crop_w])
            .to_owned(),
        image
            .blue
            .slice(s![y0..y0 + crop_h, x0..x0 + crop_w])
            .to_owned(),
    );

    Some(resize_area(&window, config.width, config.height))
}

/// Clamp a 1D span [start, start+len) into [0, limit), shifting it inward
/// and shrinking it only when it exceeds the full extent.
fn clamp_span(start: f64, len: f64, limit: usize) -> (usize, usize) {
    let len = (len.round() as usize).clamp(1, limit);
    let max_start = (limit - len) as f64;
    let start = start.round().clamp(0.0, max_start) as usize;
    (start, len)
}
