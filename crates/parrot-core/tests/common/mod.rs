use ndarray::Array2;

use parrot_core::compose::FrameTemplate;
use parrot_core::consts::{FACE_POSITIONS, FRAME_COUNT};
use parrot_core::face::{FaceDetector, FaceRegion};
use parrot_core::raster::{Raster, RasterRgba};

/// Solid-color raster.
pub fn solid(height: usize, width: usize, rgb: [f32; 3]) -> Raster {
    Raster::filled(height, width, rgb)
}

/// Black raster with a white axis-aligned rectangle, rows `top..bottom`,
/// cols `left..right`.
pub fn white_rect_on_black(
    height: usize,
    width: usize,
    top: usize,
    bottom: usize,
    left: usize,
    right: usize,
) -> Raster {
    let mut plane = Array2::<f32>::zeros((height, width));
    for row in top..bottom {
        for col in left..right {
            plane[[row, col]] = 1.0;
        }
    }
    Raster::new(plane.clone(), plane.clone(), plane)
}

/// Fully opaque RGBA raster of one color.
pub fn solid_rgba(height: usize, width: usize, rgb: [f32; 3]) -> RasterRgba {
    RasterRgba::new(solid(height, width, rgb), Array2::from_elem((height, width), 1.0))
}

/// Detector that reports a fixed list of regions regardless of input.
pub struct FixedDetector {
    pub regions: Vec<FaceRegion>,
}

impl FixedDetector {
    pub fn single(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            regions: vec![FaceRegion {
                x,
                y,
                width,
                height,
                confidence: 10.0,
            }],
        }
    }
}

impl FaceDetector for FixedDetector {
    fn detect(&self, _gray: &[u8], _width: u32, _height: u32) -> Vec<FaceRegion> {
        self.regions.clone()
    }
}

/// Template of six identical solid frames at the built-in positions.
pub fn solid_template(height: usize, width: usize, rgb: [f32; 3]) -> FrameTemplate {
    let frames = (0..FRAME_COUNT).map(|_| solid(height, width, rgb)).collect();
    FrameTemplate::from_parts(frames, FACE_POSITIONS).expect("six frames")
}
