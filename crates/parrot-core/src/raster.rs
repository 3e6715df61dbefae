use ndarray::Array2;

use crate::consts::{LUMINANCE_B, LUMINANCE_G, LUMINANCE_R};

/// A planar RGB raster.
/// Channel values are f32 in [0.0, 1.0]; all planes share one shape,
/// row-major (height, width).
#[derive(Clone, Debug)]
pub struct Raster {
    pub red: Array2<f32>,
    pub green: Array2<f32>,
    pub blue: Array2<f32>,
}

impl Raster {
    pub fn new(red: Array2<f32>, green: Array2<f32>, blue: Array2<f32>) -> Self {
        debug_assert_eq!(red.dim(), green.dim());
        debug_assert_eq!(red.dim(), blue.dim());
        Self { red, green, blue }
    }

    /// Solid-color raster of the given shape.
    pub fn filled(height: usize, width: usize, rgb: [f32; 3]) -> Self {
        Self {
            red: Array2::from_elem((height, width), rgb[0]),
            green: Array2::from_elem((height, width), rgb[1]),
            blue: Array2::from_elem((height, width), rgb[2]),
        }
    }

    pub fn width(&self) -> usize {
        self.red.ncols()
    }

    pub fn height(&self) -> usize {
        self.red.nrows()
    }

    /// ITU-R BT.601 luminance plane.
    pub fn luminance(&self) -> Array2<f32> {
        let mut lum = Array2::<f32>::zeros(self.red.dim());
        for row in 0..self.height() {
            for col in 0..self.width() {
                lum[[row, col]] = LUMINANCE_R * self.red[[row, col]]
                    + LUMINANCE_G * self.green[[row, col]]
                    + LUMINANCE_B * self.blue[[row, col]];
            }
        }
        lum
    }

    /// Luminance rescaled to 8-bit, row-major. Used as detector input.
    pub fn luminance_u8(&self) -> Vec<u8> {
        self.luminance()
            .iter()
            .map(|v| (v.clamp(0.0, 1.0) * 255.0).round() as u8)
            .collect()
    }
}

/// An RGB raster with an alpha plane of the same shape.
/// Alpha values are f32 in [0.0, 1.0] (1.0 = fully opaque).
#[derive(Clone, Debug)]
pub struct RasterRgba {
    pub color: Raster,
    pub alpha: Array2<f32>,
}

impl RasterRgba {
    pub fn new(color: Raster, alpha: Array2<f32>) -> Self {
        debug_assert_eq!(color.red.dim(), alpha.dim());
        Self { color, alpha }
    }

    pub fn width(&self) -> usize {
        self.color.width()
    }

    pub fn height(&self) -> usize {
        self.color.height()
    }
}
