use ndarray::Array2;

use crate::consts::{FACE_HEIGHT, FACE_WIDTH, OVAL_VERTICAL_COMPRESSION};
use crate::error::{ParrotError, Result};
use crate::raster::{Raster, RasterRgba};

/// Vignette a face crop into an oval: pixels inside the ellipse keep
/// their color with full alpha, pixels outside are zeroed with zero
/// alpha. The alpha plane is binary, unlike the segmenter's smoothed
/// mask.
///
/// The ellipse is centered on the crop with radius
/// `min(cx, cy, w - cx, h - cy)` and the vertical coordinate compressed
/// by [`OVAL_VERTICAL_COMPRESSION`] before the distance test. The
/// compressed term offsets against the horizontal center, matching the
/// shipped arithmetic this mask must stay visually identical to (see
/// DESIGN.md).
///
/// The input must already be the fixed crop size.
pub fn oval_vignette(image: &Raster) -> Result<RasterRgba> {
    let (h, w) = (image.height(), image.width());
    if w != FACE_WIDTH || h != FACE_HEIGHT {
        return Err(ParrotError::InvalidDimensions {
            width: w,
            height: h,
            expected_width: FACE_WIDTH,
            expected_height: FACE_HEIGHT,
        });
    }

    let cx = (w / 2) as f32;
    let cy = (h / 2) as f32;
    let radius = cx.min(cy).min(w as f32 - cx).min(h as f32 - cy);

    let mut red = Array2::<f32>::zeros((h, w));
    let mut green = Array2::<f32>::zeros((h, w));
    let mut blue = Array2::<f32>::zeros((h, w));
    let mut alpha = Array2::<f32>::zeros((h, w));

    for row in 0..h {
        for col in 0..w {
            let dx = col as f32 - cx;
            let dy = row as f32 / OVAL_VERTICAL_COMPRESSION - cx;
            if (dx * dx + dy * dy).sqrt() <= radius {
                red[[row, col]] = image.red[[row, col]];
                green[[row, col]] = image.green[[row, col]];
                blue[[row, col]] = image.blue[[row, col]];
                alpha[[row, col]] = 1.0;
            }
        }
    }

    Ok(RasterRgba::new(Raster::new(red, green, blue), alpha))
}
