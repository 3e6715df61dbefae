pub mod contour;
pub mod edge;
pub mod morphology;

use ndarray::Array2;
use tracing::debug;

use crate::consts::{
    BACKGROUND_FILL, CANNY_HIGH_THRESHOLD, CANNY_LOW_THRESHOLD, EDGE_CLOSE_ITERATIONS,
    MASK_BLUR_KERNEL_SIZE, MASK_DILATE_ITERATIONS, MASK_ERODE_ITERATIONS,
};
use crate::error::{ParrotError, Result};
use crate::filters::gaussian_blur::gaussian_blur_array;
use crate::raster::{Raster, RasterRgba};

use contour::{fill_contour, find_contours, Contour};
use edge::canny;
use morphology::{dilate, erode};

/// Isolate the dominant foreground subject of an image.
///
/// Pipeline: luminance -> Canny edges -> close gaps (dilate/erode) ->
/// contour extraction -> largest contour -> filled mask -> smoothed mask
/// (dilate x10, erode x10, Gaussian blur) -> blend against the background
/// fill color.
///
/// The returned RGBA raster carries the blended composite in its color
/// planes and the raw (unsmoothed) filled-contour mask as its alpha
/// plane. The two masks are intentionally distinct; see DESIGN.md.
///
/// Fails with [`ParrotError::NoForeground`] when the edge map yields no
/// contours, e.g. for a uniform image.
pub fn segment_foreground(image: &Raster) -> Result<RasterRgba> {
    let (h, w) = (image.height(), image.width());
    let gray = image.luminance();

    let edges = canny(&gray, CANNY_LOW_THRESHOLD, CANNY_HIGH_THRESHOLD);
    let closed = erode(&dilate(&edges, EDGE_CLOSE_ITERATIONS), EDGE_CLOSE_ITERATIONS);

    let contours = find_contours(&closed);
    if contours.is_empty() {
        return Err(ParrotError::NoForeground);
    }
    let largest = select_largest(&contours);
    debug!(
        contours = contours.len(),
        area = largest.area(),
        convex = largest.is_convex(),
        "Selected foreground contour"
    );

    let mask_raw = fill_contour(largest, h, w);
    let mask_smoothed = smooth_mask(&mask_raw);

    // Color planes blend against the background using the smoothed mask;
    // the alpha plane keeps the raw mask.
    let blend = |channel: &Array2<f32>, background: f32| -> Array2<f32> {
        let mut out = Array2::<f32>::zeros((h, w));
        for row in 0..h {
            for col in 0..w {
                let m = mask_smoothed[[row, col]].clamp(0.0, 1.0);
                out[[row, col]] = m * channel[[row, col]] + (1.0 - m) * background;
            }
        }
        out
    };

    let color = Raster::new(
        blend(&image.red, BACKGROUND_FILL[0]),
        blend(&image.green, BACKGROUND_FILL[1]),
        blend(&image.blue, BACKGROUND_FILL[2]),
    );

    Ok(RasterRgba::new(color, mask_raw))
}

/// Rank contours by area, largest first. The sort is stable, so equal
/// areas resolve to raster-scan discovery order.
fn select_largest(contours: &[Contour]) -> &Contour {
    let mut ranked: Vec<(usize, f64)> = contours
        .iter()
        .enumerate()
        .map(|(i, c)| (i, c.area()))
        .collect();
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    &contours[ranked[0].0]
}

/// Soften the hard edge of a filled mask: dilate, erode, then Gaussian
/// blur into an alpha ramp.
fn smooth_mask(mask: &Array2<f32>) -> Array2<f32> {
    let binary = mask.mapv(|v| v > 0.5);
    let opened = erode(&dilate(&binary, MASK_DILATE_ITERATIONS), MASK_ERODE_ITERATIONS);
    let as_f32 = opened.mapv(|b| if b { 1.0f32 } else { 0.0 });
    gaussian_blur_array(&as_f32, MASK_BLUR_KERNEL_SIZE)
}
