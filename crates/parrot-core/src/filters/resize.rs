use ndarray::Array2;

use crate::raster::Raster;

/// Resize a raster to exactly `width` x `height` with a coverage-weighted
/// box filter (area averaging). Deterministic and total: both downscaling
/// and upscaling are handled, and every output pixel is the average of the
/// source area it covers.
pub fn resize_area(raster: &Raster, width: usize, height: usize) -> Raster {
    Raster::new(
        resize_plane(&raster.red, width, height),
        resize_plane(&raster.green, width, height),
        resize_plane(&raster.blue, width, height),
    )
}

/// Area-averaging resize of a single channel plane.
pub fn resize_plane(plane: &Array2<f32>, width: usize, height: usize) -> Array2<f32> {
    assert!(width > 0 && height > 0, "resize target must be non-empty");
    let (src_h, src_w) = plane.dim();
    let scale_y = src_h as f64 / height as f64;
    let scale_x = src_w as f64 / width as f64;

    let mut result = Array2::<f32>::zeros((height, width));
    for out_row in 0..height {
        let y0 = out_row as f64 * scale_y;
        let y1 = ((out_row + 1) as f64 * scale_y).min(src_h as f64);
        for out_col in 0..width {
            let x0 = out_col as f64 * scale_x;
            let x1 = ((out_col + 1) as f64 * scale_x).min(src_w as f64);

            let mut acc = 0.0_f64;
            let mut total = 0.0_f64;
            let mut row = y0.floor() as usize;
            while (row as f64) < y1 && row < src_h {
                // Overlap of the source row [row, row+1) with [y0, y1).
                let wy = (y1.min((row + 1) as f64) - y0.max(row as f64)).max(0.0);
                let mut col = x0.floor() as usize;
                while (col as f64) < x1 && col < src_w {
                    let wx = (x1.min((col + 1) as f64) - x0.max(col as f64)).max(0.0);
                    acc += plane[[row, col]] as f64 * wy * wx;
                    total += wy * wx;
                    col += 1;
                }
                row += 1;
            }

            result[[out_row, out_col]] = if total > 0.0 { (acc / total) as f32 } else { 0.0 };
        }
    }
    result
}
