use ndarray::Array2;

use crate::raster::Raster;

/// Alpha-blend `overlay` onto `base` with its top-left corner at
/// (x, y); offsets may be negative. `alpha` must have the overlay's
/// shape, with values in [0.0, 1.0].
///
/// Only the overlap rectangle between the overlay and the base canvas
/// is touched: `base = alpha * overlay + (1 - alpha) * base` per pixel
/// and channel. An empty overlap in either axis is a no-op.
pub fn overlay_blend(base: &mut Raster, overlay: &Raster, alpha: &Array2<f32>, x: i64, y: i64) {
    debug_assert_eq!(alpha.dim(), (overlay.height(), overlay.width()));

    let (base_h, base_w) = (base.height() as i64, base.width() as i64);
    let (over_h, over_w) = (overlay.height() as i64, overlay.width() as i64);

    // Destination ranges on the base canvas, clamped.
    let y1 = y.max(0);
    let y2 = (y + over_h).min(base_h);
    let x1 = x.max(0);
    let x2 = (x + over_w).min(base_w);
    if y1 >= y2 || x1 >= x2 {
        return;
    }

    // Matching source ranges on the overlay.
    let oy = (y1 - y) as usize;
    let ox = (x1 - x) as usize;

    for row in 0..(y2 - y1) as usize {
        for col in 0..(x2 - x1) as usize {
            let br = (y1 as usize) + row;
            let bc = (x1 as usize) + col;
            let or = oy + row;
            let oc = ox + col;
            let a = alpha[[or, oc]].clamp(0.0, 1.0);
            base.red[[br, bc]] = a * overlay.red[[or, oc]] + (1.0 - a) * base.red[[br, bc]];
            base.green[[br, bc]] = a * overlay.green[[or, oc]] + (1.0 - a) * base.green[[br, bc]];
            base.blue[[br, bc]] = a * overlay.blue[[or, oc]] + (1.0 - a) * base.blue[[br, bc]];
        }
    }
}
