use crate::raster::{Raster, RasterRgba};

use super::blend::overlay_blend;
use super::template::FrameTemplate;

/// Alpha-blend the vignetted face onto each template frame at its fixed
/// offset. Output is one flattened RGB raster per frame, in template
/// order.
///
/// A face placed fully outside a frame leaves that frame untouched (the
/// blend primitive's empty-overlap no-op).
pub fn composite_frames(face: &RasterRgba, template: &FrameTemplate) -> Vec<Raster> {
    template
        .iter()
        .map(|(frame, (x, y))| {
            let mut result = frame.clone();
            overlay_blend(&mut result, &face.color, &face.alpha, x, y);
            result
        })
        .collect()
}
