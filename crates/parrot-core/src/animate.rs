use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame};

use crate::consts::MIN_ANIMATION_FRAMES;
use crate::error::{ParrotError, Result};
use crate::io::image_io::to_rgb_image;
use crate::raster::Raster;

/// Encode frames into a looping GIF, in ascending index order, each
/// displayed for `delay_ms` milliseconds.
///
/// Fewer than [`MIN_ANIMATION_FRAMES`] frames is a precondition
/// violation: a single-frame animation is degenerate and should never
/// occur with a correctly configured template set.
pub fn assemble_gif(frames: &[Raster], delay_ms: u32) -> Result<Vec<u8>> {
    if frames.len() < MIN_ANIMATION_FRAMES {
        return Err(ParrotError::TooFewFrames {
            count: frames.len(),
        });
    }

    let mut bytes = Vec::new();
    {
        let mut encoder = GifEncoder::new(&mut bytes);
        encoder.set_repeat(Repeat::Infinite)?;
        for raster in frames {
            let rgba = image::DynamicImage::ImageRgb8(to_rgb_image(raster)).to_rgba8();
            let frame = Frame::from_parts(rgba, 0, 0, Delay::from_numer_denom_ms(delay_ms, 1));
            encoder.encode_frame(frame)?;
        }
    }

    Ok(bytes)
}
