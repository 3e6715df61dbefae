use std::path::Path;

use image::{ImageFormat, Rgb, Rgba, RgbaImage};
use ndarray::Array2;

use crate::error::Result;
use crate::raster::{Raster, RasterRgba};

/// Load any image the `image` crate can decode into a planar RGB raster.
/// Alpha in the source, if any, is discarded.
pub fn load_raster(path: &Path) -> Result<Raster> {
    let img = image::open(path)?;
    let rgb = img.to_rgb8();
    let (w, h) = rgb.dimensions();

    let mut red = Array2::<f32>::zeros((h as usize, w as usize));
    let mut green = Array2::<f32>::zeros((h as usize, w as usize));
    let mut blue = Array2::<f32>::zeros((h as usize, w as usize));

    for row in 0..h as usize {
        for col in 0..w as usize {
            let pixel = rgb.get_pixel(col as u32, row as u32);
            red[[row, col]] = pixel.0[0] as f32 / 255.0;
            green[[row, col]] = pixel.0[1] as f32 / 255.0;
            blue[[row, col]] = pixel.0[2] as f32 / 255.0;
        }
    }

    Ok(Raster::new(red, green, blue))
}

/// Convert a raster to an 8-bit `image` RGB buffer.
pub fn to_rgb_image(raster: &Raster) -> image::RgbImage {
    let h = raster.height();
    let w = raster.width();

    let mut img = image::RgbImage::new(w as u32, h as u32);
    for row in 0..h {
        for col in 0..w {
            let r = (raster.red[[row, col]].clamp(0.0, 1.0) * 255.0).round() as u8;
            let g = (raster.green[[row, col]].clamp(0.0, 1.0) * 255.0).round() as u8;
            let b = (raster.blue[[row, col]].clamp(0.0, 1.0) * 255.0).round() as u8;
            img.put_pixel(col as u32, row as u32, Rgb([r, g, b]));
        }
    }
    img
}

/// Convert an RGBA raster to an 8-bit `image` RGBA buffer.
pub fn to_rgba_image(rgba: &RasterRgba) -> RgbaImage {
    let h = rgba.height();
    let w = rgba.width();

    let mut img = RgbaImage::new(w as u32, h as u32);
    for row in 0..h {
        for col in 0..w {
            let r = (rgba.color.red[[row, col]].clamp(0.0, 1.0) * 255.0).round() as u8;
            let g = (rgba.color.green[[row, col]].clamp(0.0, 1.0) * 255.0).round() as u8;
            let b = (rgba.color.blue[[row, col]].clamp(0.0, 1.0) * 255.0).round() as u8;
            let a = (rgba.alpha[[row, col]].clamp(0.0, 1.0) * 255.0).round() as u8;
            img.put_pixel(col as u32, row as u32, Rgba([r, g, b, a]));
        }
    }
    img
}

/// Read an 8-bit `image` RGBA buffer back into a planar RGBA raster.
pub fn from_rgba_image(img: &RgbaImage) -> RasterRgba {
    let (w, h) = img.dimensions();

    let mut red = Array2::<f32>::zeros((h as usize, w as usize));
    let mut green = Array2::<f32>::zeros((h as usize, w as usize));
    let mut blue = Array2::<f32>::zeros((h as usize, w as usize));
    let mut alpha = Array2::<f32>::zeros((h as usize, w as usize));

    for row in 0..h as usize {
        for col in 0..w as usize {
            let pixel = img.get_pixel(col as u32, row as u32);
            red[[row, col]] = pixel.0[0] as f32 / 255.0;
            green[[row, col]] = pixel.0[1] as f32 / 255.0;
            blue[[row, col]] = pixel.0[2] as f32 / 255.0;
            alpha[[row, col]] = pixel.0[3] as f32 / 255.0;
        }
    }

    RasterRgba::new(Raster::new(red, green, blue), alpha)
}

/// Save an RGB raster as 8-bit PNG.
pub fn save_png(raster: &Raster, path: &Path) -> Result<()> {
    to_rgb_image(raster).save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Save an RGBA raster as 8-bit PNG with alpha.
pub fn save_rgba_png(rgba: &RasterRgba, path: &Path) -> Result<()> {
    to_rgba_image(rgba).save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Load a PNG with alpha into an RGBA raster. A source without an alpha
/// channel decodes as fully opaque.
pub fn load_rgba_png(path: &Path) -> Result<RasterRgba> {
    let img = image::open(path)?;
    Ok(from_rgba_image(&img.to_rgba8()))
}
