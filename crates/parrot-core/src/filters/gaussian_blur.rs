use ndarray::Array2;
use rayon::prelude::*;

use crate::consts::PARALLEL_PIXEL_THRESHOLD;

/// Apply Gaussian blur with a fixed odd kernel size using separable 1D
/// convolution. Sigma is derived from the kernel size as
/// `0.3 * ((size - 1) / 2 - 1) + 0.8`, so a kernel size alone fully
/// determines the blur.
///
/// Out-of-bounds taps clamp to the nearest edge pixel.
pub fn gaussian_blur_array(data: &Array2<f32>, kernel_size: usize) -> Array2<f32> {
    let kernel = make_gaussian_kernel(kernel_size);
    let row_pass = convolve(data, &kernel, Axis2::Row);
    convolve(&row_pass, &kernel, Axis2::Col)
}

fn make_gaussian_kernel(size: usize) -> Vec<f32> {
    assert!(size % 2 == 1, "Gaussian kernel size must be odd");
    let radius = size / 2;
    let sigma = 0.3 * (radius as f32 - 1.0) + 0.8;
    let s2 = 2.0 * sigma * sigma;

    let mut kernel = vec![0.0f32; size];
    let mut sum = 0.0f32;
    for (i, k) in kernel.iter_mut().enumerate() {
        let x = i as f32 - radius as f32;
        *k = (-x * x / s2).exp();
        sum += *k;
    }
    for v in &mut kernel {
        *v /= sum;
    }
    kernel
}

enum Axis2 {
    Row,
    Col,
}

fn convolve(data: &Array2<f32>, kernel: &[f32], axis: Axis2) -> Array2<f32> {
    let (h, w) = data.dim();
    let radius = kernel.len() / 2;

    let pixel = |row: usize, col: usize| -> f32 {
        let mut sum = 0.0f32;
        for (ki, &kv) in kernel.iter().enumerate() {
            let offset = ki as isize - radius as isize;
            let (src_row, src_col) = match axis {
                Axis2::Row => (
                    row,
                    (col as isize + offset).clamp(0, w as isize - 1) as usize,
                ),
                Axis2::Col => (
                    (row as isize + offset).clamp(0, h as isize - 1) as usize,
                    col,
                ),
            };
            sum += data[[src_row, src_col]] * kv;
        }
        sum
    };

    let mut result = Array2::<f32>::zeros((h, w));
    if h * w >= PARALLEL_PIXEL_THRESHOLD {
        let rows: Vec<Vec<f32>> = (0..h)
            .into_par_iter()
            .map(|row| (0..w).map(|col| pixel(row, col)).collect())
            .collect();
        for (row, row_data) in rows.into_iter().enumerate() {
            for (col, val) in row_data.into_iter().enumerate() {
                result[[row, col]] = val;
            }
        }
    } else {
        for row in 0..h {
            for col in 0..w {
                result[[row, col]] = pixel(row, col);
            }
        }
    }
    result
}
