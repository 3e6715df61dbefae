use approx::assert_abs_diff_eq;
use ndarray::Array2;

use parrot_core::filters::gaussian_blur::gaussian_blur_array;
use parrot_core::filters::resize::{resize_area, resize_plane};
use parrot_core::raster::Raster;

// ---------------------------------------------------------------------------
// gaussian_blur_array
// ---------------------------------------------------------------------------

#[test]
fn test_blur_constant_field_unchanged() {
    let data = Array2::from_elem((16, 16), 0.5f32);
    let blurred = gaussian_blur_array(&data, 21);
    for v in blurred.iter() {
        assert_abs_diff_eq!(*v, 0.5, epsilon = 1e-5);
    }
}

#[test]
fn test_blur_preserves_total_mass() {
    // Delta in the middle of a field large enough that no clamping occurs.
    let mut data = Array2::<f32>::zeros((41, 41));
    data[[20, 20]] = 1.0;
    let blurred = gaussian_blur_array(&data, 21);
    let sum: f32 = blurred.iter().sum();
    assert_abs_diff_eq!(sum, 1.0, epsilon = 1e-4);
}

#[test]
fn test_blur_is_symmetric_around_delta() {
    let mut data = Array2::<f32>::zeros((41, 41));
    data[[20, 20]] = 1.0;
    let blurred = gaussian_blur_array(&data, 21);
    assert_abs_diff_eq!(blurred[[20, 15]], blurred[[20, 25]], epsilon = 1e-6);
    assert_abs_diff_eq!(blurred[[15, 20]], blurred[[25, 20]], epsilon = 1e-6);
    assert!(blurred[[20, 20]] > blurred[[20, 19]]);
}

#[test]
#[should_panic(expected = "odd")]
fn test_blur_rejects_even_kernel() {
    let data = Array2::<f32>::zeros((4, 4));
    let _ = gaussian_blur_array(&data, 20);
}

// ---------------------------------------------------------------------------
// resize
// ---------------------------------------------------------------------------

#[test]
fn test_resize_halving_averages_blocks() {
    let data = Array2::from_shape_fn((4, 4), |(row, col)| (row * 4 + col) as f32);
    let resized = resize_plane(&data, 2, 2);
    // Each output pixel is the mean of its 2x2 source block.
    assert_abs_diff_eq!(resized[[0, 0]], (0.0 + 1.0 + 4.0 + 5.0) / 4.0, epsilon = 1e-5);
    assert_abs_diff_eq!(resized[[0, 1]], (2.0 + 3.0 + 6.0 + 7.0) / 4.0, epsilon = 1e-5);
    assert_abs_diff_eq!(resized[[1, 0]], (8.0 + 9.0 + 12.0 + 13.0) / 4.0, epsilon = 1e-5);
    assert_abs_diff_eq!(resized[[1, 1]], (10.0 + 11.0 + 14.0 + 15.0) / 4.0, epsilon = 1e-5);
}

#[test]
fn test_resize_identity() {
    let data = Array2::from_shape_fn((5, 7), |(row, col)| (row + col) as f32 * 0.1);
    let resized = resize_plane(&data, 7, 5);
    for (a, b) in data.iter().zip(resized.iter()) {
        assert_abs_diff_eq!(*a, *b, epsilon = 1e-5);
    }
}

#[test]
fn test_resize_upscale_constant() {
    let data = Array2::from_elem((2, 2), 0.3f32);
    let resized = resize_plane(&data, 5, 4);
    assert_eq!(resized.dim(), (4, 5));
    for v in resized.iter() {
        assert_abs_diff_eq!(*v, 0.3, epsilon = 1e-5);
    }
}

#[test]
fn test_resize_raster_keeps_channels_independent() {
    let raster = Raster::filled(8, 8, [1.0, 0.5, 0.0]);
    let resized = resize_area(&raster, 3, 3);
    assert_eq!(resized.width(), 3);
    assert_eq!(resized.height(), 3);
    assert_abs_diff_eq!(resized.red[[1, 1]], 1.0, epsilon = 1e-5);
    assert_abs_diff_eq!(resized.green[[1, 1]], 0.5, epsilon = 1e-5);
    assert_abs_diff_eq!(resized.blue[[1, 1]], 0.0, epsilon = 1e-5);
}
