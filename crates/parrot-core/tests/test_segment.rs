mod common;

use approx::assert_abs_diff_eq;
use parrot_core::error::ParrotError;
use parrot_core::segment::edge::canny;
use parrot_core::segment::segment_foreground;

use common::{solid, white_rect_on_black};

#[test]
fn test_canny_finds_step_edges() {
    let image = white_rect_on_black(40, 40, 10, 30, 10, 30);
    let edges = canny(&image.luminance(), 10.0, 200.0);

    // Edges cluster around the intensity step, none in the flat regions.
    let near_boundary = edges
        .indexed_iter()
        .filter(|(_, &v)| v)
        .all(|((row, col), _)| {
            let near_row = (9..=11).contains(&row) || (28..=30).contains(&row);
            let near_col = (9..=11).contains(&col) || (28..=30).contains(&col);
            near_row || near_col
        });
    assert!(near_boundary);
    assert!(edges.iter().any(|&v| v), "step edge must be detected");
    assert!(!edges[[20, 20]], "flat interior is not an edge");
    assert!(!edges[[2, 2]], "flat exterior is not an edge");
}

#[test]
fn test_canny_on_uniform_image_is_empty() {
    let image = solid(32, 32, [0.5, 0.5, 0.5]);
    let edges = canny(&image.luminance(), 10.0, 200.0);
    assert!(edges.iter().all(|&v| !v));
}

#[test]
fn test_segment_mask_matches_dimensions_and_is_nonempty() {
    let image = white_rect_on_black(60, 60, 15, 45, 15, 45);
    let masked = segment_foreground(&image).unwrap();

    assert_eq!(masked.width(), 60);
    assert_eq!(masked.height(), 60);
    assert!(masked.alpha.iter().any(|&v| v > 0.0), "mask must be non-empty");
}

#[test]
fn test_segment_keeps_foreground_and_fills_background() {
    let image = white_rect_on_black(60, 60, 15, 45, 15, 45);
    let masked = segment_foreground(&image).unwrap();

    // Raw mask as alpha: opaque on the subject, transparent well outside.
    assert_eq!(masked.alpha[[30, 30]], 1.0);
    assert_eq!(masked.alpha[[2, 2]], 0.0);

    // Color planes: original white inside, background blue far outside
    // (beyond the smoothed mask's blur ramp).
    assert_abs_diff_eq!(masked.color.red[[30, 30]], 1.0, epsilon = 1e-3);
    assert_abs_diff_eq!(masked.color.green[[30, 30]], 1.0, epsilon = 1e-3);
    assert_abs_diff_eq!(masked.color.red[[2, 2]], 0.0, epsilon = 1e-3);
    assert_abs_diff_eq!(masked.color.blue[[2, 2]], 1.0, epsilon = 1e-3);
}

#[test]
fn test_segment_uniform_image_is_fatal() {
    let image = solid(48, 48, [0.5, 0.5, 0.5]);
    let err = segment_foreground(&image).unwrap_err();
    assert!(matches!(err, ParrotError::NoForeground));
}

#[test]
fn test_segment_picks_the_larger_of_two_subjects() {
    // Two separated rectangles; the mask must cover the bigger one.
    let mut image = white_rect_on_black(80, 80, 10, 60, 10, 50);
    for row in 65..75 {
        for col in 65..75 {
            image.red[[row, col]] = 1.0;
            image.green[[row, col]] = 1.0;
            image.blue[[row, col]] = 1.0;
        }
    }
    let masked = segment_foreground(&image).unwrap();
    assert_eq!(masked.alpha[[35, 30]], 1.0, "large subject is selected");
    assert_eq!(masked.alpha[[70, 70]], 0.0, "small subject is not");
}
