use ndarray::Array2;

use parrot_core::segment::contour::{fill_contour, find_contours, Contour};
use parrot_core::segment::morphology::{dilate, erode};

fn map_with_rect(
    height: usize,
    width: usize,
    top: usize,
    bottom: usize,
    left: usize,
    right: usize,
) -> Array2<bool> {
    let mut map = Array2::from_elem((height, width), false);
    for row in top..bottom {
        for col in left..right {
            map[[row, col]] = true;
        }
    }
    map
}

// ---------------------------------------------------------------------------
// find_contours
// ---------------------------------------------------------------------------

#[test]
fn test_filled_square_traces_one_contour() {
    let map = map_with_rect(10, 10, 2, 6, 2, 6);
    let contours = find_contours(&map);
    assert_eq!(contours.len(), 1);
    // Boundary polygon through pixel centers of a 4x4 square spans 3x3.
    assert_eq!(contours[0].area(), 9.0);
    assert!(contours[0].is_convex());
}

#[test]
fn test_discovery_order_is_raster_scan() {
    let mut map = map_with_rect(12, 12, 6, 9, 6, 9);
    for row in 1..4 {
        for col in 1..4 {
            map[[row, col]] = true;
        }
    }
    let contours = find_contours(&map);
    assert_eq!(contours.len(), 2);
    // The upper-left square is discovered first.
    assert_eq!(contours[0].points[0], (1, 1));
    assert_eq!(contours[1].points[0], (6, 6));
}

#[test]
fn test_single_pixel_component() {
    let mut map = Array2::from_elem((5, 5), false);
    map[[2, 3]] = true;
    let contours = find_contours(&map);
    assert_eq!(contours.len(), 1);
    assert_eq!(contours[0].points, vec![(3, 2)]);
    assert_eq!(contours[0].area(), 0.0);
}

#[test]
fn test_empty_map_has_no_contours() {
    let map = Array2::from_elem((8, 8), false);
    assert!(find_contours(&map).is_empty());
}

#[test]
fn test_diagonal_pixels_form_one_component() {
    // 8-connectivity joins diagonal neighbors.
    let mut map = Array2::from_elem((6, 6), false);
    map[[1, 1]] = true;
    map[[2, 2]] = true;
    map[[3, 3]] = true;
    assert_eq!(find_contours(&map).len(), 1);
}

// ---------------------------------------------------------------------------
// area / convexity
// ---------------------------------------------------------------------------

#[test]
fn test_shoelace_area_of_explicit_square() {
    let square = Contour {
        points: vec![(0, 0), (4, 0), (4, 4), (0, 4)],
    };
    assert_eq!(square.area(), 16.0);
    assert!(square.is_convex());
}

#[test]
fn test_concave_polygon_is_not_convex() {
    let l_shape = Contour {
        points: vec![(0, 0), (4, 0), (4, 2), (2, 2), (2, 4), (0, 4)],
    };
    assert!(!l_shape.is_convex());
}

// ---------------------------------------------------------------------------
// fill_contour
// ---------------------------------------------------------------------------

#[test]
fn test_fill_recovers_filled_square() {
    let map = map_with_rect(10, 10, 2, 6, 2, 6);
    let contours = find_contours(&map);
    let mask = fill_contour(&contours[0], 10, 10);

    for row in 0..10 {
        for col in 0..10 {
            let inside = (2..6).contains(&row) && (2..6).contains(&col);
            assert_eq!(mask[[row, col]], if inside { 1.0 } else { 0.0 });
        }
    }
}

#[test]
fn test_fill_closes_ring_interior() {
    // A hollow square ring fills to a solid block, holes included.
    let mut map = map_with_rect(12, 12, 2, 9, 2, 9);
    for row in 3..8 {
        for col in 3..8 {
            map[[row, col]] = false;
        }
    }
    let contours = find_contours(&map);
    let mask = fill_contour(&contours[0], 12, 12);
    assert_eq!(mask[[5, 5]], 1.0);
    assert_eq!(mask[[0, 0]], 0.0);
}

// ---------------------------------------------------------------------------
// morphology
// ---------------------------------------------------------------------------

#[test]
fn test_dilate_grows_by_one_per_iteration() {
    let mut map = Array2::from_elem((9, 9), false);
    map[[4, 4]] = true;
    let grown = dilate(&map, 2);
    assert!(grown[[2, 2]]);
    assert!(grown[[6, 6]]);
    assert!(!grown[[1, 4]]);
}

#[test]
fn test_erode_shrinks_by_one_per_iteration() {
    let map = map_with_rect(9, 9, 2, 7, 2, 7);
    let shrunk = erode(&map, 1);
    assert!(shrunk[[4, 4]]);
    assert!(shrunk[[3, 3]]);
    assert!(!shrunk[[2, 2]]);
}

#[test]
fn test_dilate_then_erode_restores_solid_rect() {
    let map = map_with_rect(30, 30, 10, 20, 10, 20);
    let closed = erode(&dilate(&map, 3), 3);
    for row in 0..30 {
        for col in 0..30 {
            let inside = (10..20).contains(&row) && (10..20).contains(&col);
            assert_eq!(closed[[row, col]], inside, "at ({row},{col})");
        }
    }
}
