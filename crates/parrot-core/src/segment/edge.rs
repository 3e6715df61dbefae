use std::collections::VecDeque;

use ndarray::Array2;

/// Canny edge detection on a luminance plane with values in [0.0, 1.0].
///
/// Thresholds are given on the 8-bit intensity scale. Gradients are 3x3
/// Sobel with replicated borders, magnitude is the L1 norm, followed by
/// non-maximum suppression and double-threshold hysteresis over
/// 8-connected neighborhoods.
pub fn canny(gray: &Array2<f32>, low_threshold: f32, high_threshold: f32) -> Array2<bool> {
    let (h, w) = gray.dim();
    if h == 0 || w == 0 {
        return Array2::from_elem((h, w), false);
    }

    let at = |row: isize, col: isize| -> f32 {
        let r = row.clamp(0, h as isize - 1) as usize;
        let c = col.clamp(0, w as isize - 1) as usize;
        // Gradients on the 8-bit scale so the thresholds apply directly.
        gray[[r, c]] * 255.0
    };

    // Sobel gradients and L1 magnitude.
    let mut gx = Array2::<f32>::zeros((h, w));
    let mut gy = Array2::<f32>::zeros((h, w));
    let mut magnitude = Array2::<f32>::zeros((h, w));
    for row in 0..h {
        let r = row as isize;
        for col in 0..w {
            let c = col as isize;
            let dx = (at(r - 1, c + 1) + 2.0 * at(r, c + 1) + at(r + 1, c + 1))
                - (at(r - 1, c - 1) + 2.0 * at(r, c - 1) + at(r + 1, c - 1));
            let dy = (at(r + 1, c - 1) + 2.0 * at(r + 1, c) + at(r + 1, c + 1))
                - (at(r - 1, c - 1) + 2.0 * at(r - 1, c) + at(r - 1, c + 1));
            gx[[row, col]] = dx;
            gy[[row, col]] = dy;
            magnitude[[row, col]] = dx.abs() + dy.abs();
        }
    }

    // Non-maximum suppression along the quantized gradient direction.
    let mut thinned = Array2::<f32>::zeros((h, w));
    for row in 0..h {
        for col in 0..w {
            let mag = magnitude[[row, col]];
            if mag == 0.0 {
                continue;
            }
            let (dr, dc) = quantize_direction(gx[[row, col]], gy[[row, col]]);
            let ahead = neighbor_magnitude(&magnitude, row, col, dr, dc);
            let behind = neighbor_magnitude(&magnitude, row, col, -dr, -dc);
            if mag >= ahead && mag >= behind {
                thinned[[row, col]] = mag;
            }
        }
    }

    // Double threshold, then hysteresis: weak edges survive only when
    // 8-connected to a strong edge.
    let mut edges = Array2::from_elem((h, w), false);
    let mut queue = VecDeque::new();
    for row in 0..h {
        for col in 0..w {
            if thinned[[row, col]] >= high_threshold {
                edges[[row, col]] = true;
                queue.push_back((row, col));
            }
        }
    }

    while let Some((row, col)) = queue.pop_front() {
        for dr in -1..=1_i32 {
            for dc in -1..=1_i32 {
                if dr == 0 && dc == 0 {
                    continue;
                }
                let nr = row as i32 + dr;
                let nc = col as i32 + dc;
                if nr < 0 || nr >= h as i32 || nc < 0 || nc >= w as i32 {
                    continue;
                }
                let (nr, nc) = (nr as usize, nc as usize);
                if !edges[[nr, nc]] && thinned[[nr, nc]] >= low_threshold {
                    edges[[nr, nc]] = true;
                    queue.push_back((nr, nc));
                }
            }
        }
    }

    edges
}

/// Quantize a gradient vector to one of four sampling directions
/// (horizontal, vertical, and the two diagonals), returned as a
/// (row, col) step.
fn quantize_direction(gx: f32, gy: f32) -> (i32, i32) {
    let angle = gy.atan2(gx).to_degrees();
    let angle = if angle < 0.0 { angle + 180.0 } else { angle };
    if !(22.5..157.5).contains(&angle) {
        (0, 1)
    } else if angle < 67.5 {
        (1, 1)
    } else if angle < 112.5 {
        (1, 0)
    } else {
        (1, -1)
    }
}

fn neighbor_magnitude(magnitude: &Array2<f32>, row: usize, col: usize, dr: i32, dc: i32) -> f32 {
    let (h, w) = magnitude.dim();
    let nr = row as i32 + dr;
    let nc = col as i32 + dc;
    if nr < 0 || nr >= h as i32 || nc < 0 || nc >= w as i32 {
        0.0
    } else {
        magnitude[[nr as usize, nc as usize]]
    }
}
