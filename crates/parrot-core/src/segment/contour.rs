use std::collections::VecDeque;

use ndarray::Array2;

/// Clockwise 8-neighborhood direction table used for boundary tracing,
/// as (dx, dy) starting east.
const TRACE_DIRECTIONS: [(i32, i32); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

/// A closed polygon boundary extracted from a binary edge map.
/// Points are (x, y) pixel coordinates in trace order.
#[derive(Clone, Debug)]
pub struct Contour {
    pub points: Vec<(i32, i32)>,
}

impl Contour {
    /// Enclosed area by the shoelace formula, in square pixels.
    pub fn area(&self) -> f64 {
        if self.points.len() < 3 {
            return 0.0;
        }
        let mut twice_area = 0.0_f64;
        for i in 0..self.points.len() {
            let (x0, y0) = self.points[i];
            let (x1, y1) = self.points[(i + 1) % self.points.len()];
            twice_area += x0 as f64 * y1 as f64 - x1 as f64 * y0 as f64;
        }
        (twice_area / 2.0).abs()
    }

    /// True when every turn along the polygon has the same orientation
    /// (cross products of consecutive edges never change sign).
    pub fn is_convex(&self) -> bool {
        if self.points.len() < 4 {
            return true;
        }
        let n = self.points.len();
        let mut sign = 0.0_f64;
        for i in 0..n {
            let (x0, y0) = self.points[i];
            let (x1, y1) = self.points[(i + 1) % n];
            let (x2, y2) = self.points[(i + 2) % n];
            let cross = (x1 - x0) as f64 * (y2 - y1) as f64
                - (y1 - y0) as f64 * (x2 - x1) as f64;
            if cross != 0.0 {
                if sign != 0.0 && cross.signum() != sign {
                    return false;
                }
                sign = cross.signum();
            }
        }
        true
    }
}

/// Extract the outer boundary of every 8-connected region of the binary
/// map, in raster-scan discovery order of the region's topmost-leftmost
/// pixel. That discovery order is the documented tie-break for callers
/// ranking contours by area.
pub fn find_contours(map: &Array2<bool>) -> Vec<Contour> {
    let (h, w) = map.dim();
    let mut visited = Array2::from_elem((h, w), false);
    let mut contours = Vec::new();

    for row in 0..h {
        for col in 0..w {
            if !map[[row, col]] || visited[[row, col]] {
                continue;
            }
            contours.push(trace_boundary(map, (col as i32, row as i32)));
            mark_component(map, &mut visited, row, col);
        }
    }

    contours
}

/// Moore-neighbor boundary tracing, clockwise, starting from a region's
/// topmost-leftmost pixel.
fn trace_boundary(map: &Array2<bool>, start: (i32, i32)) -> Contour {
    let (h, w) = map.dim();
    let filled = |x: i32, y: i32| -> bool {
        x >= 0 && y >= 0 && x < w as i32 && y < h as i32 && map[[y as usize, x as usize]]
    };

    let mut points = vec![start];
    let mut current = start;
    // The start pixel has no filled neighbor above or to its left, so we
    // behave as if we arrived moving east: backtrack points west (index 4).
    let mut backtrack = 4;

    // Each boundary pixel is visited at most a handful of times; the cap
    // only guards against pathological pinch configurations.
    let max_steps = (h * w + 8) * 4;
    for _ in 0..max_steps {
        let mut next = None;
        for i in 0..8 {
            let dir = (backtrack + 1 + i) % 8;
            let (dx, dy) = TRACE_DIRECTIONS[dir];
            let (nx, ny) = (current.0 + dx, current.1 + dy);
            if filled(nx, ny) {
                next = Some(((nx, ny), dir));
                break;
            }
        }

        let Some(((nx, ny), dir)) = next else {
            break; // isolated pixel
        };
        if (nx, ny) == start {
            break; // boundary closed
        }
        points.push((nx, ny));
        current = (nx, ny);
        backtrack = (dir + 4) % 8;
    }

    Contour { points }
}

/// Flood-mark the whole 8-connected region containing (row, col) so that
/// the raster scan does not rediscover it.
fn mark_component(map: &Array2<bool>, visited: &mut Array2<bool>, row: usize, col: usize) {
    let (h, w) = map.dim();
    let mut queue = VecDeque::new();
    visited[[row, col]] = true;
    queue.push_back((row, col));

    while let Some((r, c)) = queue.pop_front() {
        for dr in -1..=1_i32 {
            for dc in -1..=1_i32 {
                let nr = r as i32 + dr;
                let nc = c as i32 + dc;
                if nr < 0 || nr >= h as i32 || nc < 0 || nc >= w as i32 {
                    continue;
                }
                let (nr, nc) = (nr as usize, nc as usize);
                if map[[nr, nc]] && !visited[[nr, nc]] {
                    visited[[nr, nc]] = true;
                    queue.push_back((nr, nc));
                }
            }
        }
    }
}

/// Rasterize a contour as a filled region: the boundary pixels plus
/// everything they enclose, holes included. Returns a mask with 1.0
/// inside and 0.0 outside.
///
/// Implemented as an exterior flood fill from the image border
/// (4-connected, blocked by the 8-connected boundary); the complement is
/// the filled region.
pub fn fill_contour(contour: &Contour, height: usize, width: usize) -> Array2<f32> {
    let mut boundary = Array2::from_elem((height, width), false);
    for &(x, y) in &contour.points {
        if x >= 0 && y >= 0 && (x as usize) < width && (y as usize) < height {
            boundary[[y as usize, x as usize]] = true;
        }
    }

    let mut exterior = Array2::from_elem((height, width), false);
    let mut queue = VecDeque::new();
    for row in 0..height {
        for col in [0, width.saturating_sub(1)] {
            if !boundary[[row, col]] && !exterior[[row, col]] {
                exterior[[row, col]] = true;
                queue.push_back((row, col));
            }
        }
    }
    for col in 0..width {
        for row in [0, height.saturating_sub(1)] {
            if !boundary[[row, col]] && !exterior[[row, col]] {
                exterior[[row, col]] = true;
                queue.push_back((row, col));
            }
        }
    }

    while let Some((row, col)) = queue.pop_front() {
        for (dr, dc) in [(0, 1), (1, 0), (0, -1i32), (-1i32, 0)] {
            let nr = row as i32 + dr;
            let nc = col as i32 + dc;
            if nr < 0 || nr >= height as i32 || nc < 0 || nc >= width as i32 {
                continue;
            }
            let (nr, nc) = (nr as usize, nc as usize);
            if !boundary[[nr, nc]] && !exterior[[nr, nc]] {
                exterior[[nr, nc]] = true;
                queue.push_back((nr, nc));
            }
        }
    }

    let mut mask = Array2::<f32>::zeros((height, width));
    for row in 0..height {
        for col in 0..width {
            if !exterior[[row, col]] {
                mask[[row, col]] = 1.0;
            }
        }
    }
    mask
}
