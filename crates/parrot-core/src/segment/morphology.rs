use ndarray::Array2;

/// Binary dilation with a 3x3 square structuring element, repeated
/// `iterations` times. A pixel becomes true if any pixel in its 3x3
/// neighborhood is true.
pub fn dilate(mask: &Array2<bool>, iterations: usize) -> Array2<bool> {
    repeat(mask, iterations, |count, _center| count > 0)
}

/// Binary erosion with a 3x3 square structuring element, repeated
/// `iterations` times. A pixel stays true only if all pixels in its 3x3
/// neighborhood are true; out-of-bounds neighbors count as false.
pub fn erode(mask: &Array2<bool>, iterations: usize) -> Array2<bool> {
    repeat(mask, iterations, |count, center| center && count == 9)
}

fn repeat(
    mask: &Array2<bool>,
    iterations: usize,
    keep: impl Fn(usize, bool) -> bool,
) -> Array2<bool> {
    let mut current = mask.clone();
    for _ in 0..iterations {
        current = pass(&current, &keep);
    }
    current
}

/// One structuring-element pass. `keep` receives the count of true pixels
/// in the 3x3 neighborhood (out-of-bounds counted false) and the center
/// value.
fn pass(mask: &Array2<bool>, keep: &impl Fn(usize, bool) -> bool) -> Array2<bool> {
    let (h, w) = mask.dim();
    let mut result = Array2::from_elem((h, w), false);

    for row in 0..h {
        for col in 0..w {
            let mut count = 0;
            for dr in -1..=1_i32 {
                for dc in -1..=1_i32 {
                    let nr = row as i32 + dr;
                    let nc = col as i32 + dc;
                    if nr >= 0
                        && nr < h as i32
                        && nc >= 0
                        && nc < w as i32
                        && mask[[nr as usize, nc as usize]]
                    {
                        count += 1;
                    }
                }
            }
            result[[row, col]] = keep(count, mask[[row, col]]);
        }
    }

    result
}
