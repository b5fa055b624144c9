use crate::{Error, Result, geometry::TourGeometry, node::Point};

/// Seed cycle used when every triple is degenerate.
const FALLBACK_TRIANGLE: [usize; 3] = [0, 1, 2];

/// Largest-area triangle over the planar coordinates, found by exhaustive search.
///
/// Only a strictly larger area replaces the current best, so among equal areas the
/// first triple in `i < j < k` order wins. Geographic inputs are searched on their raw
/// coordinates as well; the seed only has to anchor the hull, not be geodesically exact.
pub(crate) fn largest_triangle(points: &[Point]) -> Result<([usize; 3], f64)> {
    let n = points.len();
    Error::ensure_cycle_points(n)?;

    let mut best = FALLBACK_TRIANGLE;
    let mut best_area = 0.0;
    for i in 0..n {
        for j in (i + 1)..n {
            for k in (j + 1)..n {
                let area = TourGeometry::triangle_area(points[i], points[j], points[k]);
                if area > best_area {
                    best_area = area;
                    best = [i, j, k];
                }
            }
        }
    }

    log::debug!("seed: triangle={best:?} area={best_area}");
    Ok((best, best_area))
}
