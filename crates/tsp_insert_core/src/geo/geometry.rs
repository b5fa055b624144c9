use crate::{geo::matrix::DistanceMatrix, node::Point};

pub(crate) struct TourGeometry;

impl TourGeometry {
    /// Absolute shoelace area of the planar triangle `abc`.
    #[inline]
    pub(crate) fn triangle_area(a: Point, b: Point, c: Point) -> f64 {
        (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y)).abs() / 2.0
    }

    /// Length of the closed cycle `tour` (last index connects back to the first).
    pub(crate) fn tour_length(dist: &DistanceMatrix, tour: &[usize]) -> f64 {
        let n = tour.len();
        (0..n).map(|i| dist.get(tour[i], tour[(i + 1) % n])).sum()
    }

    /// Longest real edge of the closed cycle `tour`.
    pub(crate) fn longest_edge(dist: &DistanceMatrix, tour: &[usize]) -> f64 {
        let n = tour.len();
        (0..n)
            .map(|i| dist.get(tour[i], tour[(i + 1) % n]))
            .fold(0.0_f64, f64::max)
    }
}
