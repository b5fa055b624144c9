use crate::{geo::distance::DistanceMode, node::Point};

/// Dense `n x n` table of pairwise distances, built once and read-only afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceMatrix {
    n: usize,
    data: Vec<f64>,
}

impl DistanceMatrix {
    pub fn build(points: &[Point], mode: DistanceMode) -> Self {
        let n = points.len();
        let mut data = vec![0.0; n * n];
        for (i, &a) in points.iter().enumerate() {
            for (j, &b) in points.iter().enumerate() {
                if i != j {
                    data[i * n + j] = mode.distance(a, b);
                }
            }
        }
        log::debug!("matrix: built n={n} mode={mode}");
        Self { n, data }
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.n + j]
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Tour-length delta of routing `from -> via -> to` instead of `from -> to`.
    #[inline]
    pub fn insertion_cost(&self, from: usize, via: usize, to: usize) -> f64 {
        self.get(from, via) + self.get(via, to) - self.get(from, to)
    }
}
