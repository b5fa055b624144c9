use std::{fmt, time::Duration};

use crate::{geometry::TourGeometry, matrix::DistanceMatrix};

/// Closed tour produced by the solver.
#[derive(Clone, Debug)]
pub struct Solution {
    /// External ids in visiting order; the first id is repeated at the end.
    pub tour: Vec<i64>,
    /// Running maximum of committed insertion costs and the closing edge.
    pub largest_edge: f64,
    /// Time spent building the distance table and growing the tour.
    pub elapsed: Duration,
    pub metrics: TourMetrics,
}

impl Solution {
    pub fn len(&self) -> usize {
        self.tour.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn report(&self) -> RunReport {
        RunReport {
            largest_edge: self.largest_edge,
            elapsed: self.elapsed,
        }
    }
}

/// Summary line printed after a run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RunReport {
    pub largest_edge: f64,
    pub elapsed: Duration,
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Largest edge: {} / time: {} s",
            self.largest_edge.trunc() as i64,
            self.elapsed.as_secs_f64()
        )
    }
}

/// Real edge statistics of the closed cycle, as opposed to the insertion-cost
/// running maximum carried by [`Solution::largest_edge`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TourMetrics {
    pub total: f64,
    pub longest: f64,
    pub average: f64,
}

impl TourMetrics {
    pub(crate) fn measure(dist: &DistanceMatrix, cycle: &[usize]) -> Self {
        let n = cycle.len();
        if n < 2 {
            log::info!("metrics: n < 2 so there's nothing to report");
            return Self::default();
        }

        let total = TourGeometry::tour_length(dist, cycle);
        let longest = TourGeometry::longest_edge(dist, cycle);
        let average = total / n as f64;

        log::info!("metrics: n={n} total={total:.0} longest={longest:.0} avg={average:.2}");

        Self {
            total,
            longest,
            average,
        }
    }
}
