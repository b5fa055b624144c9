//! Cheapest-insertion growth of a seed cycle.
//!
//! Candidates live in a min-cost binary heap and are never removed eagerly. A popped
//! candidate whose point is already on the cycle is stale and gets dropped; that
//! visited check is the only validity guard. Recorded positions are not renumbered as
//! the cycle grows, so an old candidate may splice its point next to an edge other
//! than the one its cost was computed for.

use std::{cmp::Ordering, collections::BinaryHeap};

use crate::{Error, Result, matrix::DistanceMatrix};

/// Proposal to insert `point` right after cycle position `after`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct InsertionCandidate {
    pub(crate) point: usize,
    pub(crate) after: usize,
    pub(crate) cost: f64,
    seq: u64,
}

impl Eq for InsertionCandidate {}

impl PartialEq for InsertionCandidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

// BinaryHeap pops the greatest element: lower cost ranks higher, then earlier push.
impl Ord for InsertionCandidate {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for InsertionCandidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct InsertionStats {
    pub(crate) pushed: usize,
    pub(crate) stale: usize,
    pub(crate) committed: usize,
}

/// Result of growing the seed to a full cycle.
#[derive(Clone, Debug)]
pub(crate) struct GrownCycle {
    pub(crate) cycle: Vec<usize>,
    pub(crate) largest_edge: f64,
    /// Cost of every committed candidate, in commit order.
    pub(crate) costs: Vec<f64>,
    pub(crate) stats: InsertionStats,
}

/// Solver context: everything the insertion loop mutates, owned in one place.
pub(crate) struct CheapestInsertion<'a> {
    dist: &'a DistanceMatrix,
    cycle: Vec<usize>,
    visited: Vec<bool>,
    heap: BinaryHeap<InsertionCandidate>,
    largest_edge: f64,
    costs: Vec<f64>,
    next_seq: u64,
    stats: InsertionStats,
}

impl<'a> CheapestInsertion<'a> {
    pub(crate) fn new(dist: &'a DistanceMatrix, seed: [usize; 3]) -> Result<Self> {
        let n = dist.len();
        if let Some(&bad) = seed.iter().find(|&&idx| idx >= n) {
            return Err(Error::invalid_data(format!(
                "seed index {bad} out of range for {n} points"
            )));
        }
        if seed[0] == seed[1] || seed[1] == seed[2] || seed[0] == seed[2] {
            return Err(Error::invalid_data(format!(
                "seed indices must be distinct, got {seed:?}"
            )));
        }

        let mut visited = vec![false; n];
        for &idx in &seed {
            visited[idx] = true;
        }
        let mut cycle = Vec::with_capacity(n);
        cycle.extend_from_slice(&seed);

        let mut solver = Self {
            dist,
            cycle,
            visited,
            heap: BinaryHeap::new(),
            largest_edge: 0.0,
            costs: Vec::with_capacity(n.saturating_sub(seed.len())),
            next_seq: 0,
            stats: InsertionStats::default(),
        };
        solver.seed_candidates();
        Ok(solver)
    }

    /// Every unvisited point against every edge of the seed cycle.
    fn seed_candidates(&mut self) {
        let m = self.cycle.len();
        for point in 0..self.dist.len() {
            if self.visited[point] {
                continue;
            }
            for after in 0..m {
                self.push_candidate(point, after);
            }
        }
    }

    fn push_candidate(&mut self, point: usize, after: usize) {
        let m = self.cycle.len();
        let from = self.cycle[after];
        let to = self.cycle[(after + 1) % m];
        let cost = self.dist.insertion_cost(from, point, to);

        self.heap.push(InsertionCandidate {
            point,
            after,
            cost,
            seq: self.next_seq,
        });
        self.next_seq += 1;
        self.stats.pushed += 1;
    }

    /// Pops until a candidate for a not yet placed point shows up.
    fn pop_valid(&mut self) -> Option<InsertionCandidate> {
        while let Some(candidate) = self.heap.pop() {
            if !self.visited[candidate.point] {
                return Some(candidate);
            }
            self.stats.stale += 1;
        }
        None
    }

    fn commit(&mut self, candidate: InsertionCandidate) {
        self.cycle.insert(candidate.after + 1, candidate.point);
        self.visited[candidate.point] = true;
        self.largest_edge = self.largest_edge.max(candidate.cost);
        self.costs.push(candidate.cost);
        self.stats.committed += 1;

        log::trace!(
            "insertion: commit point={} after={} cost={} cycle_len={}",
            candidate.point,
            candidate.after,
            candidate.cost,
            self.cycle.len()
        );
    }

    /// Offers every unvisited point to the two edges now touching the point at `at`.
    fn reseed_around(&mut self, at: usize) {
        let before = at - 1;
        for point in 0..self.dist.len() {
            if self.visited[point] {
                continue;
            }
            self.push_candidate(point, before);
            self.push_candidate(point, at);
        }
    }

    pub(crate) fn run(mut self) -> Result<GrownCycle> {
        let n = self.dist.len();
        log::debug!(
            "insertion: start n={n} seed={:?} candidates={}",
            self.cycle,
            self.heap.len()
        );

        while self.cycle.len() < n {
            let candidate = self.pop_valid().ok_or_else(|| {
                Error::invalid_data(format!(
                    "candidate queue drained with {} of {n} points placed",
                    self.cycle.len()
                ))
            })?;
            self.commit(candidate);
            self.reseed_around(candidate.after + 1);
        }

        log::debug!(
            "insertion: done n={n} pushed={} stale={} committed={} largest_edge={}",
            self.stats.pushed,
            self.stats.stale,
            self.stats.committed,
            self.largest_edge
        );

        Ok(GrownCycle {
            cycle: self.cycle,
            largest_edge: self.largest_edge,
            costs: self.costs,
            stats: self.stats,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BinaryHeap;

    use super::{CheapestInsertion, InsertionCandidate};
    use crate::{
        Error,
        geo::{distance::DistanceMode, matrix::DistanceMatrix},
        node::Point,
    };

    fn candidate(point: usize, cost: f64, seq: u64) -> InsertionCandidate {
        InsertionCandidate {
            point,
            after: 0,
            cost,
            seq,
        }
    }

    fn square() -> DistanceMatrix {
        DistanceMatrix::build(
            &[
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0),
                Point::new(10.0, 10.0),
                Point::new(0.0, 10.0),
            ],
            DistanceMode::Euclidean,
        )
    }

    #[test]
    fn heap_pops_cheapest_then_earliest() {
        let mut heap = BinaryHeap::new();
        heap.push(candidate(1, 5.0, 0));
        heap.push(candidate(2, 1.0, 1));
        heap.push(candidate(3, 1.0, 2));
        heap.push(candidate(4, 3.0, 3));

        let order: Vec<usize> = std::iter::from_fn(|| heap.pop().map(|c| c.point)).collect();
        assert_eq!(order, vec![2, 3, 4, 1]);
    }

    #[test]
    fn seed_pushes_every_unvisited_point_against_every_edge() {
        let dist = square();
        let solver = CheapestInsertion::new(&dist, [0, 1, 2]).expect("solver");
        assert_eq!(solver.heap.len(), 3);
        assert_eq!(solver.stats.pushed, 3);
        assert!(solver.visited[0] && solver.visited[1] && solver.visited[2]);
        assert!(!solver.visited[3]);
    }

    #[test]
    fn square_corner_is_inserted_on_the_closing_edge() {
        let dist = square();
        let grown = CheapestInsertion::new(&dist, [0, 1, 2])
            .expect("solver")
            .run()
            .expect("run");

        assert_eq!(grown.cycle, vec![0, 1, 2, 3]);
        assert_eq!(grown.costs.len(), 1);
        let expected = 20.0 - 200.0_f64.sqrt();
        assert!((grown.largest_edge - expected).abs() < 1e-9);
        assert_eq!(grown.stats.committed, 1);
    }

    #[test]
    fn three_points_skip_the_loop() {
        let dist = DistanceMatrix::build(
            &[Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(0.0, 1.0)],
            DistanceMode::Euclidean,
        );
        let grown = CheapestInsertion::new(&dist, [2, 0, 1])
            .expect("solver")
            .run()
            .expect("run");
        assert_eq!(grown.cycle, vec![2, 0, 1]);
        assert_eq!(grown.largest_edge, 0.0);
        assert!(grown.costs.is_empty());
        assert_eq!(grown.stats.pushed, 0);
    }

    #[test]
    fn stale_candidates_are_discarded() {
        let points: Vec<Point> = vec![
            Point::new(0.0, 0.0),
            Point::new(20.0, 0.0),
            Point::new(10.0, 20.0),
            Point::new(9.0, 1.0),
            Point::new(11.0, 1.0),
            Point::new(10.0, 10.0),
        ];
        let dist = DistanceMatrix::build(&points, DistanceMode::Euclidean);
        let grown = CheapestInsertion::new(&dist, [0, 1, 2])
            .expect("solver")
            .run()
            .expect("run");

        let mut sorted = grown.cycle.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(grown.stats.committed, 3);
        // (11,1) is first offered at cost ~0.1 and placed later through a cheaper
        // reseeded candidate, so its first entry surfaces as stale.
        assert!(grown.stats.stale > 0);
        assert!(grown.stats.pushed >= grown.stats.stale + grown.stats.committed);
        for cost in &grown.costs {
            assert!(grown.largest_edge >= *cost);
        }
    }

    #[test]
    fn queued_positions_are_not_renumbered() {
        let points: Vec<Point> = vec![
            Point::new(0.0, 0.0),
            Point::new(20.0, 0.0),
            Point::new(10.0, 20.0),
            Point::new(9.0, 1.0),
            Point::new(11.0, 1.0),
            Point::new(10.0, 10.0),
        ];
        let dist = DistanceMatrix::build(&points, DistanceMode::Euclidean);
        let grown = CheapestInsertion::new(&dist, [0, 1, 2])
            .expect("solver")
            .run()
            .expect("run");

        // (10,10) is committed from its seed-time entry for edge 1 -> 2 at `after = 1`.
        // Two inserts have since shifted that edge to positions 4..5, yet the point is
        // spliced at index 2 as recorded.
        assert_eq!(grown.cycle, vec![0, 3, 5, 4, 1, 2]);
        assert_eq!(grown.stats.stale, 1);
        assert!((grown.costs[2] - (200.0_f64.sqrt() + 10.0 - 500.0_f64.sqrt())).abs() < 1e-9);
    }

    #[test]
    fn rejects_duplicate_seed_indices() {
        let dist = square();
        let err = CheapestInsertion::new(&dist, [0, 0, 1])
            .err()
            .expect("duplicate seed should fail");
        assert!(matches!(err, Error::InvalidData(_)));
    }

    #[test]
    fn rejects_out_of_range_seed() {
        let dist = square();
        let err = CheapestInsertion::new(&dist, [0, 1, 9])
            .err()
            .expect("out of range seed should fail");
        assert!(err.to_string().contains("seed index 9"));
    }
}
