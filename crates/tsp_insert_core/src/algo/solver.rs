use std::time::Instant;

use crate::{
    Error, Result, Solution, TourMetrics,
    algo::{assemble::assemble, insertion::CheapestInsertion, seed::largest_triangle},
    distance::DistanceMode,
    matrix::DistanceMatrix,
    node::PointSet,
};

/// Builds a closed tour over `points` with largest-triangle seeded cheapest insertion.
///
/// Fails with [`Error::InsufficientPoints`] for fewer than three points. The reported
/// `elapsed` covers distance-table construction and tour growth, not input parsing.
pub fn solve_cheapest_insertion(points: &PointSet, mode: DistanceMode) -> Result<Solution> {
    Error::ensure_cycle_points(points.len())?;

    let started = Instant::now();
    log::info!("solver: start n={} mode={mode}", points.len());

    let dist = DistanceMatrix::build(points.points(), mode);
    let (seed, area) = largest_triangle(points.points())?;
    log::info!(
        "solver: seed ids=[{}, {}, {}] area={area}",
        points.id(seed[0]),
        points.id(seed[1]),
        points.id(seed[2])
    );

    let grown = CheapestInsertion::new(&dist, seed)?.run()?;
    let assembled = assemble(points, &dist, &grown.cycle, grown.largest_edge);
    let elapsed = started.elapsed();

    log::debug!(
        "solver: committed_cost_sum={}",
        grown.costs.iter().sum::<f64>()
    );

    log::info!(
        "solver: complete n={} insertions={} stale={} largest_edge={} time={:.3}s",
        points.len(),
        grown.stats.committed,
        grown.stats.stale,
        assembled.largest_edge,
        elapsed.as_secs_f64()
    );
    let metrics = TourMetrics::measure(&dist, &grown.cycle);

    Ok(Solution {
        tour: assembled.ids,
        largest_edge: assembled.largest_edge,
        elapsed,
        metrics,
    })
}
