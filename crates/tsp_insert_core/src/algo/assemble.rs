use crate::{matrix::DistanceMatrix, node::PointSet};

/// Closed tour expressed in external ids.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct AssembledTour {
    /// `n + 1` ids; the first id is repeated at the end.
    pub(crate) ids: Vec<i64>,
    pub(crate) largest_edge: f64,
}

/// Maps the internal cycle onto ids, closes it and folds the closing edge into
/// `largest_edge`.
pub(crate) fn assemble(
    points: &PointSet,
    dist: &DistanceMatrix,
    cycle: &[usize],
    largest_edge: f64,
) -> AssembledTour {
    let (Some(&first), Some(&last)) = (cycle.first(), cycle.last()) else {
        return AssembledTour {
            ids: Vec::new(),
            largest_edge,
        };
    };

    let mut ids = Vec::with_capacity(cycle.len() + 1);
    ids.extend(cycle.iter().map(|&idx| points.id(idx)));
    ids.push(points.id(first));

    let closing = dist.get(last, first);
    log::debug!("assemble: n={} closing_edge={closing}", cycle.len());

    AssembledTour {
        ids,
        largest_edge: largest_edge.max(closing),
    }
}
