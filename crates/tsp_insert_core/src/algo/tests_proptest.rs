use proptest::prelude::*;

use super::{insertion::CheapestInsertion, seed::largest_triangle, solver::solve_cheapest_insertion};
use crate::{
    distance::DistanceMode,
    geometry::TourGeometry,
    matrix::DistanceMatrix,
    node::{Point, PointSet},
};

fn planar_points(max: usize) -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((-1_000.0..1_000.0f64, -1_000.0..1_000.0f64), 3..max)
        .prop_map(|coords| coords.into_iter().map(|(x, y)| Point::new(x, y)).collect())
}

fn geo_points(max: usize) -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((-80.0..80.0f64, -170.0..170.0f64), 3..max)
        .prop_map(|coords| coords.into_iter().map(|(x, y)| Point::new(x, y)).collect())
}

fn mode() -> impl Strategy<Value = DistanceMode> {
    prop_oneof![Just(DistanceMode::Euclidean), Just(DistanceMode::Geographic)]
}

fn with_ids(points: Vec<Point>) -> PointSet {
    points
        .into_iter()
        .enumerate()
        .map(|(i, p)| (100 + 3 * i as i64, p))
        .collect()
}

proptest! {
    #[test]
    fn tour_is_closed_permutation(points in planar_points(40), mode in mode()) {
        let set = with_ids(points);
        let solution = solve_cheapest_insertion(&set, mode).expect("solve");

        prop_assert_eq!(solution.tour.len(), set.len() + 1);
        prop_assert_eq!(solution.tour.first(), solution.tour.last());

        let mut visited = solution.tour[..set.len()].to_vec();
        visited.sort_unstable();
        let mut expected = set.ids().to_vec();
        expected.sort_unstable();
        prop_assert_eq!(visited, expected);
    }

    #[test]
    fn matrix_is_symmetric_and_non_negative(points in planar_points(25), mode in mode()) {
        let dist = DistanceMatrix::build(&points, mode);
        for i in 0..points.len() {
            prop_assert_eq!(dist.get(i, i), 0.0);
            for j in 0..points.len() {
                prop_assert_eq!(dist.get(i, j), dist.get(j, i));
                prop_assert!(dist.get(i, j) >= 0.0);
            }
        }
    }

    #[test]
    fn geographic_distances_are_positive_integers(points in geo_points(20)) {
        let dist = DistanceMatrix::build(&points, DistanceMode::Geographic);
        for i in 0..points.len() {
            for j in 0..points.len() {
                if i != j {
                    prop_assert!(dist.get(i, j) >= 1.0);
                    prop_assert_eq!(dist.get(i, j).fract(), 0.0);
                }
            }
        }
    }

    #[test]
    fn seed_has_maximal_area(points in planar_points(15)) {
        let (seed, area) = largest_triangle(&points).expect("seed");
        prop_assert!(seed[0] < seed[1] && seed[1] < seed[2]);
        let seed_area = TourGeometry::triangle_area(points[seed[0]], points[seed[1]], points[seed[2]]);
        prop_assert_eq!(seed_area, area);

        let n = points.len();
        for i in 0..n {
            for j in (i + 1)..n {
                for k in (j + 1)..n {
                    let other = TourGeometry::triangle_area(points[i], points[j], points[k]);
                    prop_assert!(area >= other);
                    if other == area {
                        // First maximal triple in lexicographic order wins.
                        prop_assert!([i, j, k] >= seed);
                    }
                }
            }
        }
    }

    #[test]
    fn largest_edge_dominates_committed_costs(points in planar_points(30), mode in mode()) {
        let dist = DistanceMatrix::build(&points, mode);
        let (seed, _) = largest_triangle(&points).expect("seed");
        let grown = CheapestInsertion::new(&dist, seed).expect("solver").run().expect("run");

        prop_assert_eq!(grown.costs.len(), points.len() - 3);
        for cost in &grown.costs {
            prop_assert!(grown.largest_edge >= *cost);
        }

        let set = with_ids(points);
        let solution = solve_cheapest_insertion(&set, mode).expect("solve");
        let first = grown.cycle[0];
        let last = grown.cycle[grown.cycle.len() - 1];
        prop_assert!(solution.largest_edge >= dist.get(last, first));
        prop_assert!(solution.largest_edge >= grown.largest_edge);
    }
}
