//! Approximate Euclidean and TSPLIB `GEO` traveling-salesman tours.
//! The tour starts from the largest-area triangle of the input and grows by
//! cheapest insertion driven by a lazily pruned priority queue.

mod algo;
mod constants;
mod error;
mod geo;
mod io;
pub mod logging;
mod node;
mod tour;

pub(crate) use geo::{distance, geometry, matrix};
pub(crate) use io::options;

pub use algo::solver::solve_cheapest_insertion;
pub use error::{Error, Result};
pub use geo::distance::DistanceMode;
pub use geo::matrix::DistanceMatrix;
pub use io::input::ProblemInput;
pub use io::options::{DistanceChoice, LogFormat, LogLevel, SolverOptions};
pub use io::output::{save_tour, write_tour};
pub use node::{Point, PointSet};
pub use tour::{RunReport, Solution, TourMetrics};
