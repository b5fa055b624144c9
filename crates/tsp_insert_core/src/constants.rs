/// Smallest input that still forms a closed cycle.
pub(crate) const MIN_CYCLE_POINTS: usize = 3;

/// TSPLIB's truncated value of pi, used by the GEO distance convention.
pub(crate) const TSPLIB_PI: f64 = 3.141592;
/// Earth radius (km) of the TSPLIB GEO convention.
pub(crate) const TSPLIB_EARTH_RADIUS_KM: f64 = 6378.388;

pub(crate) const NODE_COORD_SECTION: &str = "NODE_COORD_SECTION";
pub(crate) const EDGE_WEIGHT_TYPE_KEY: &str = "EDGE_WEIGHT_TYPE";
pub(crate) const GEO_EDGE_WEIGHT: &str = "GEO";

pub(crate) const DEFAULT_OUTPUT_PATH: &str = "tour.txt";
