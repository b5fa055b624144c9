//! Pairwise distance under the two supported edge-weight conventions.

use std::fmt;

use crate::{
    constants::{TSPLIB_EARTH_RADIUS_KM, TSPLIB_PI},
    node::Point,
};

/// Edge-weight convention applied to every pair of points.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum DistanceMode {
    /// Planar Euclidean distance.
    #[default]
    Euclidean,
    /// TSPLIB `GEO`: great-circle kilometres, truncated and incremented by one.
    Geographic,
}

impl DistanceMode {
    pub fn distance(self, a: Point, b: Point) -> f64 {
        match self {
            Self::Euclidean => euclidean(a, b),
            Self::Geographic => geographic(a, b),
        }
    }
}

impl fmt::Display for DistanceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Euclidean => "euclidean",
            Self::Geographic => "geographic",
        })
    }
}

#[inline]
pub(crate) fn euclidean(a: Point, b: Point) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

pub(crate) fn geographic(a: Point, b: Point) -> f64 {
    let (lat1, lng1) = (to_radians(a.x), to_radians(a.y));
    let (lat2, lng2) = (to_radians(b.x), to_radians(b.y));

    let q1 = (lng1 - lng2).cos();
    let q2 = (lat1 - lat2).cos();
    let q3 = (lat1 + lat2).cos();
    // Rounding can push the cosine just past 1 for (near) identical points.
    let cos_angle = (0.5 * ((1.0 + q1) * q2 - (1.0 - q1) * q3)).clamp(-1.0, 1.0);

    (TSPLIB_EARTH_RADIUS_KM * cos_angle.acos() + 1.0).trunc()
}

/// `DDD.MM` -> radians, with degrees taken as the nearest integer.
fn to_radians(coord: f64) -> f64 {
    let deg = coord.round();
    let min = coord - deg;
    TSPLIB_PI * (deg + 5.0 * min / 3.0) / 180.0
}
