use std::fmt;

use crate::{Error, Result};

/// Input coordinate pair.
/// In planar mode `x/y` are Cartesian values; in geographic mode `x` is the
/// latitude and `y` the longitude, both encoded as `DDD.MM` (degrees, minutes/100).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub(crate) fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut b1 = ryu::Buffer::new();
        let mut b2 = ryu::Buffer::new();
        write!(f, "{} {}", b1.format(self.x), b2.format(self.y))
    }
}

/// Points indexed `0..n` together with the external id of each index.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointSet {
    ids: Vec<i64>,
    points: Vec<Point>,
}

impl PointSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(ids: Vec<i64>, points: Vec<Point>) -> Result<Self> {
        if ids.len() != points.len() {
            return Err(Error::invalid_data(format!(
                "id count {} does not match point count {}",
                ids.len(),
                points.len()
            )));
        }
        if let Some(idx) = points.iter().position(|p| !p.is_finite()) {
            return Err(Error::invalid_data(format!(
                "point with id {} has a non-finite coordinate",
                ids[idx]
            )));
        }
        Ok(Self { ids, points })
    }

    pub fn push(&mut self, id: i64, point: Point) {
        self.ids.push(id);
        self.points.push(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn ids(&self) -> &[i64] {
        &self.ids
    }

    pub(crate) fn id(&self, idx: usize) -> i64 {
        self.ids[idx]
    }
}

impl FromIterator<(i64, Point)> for PointSet {
    fn from_iter<I: IntoIterator<Item = (i64, Point)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (id, point) in iter {
            set.push(id, point);
        }
        set
    }
}
