pub(crate) mod distance;
pub(crate) mod geometry;
pub(crate) mod matrix;
