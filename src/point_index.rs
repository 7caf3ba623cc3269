use crate::{Error, Point, Rectangle, Result};

/// A set of points answering membership, range and nearest-neighbor queries.
///
/// Every operation that takes a point or rectangle validates it first and
/// returns `Error::InvalidArgument` without touching the index.
pub trait PointIndex {
    fn is_empty(&self) -> bool;
    fn len(&self) -> usize;
    /// Add `point`, returning false if a coordinate-equal point was
    /// already present.
    fn insert(&mut self, point: Point) -> Result<bool>;
    fn contains(&self, point: Point) -> Result<bool>;
    /// All points inside `rect`, boundary included. Order is unspecified.
    fn range(&self, rect: &Rectangle) -> Result<Vec<Point>>;
    /// A point at minimal distance to `point`, or None if the index is empty.
    fn nearest(&self, point: Point) -> Result<Option<Point>>;
    /// Every stored point exactly once.
    fn points(&self) -> Vec<Point>;
}

pub(crate) fn check_point(point: Point) -> Result<Point> {
    if point.is_valid() {
        Ok(point)
    } else {
        Err(Error::InvalidArgument(format!(
            "point ({}, {}) has a non-finite coordinate",
            point.x, point.y
        )))
    }
}

pub(crate) fn check_rectangle(rect: &Rectangle) -> Result<&Rectangle> {
    if rect.is_valid() {
        Ok(rect)
    } else {
        Err(Error::InvalidArgument(format!(
            "rectangle [{}, {}] x [{}, {}] is empty or inverted",
            rect.x_min, rect.x_max, rect.y_min, rect.y_max
        )))
    }
}
