use crate::point::{Axis, Point};

/// Axis-aligned rectangle. Containment is inclusive on all four sides.
#[derive(Copy, Clone, Debug)]
pub struct Rectangle {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl PartialEq for Rectangle {
    fn eq(&self, other: &Self) -> bool {
        if self.is_empty() {
            other.is_empty()
        } else {
            self.x_min == other.x_min
                && self.y_min == other.y_min
                && self.x_max == other.x_max
                && self.y_max == other.y_max
        }
    }
}

impl Rectangle {
    pub fn new(p1: Point, p2: Point) -> Self {
        Rectangle {
            x_min: p1.x.min(p2.x),
            y_min: p1.y.min(p2.y),
            x_max: p1.x.max(p2.x),
            y_max: p1.y.max(p2.y),
        }
    }

    pub fn new_empty() -> Self {
        Rectangle {
            x_min: f64::NAN,
            y_min: f64::NAN,
            x_max: f64::NAN,
            y_max: f64::NAN,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.x_min.is_nan() || self.y_min.is_nan() || self.x_max.is_nan() || self.y_max.is_nan()
    }

    /// Usable as a query: no NaN bound and min <= max on both axes.
    pub fn is_valid(&self) -> bool {
        !self.is_empty() && self.x_min <= self.x_max && self.y_min <= self.y_max
    }

    /// Bounding rectangle of `points`; empty if there are none.
    pub fn of(points: &[Point]) -> Self {
        points.iter().fold(Rectangle::new_empty(), |mut s, &p| {
            s.expand(p);
            s
        })
    }

    pub fn min(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x_min,
            Axis::Y => self.y_min,
        }
    }

    pub fn max(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x_max,
            Axis::Y => self.y_max,
        }
    }

    pub fn contains(&self, point: Point) -> bool {
        self.x_min <= point.x
            && self.x_max >= point.x
            && self.y_min <= point.y
            && self.y_max >= point.y
    }

    // f64::min/max return the non-NaN operand, so an empty rectangle
    // takes the first point's bounds.
    pub fn expand(&mut self, point: Point) {
        self.x_min = self.x_min.min(point.x);
        self.y_min = self.y_min.min(point.y);
        self.x_max = self.x_max.max(point.x);
        self.y_max = self.y_max.max(point.y);
    }
}
