//! Two-dimensional point index built as a 2D-tree, plus a brute-force
//! reference index with the same interface.
mod brute_force;
mod error;
mod kd_tree;
pub mod loader;
mod point;
mod point_index;
mod rectangle;

pub use brute_force::BruteForce;
pub use error::{Error, Result};
pub use kd_tree::{Iter, KdTree};
pub use point::{Axis, Point};
pub use point_index::PointIndex;
pub use rectangle::Rectangle;
