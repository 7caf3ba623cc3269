use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use kdtree_2d::{Point, Rectangle};

//// Utility functions

pub(crate) fn get_random_points(rect: Rectangle, n: usize, seed: u64) -> Vec<Point> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut results = Vec::new();
    for _i in 0..n {
        results.push(Point::new(
            rng.gen_range(rect.x_min, rect.x_max),
            rng.gen_range(rect.y_min, rect.y_max),
        ));
    }

    results
}

/// Small query rectangles, each side at most `max_side` long.
#[allow(dead_code)]
pub(crate) fn get_random_rects(rect: Rectangle, n: usize, max_side: f64, seed: u64) -> Vec<Rectangle> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut results = Vec::new();
    for _i in 0..n {
        let corner = Point::new(
            rng.gen_range(rect.x_min, rect.x_max),
            rng.gen_range(rect.y_min, rect.y_max),
        );
        let opposite = Point::new(
            corner.x + rng.gen_range(0., max_side),
            corner.y + rng.gen_range(0., max_side),
        );
        results.push(Rectangle::new(corner, opposite));
    }

    results
}

pub(crate) fn unit_square() -> Rectangle {
    Rectangle::new(Point::new(0., 0.), Point::new(1., 1.))
}
