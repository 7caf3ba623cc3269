use crate::point_index::{check_point, check_rectangle};
use crate::{Point, PointIndex, Rectangle, Result};

/// Reference index: a list of distinct points, every query a linear scan.
#[derive(Debug, Clone, Default)]
pub struct BruteForce {
    points: Vec<Point>,
}

impl BruteForce {
    pub fn new() -> Self {
        BruteForce { points: Vec::new() }
    }
}

impl PointIndex for BruteForce {
    fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    fn len(&self) -> usize {
        self.points.len()
    }

    fn insert(&mut self, point: Point) -> Result<bool> {
        let point = check_point(point)?;
        if self.points.contains(&point) {
            return Ok(false);
        }
        self.points.push(point);
        Ok(true)
    }

    fn contains(&self, point: Point) -> Result<bool> {
        let point = check_point(point)?;
        Ok(self.points.contains(&point))
    }

    fn range(&self, rect: &Rectangle) -> Result<Vec<Point>> {
        let rect = check_rectangle(rect)?;
        Ok(self
            .points
            .iter()
            .copied()
            .filter(|&p| rect.contains(p))
            .collect())
    }

    fn nearest(&self, point: Point) -> Result<Option<Point>> {
        let query = check_point(point)?;
        let mut best: Option<(Point, f64)> = None;
        for &p in &self.points {
            let dist = p.distance_squared_to(query);
            match best {
                Some((_, best_dist)) if best_dist <= dist => {}
                _ => best = Some((p, dist)),
            }
        }
        Ok(best.map(|(p, _)| p))
    }

    fn points(&self) -> Vec<Point> {
        self.points.clone()
    }
}
