use tracing::trace;

use crate::point_index::{check_point, check_rectangle};
use crate::{Axis, Point, PointIndex, Rectangle, Result};

#[derive(Debug, Clone)]
struct Node {
    point: Point,
    left: Option<usize>,
    right: Option<usize>,
}

impl Node {
    fn new_leaf(point: Point) -> Self {
        Node {
            point,
            left: None,
            right: None,
        }
    }
}

/// A 2D-tree over points.
///
/// Nodes live in an arena; the root is index 0 and every node owns its
/// children by index. Nodes at even depth split on x, odd depth on y. A
/// point goes to the left subtree iff it is strictly less than the node on
/// the node's axis, and both `insert` and `contains` descend by that rule.
///
/// The tree is never rebalanced, so sorted input gives a tree whose height
/// equals its size. Queries walk an explicit stack and do not recurse.
#[derive(Debug, Clone, Default)]
pub struct KdTree {
    nodes: Vec<Node>,
}

impl KdTree {
    pub fn new() -> Self {
        KdTree { nodes: Vec::new() }
    }

    /// Insert every point in order. Stops at the first invalid point.
    pub fn from_points<I>(points: I) -> Result<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut tree = KdTree::new();
        for point in points {
            tree.insert(point)?;
        }
        Ok(tree)
    }

    fn root(&self) -> Option<usize> {
        if self.nodes.is_empty() {
            None
        } else {
            Some(0)
        }
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        let mut height = 0;
        // Stack entries: (node, depth)
        let mut stack: Vec<(usize, usize)> = self.root().map(|r| (r, 1)).into_iter().collect();
        while let Some((index, depth)) = stack.pop() {
            height = height.max(depth);
            let node = &self.nodes[index];
            stack.extend(node.left.map(|c| (c, depth + 1)));
            stack.extend(node.right.map(|c| (c, depth + 1)));
        }
        height
    }

    /// Pre-order iteration over the stored points.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            tree: self,
            stack: self.root().into_iter().collect(),
        }
    }

    /// Find `point` by the insertion descent rule. On a miss, returns the
    /// last node visited and whether `point` belongs on its left.
    fn locate(&self, point: Point) -> Locate {
        let mut index = match self.root() {
            Some(r) => r,
            None => return Locate::Empty,
        };
        let mut axis = Axis::X;
        loop {
            let node = &self.nodes[index];
            if node.point == point {
                return Locate::Found;
            }
            let go_left = point.coord(axis) < node.point.coord(axis);
            let child = if go_left { node.left } else { node.right };
            match child {
                Some(c) => {
                    index = c;
                    axis = axis.next();
                }
                None => {
                    return Locate::Missing {
                        parent: index,
                        left: go_left,
                    }
                }
            }
        }
    }
}

enum Locate {
    Empty,
    Found,
    Missing { parent: usize, left: bool },
}

impl PointIndex for KdTree {
    fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn insert(&mut self, point: Point) -> Result<bool> {
        let point = check_point(point)?;
        let new_index = self.nodes.len();
        match self.locate(point) {
            Locate::Found => {
                trace!(x = point.x, y = point.y, "duplicate point ignored");
                return Ok(false);
            }
            Locate::Empty => {}
            Locate::Missing { parent, left } => {
                let parent = &mut self.nodes[parent];
                if left {
                    parent.left = Some(new_index);
                } else {
                    parent.right = Some(new_index);
                }
            }
        }
        self.nodes.push(Node::new_leaf(point));
        Ok(true)
    }

    fn contains(&self, point: Point) -> Result<bool> {
        let point = check_point(point)?;
        Ok(matches!(self.locate(point), Locate::Found))
    }

    fn range(&self, rect: &Rectangle) -> Result<Vec<Point>> {
        let rect = check_rectangle(rect)?;
        let mut results = Vec::new();

        // Stack entries: (node, axis)
        let mut stack: Vec<(usize, Axis)> = self.root().map(|r| (r, Axis::X)).into_iter().collect();
        while let Some((index, axis)) = stack.pop() {
            let node = &self.nodes[index];
            if rect.contains(node.point) {
                results.push(node.point);
            }
            // The split line divides the whole plane, so each side is only
            // worth visiting if the rectangle reaches into it.
            let split = node.point.coord(axis);
            if let Some(right) = node.right {
                if rect.max(axis) >= split {
                    stack.push((right, axis.next()));
                }
            }
            if let Some(left) = node.left {
                if rect.min(axis) <= split {
                    stack.push((left, axis.next()));
                }
            }
        }

        Ok(results)
    }

    fn nearest(&self, point: Point) -> Result<Option<Point>> {
        let query = check_point(point)?;
        let mut best: Option<Point> = None;
        let mut best_dist = f64::INFINITY;

        // Stack entries: (node, axis, squared distance from query to the
        // node's half-plane). Near children are pushed last so they are
        // searched before their far siblings.
        let mut stack: Vec<(usize, Axis, f64)> =
            self.root().map(|r| (r, Axis::X, 0.)).into_iter().collect();
        while let Some((index, axis, bound)) = stack.pop() {
            if bound >= best_dist {
                continue;
            }
            let node = &self.nodes[index];
            // Squared distances can overflow to infinity for finite
            // points, so the first node visited is always taken.
            let dist = node.point.distance_squared_to(query);
            if best.is_none() || dist < best_dist {
                best_dist = dist;
                best = Some(node.point);
            }

            let diff = query.coord(axis) - node.point.coord(axis);
            let (near, far) = if diff < 0. {
                (node.left, node.right)
            } else {
                (node.right, node.left)
            };
            if let Some(far) = far {
                stack.push((far, axis.next(), diff * diff));
            }
            if let Some(near) = near {
                stack.push((near, axis.next(), 0.));
            }
        }

        Ok(best)
    }

    fn points(&self) -> Vec<Point> {
        self.iter().collect()
    }
}

pub struct Iter<'a> {
    tree: &'a KdTree,
    stack: Vec<usize>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        let index = self.stack.pop()?;
        let node = &self.tree.nodes[index];
        self.stack.extend(node.right);
        self.stack.extend(node.left);
        Some(node.point)
    }
}

impl<'a> IntoIterator for &'a KdTree {
    type Item = Point;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}
