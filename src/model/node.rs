use crate::math::Point2;

/// A 2D point of the plan that walls connect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    /// Position of the node.
    pub point: Point2,
}

impl Node {
    /// Creates a node at `(x, y)`.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            point: Point2::new(x, y),
        }
    }
}
