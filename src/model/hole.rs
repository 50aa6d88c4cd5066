use super::WallId;

/// An opening (door, window) placed along a wall.
///
/// Holes do not take part in boundary tracing; they travel with the plan for
/// downstream consumers.
#[derive(Debug, Clone, PartialEq)]
pub struct Hole {
    pub name: String,
    pub kind: String,
    pub direction: String,
    /// The wall the opening is cut into.
    pub wall_id: WallId,
    pub width: f64,
    /// Offset of the opening along its wall.
    pub distance: f64,
}

impl Hole {
    /// Creates a hole with default name, kind and direction.
    #[must_use]
    pub fn new(wall_id: WallId, width: f64, distance: f64) -> Self {
        Self {
            name: "unknown".to_owned(),
            kind: "unknown".to_owned(),
            direction: "none".to_owned(),
            wall_id,
            width,
            distance,
        }
    }

    /// A hole is valid when both its width and distance are positive.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.width > 0.0 && self.distance > 0.0
    }
}
