mod classify;
mod graph;
#[cfg(test)]
mod test_plans;
mod trace;

pub use graph::{build_arc_graph, ArcGraph, ArcId, DirectedArc};

use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::math::Point2;
use crate::model::{AreaId, NodeId, Plan, WallId};

/// One wall of a [`Path`], with its traversal direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct PathWall {
    pub wall_id: WallId,
    /// `true` when the wall is walked from its end node to its start node.
    pub inversed: bool,
}

impl PathWall {
    /// The same wall walked the other way.
    #[must_use]
    pub fn reversed(self) -> Self {
        Self {
            wall_id: self.wall_id,
            inversed: !self.inversed,
        }
    }
}

impl From<&DirectedArc> for PathWall {
    fn from(arc: &DirectedArc) -> Self {
        Self {
            wall_id: arc.wall_id,
            inversed: arc.inversed,
        }
    }
}

/// A closed boundary loop of an area.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Path {
    /// The area this loop was traced for.
    pub area_id: AreaId,
    /// `true` for a hole inside another loop of the same area.
    pub inside: bool,
    /// Shoelace area of the loop in traversal order. Loops are reported
    /// counter-clockwise, so this is positive.
    pub signed_area: f64,
    /// Walls in traversal order. The last wall ends where the first begins.
    pub walls: Vec<PathWall>,
}

impl Path {
    /// Number of walls in the loop.
    #[must_use]
    pub fn len(&self) -> usize {
        self.walls.len()
    }

    /// Returns `true` if the loop has no walls.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }

    /// Returns `true` if the loop runs counter-clockwise.
    #[must_use]
    pub fn is_counter_clockwise(&self) -> bool {
        self.signed_area > 0.0
    }

    /// The node each wall starts from, in traversal order.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::EntityNotFound` if a wall is missing from `plan`.
    pub fn node_ids(&self, plan: &Plan) -> Result<Vec<NodeId>> {
        self.walls
            .iter()
            .map(|w| -> Result<NodeId> { Ok(plan.wall(w.wall_id)?.endpoints(w.inversed).0) })
            .collect()
    }

    /// The loop's vertices in traversal order.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::EntityNotFound` if a wall or node is missing from
    /// `plan`.
    pub fn points(&self, plan: &Plan) -> Result<Vec<Point2>> {
        resolve_points(plan, &self.walls)
    }
}

fn resolve_points(plan: &Plan, walls: &[PathWall]) -> Result<Vec<Point2>> {
    walls
        .iter()
        .map(|w| -> Result<Point2> {
            let (from, _) = plan.wall(w.wall_id)?.endpoints(w.inversed);
            Ok(plan.node(from)?.point)
        })
        .collect()
}

/// Reconstructs the closed boundary loops of one area.
///
/// Builds the area's directed-arc graph, drops dangling walls, traces every
/// face by always taking the sharpest left turn, drops the clockwise outlines
/// and zero-area slivers, then marks faces nested inside other faces as
/// holes.
#[derive(Debug, Clone, Copy)]
pub struct CalculatePaths {
    area_id: AreaId,
    strict: bool,
}

impl CalculatePaths {
    /// Creates a new path calculation for `area_id`.
    #[must_use]
    pub fn new(area_id: AreaId) -> Self {
        Self {
            area_id,
            strict: false,
        }
    }

    /// With `strict`, the area's walls and their nodes must all resolve and
    /// every wall must be valid; otherwise offending walls are skipped.
    #[must_use]
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Executes the calculation.
    ///
    /// Returns an empty list when the area's walls close no loop.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::UnknownArea` if the area does not exist, or a
    /// `ModelError` in strict mode when the area's walls are inconsistent.
    pub fn execute(&self, plan: &Plan) -> Result<Vec<Path>> {
        let area = plan.area(self.area_id)?;
        let mut graph = build_arc_graph(plan, area, self.strict)?;
        let arc_count = graph.arc_count();
        let pruned = graph.prune_dangling();

        if graph.is_empty() {
            debug!(area = %self.area_id, arcs = arc_count, pruned, "area has no boundary");
            return Ok(Vec::new());
        }

        let loops = trace::trace_loops(&mut graph, plan)?;
        debug!(
            area = %self.area_id,
            arcs = arc_count,
            pruned,
            loops = loops.len(),
            "traced area"
        );

        classify::classify_loops(plan, self.area_id, loops)
    }
}
