pub mod area;
pub mod hole;
mod id;
pub mod node;
pub mod record;
pub mod wall;

pub use area::Area;
pub use hole::Hole;
pub use id::{AreaId, HoleId, NodeId, WallId};
pub use node::Node;
pub use record::{EntityRecord, PlanBuilder};
pub use wall::Wall;

use std::collections::{BTreeMap, BTreeSet};

use crate::error::{ModelError, OperationError, Result};
use crate::operations::paths::{CalculatePaths, Path};

/// A floor plan: the single owner of every node, wall, hole and area.
///
/// Entities reference each other by id only. An id that does not resolve in
/// the corresponding map is a consistency violation, reported by
/// [`Plan::validate`] or by the lookup accessors.
#[derive(Debug, Clone)]
pub struct Plan {
    pub name: String,
    nodes: BTreeMap<NodeId, Node>,
    walls: BTreeMap<WallId, Wall>,
    holes: BTreeMap<HoleId, Hole>,
    areas: BTreeMap<AreaId, Area>,
}

impl Default for Plan {
    fn default() -> Self {
        Self::new("unknown")
    }
}

impl Plan {
    /// Creates a new, empty plan.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nodes: BTreeMap::new(),
            walls: BTreeMap::new(),
            holes: BTreeMap::new(),
            areas: BTreeMap::new(),
        }
    }

    /// Removes every entity and resets the name.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// A plan is usable once it has nodes, walls and areas.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.nodes.is_empty() && !self.walls.is_empty() && !self.areas.is_empty()
    }

    // --- Insertion ---

    /// Inserts a node, returning the one previously stored under `id`.
    pub fn insert_node(&mut self, id: NodeId, node: Node) -> Option<Node> {
        self.nodes.insert(id, node)
    }

    /// Inserts a wall, returning the one previously stored under `id`.
    pub fn insert_wall(&mut self, id: WallId, wall: Wall) -> Option<Wall> {
        self.walls.insert(id, wall)
    }

    /// Inserts a hole, returning the one previously stored under `id`.
    pub fn insert_hole(&mut self, id: HoleId, hole: Hole) -> Option<Hole> {
        self.holes.insert(id, hole)
    }

    /// Inserts an area, returning the one previously stored under `id`.
    pub fn insert_area(&mut self, id: AreaId, area: Area) -> Option<Area> {
        self.areas.insert(id, area)
    }

    // --- Lookup ---

    /// Returns the node stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::EntityNotFound` if there is no such node.
    pub fn node(&self, id: NodeId) -> std::result::Result<&Node, ModelError> {
        self.nodes.get(&id).ok_or(ModelError::EntityNotFound {
            kind: "node",
            id: id.0,
        })
    }

    /// Returns the wall stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::EntityNotFound` if there is no such wall.
    pub fn wall(&self, id: WallId) -> std::result::Result<&Wall, ModelError> {
        self.walls.get(&id).ok_or(ModelError::EntityNotFound {
            kind: "wall",
            id: id.0,
        })
    }

    /// Returns the hole stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::EntityNotFound` if there is no such hole.
    pub fn hole(&self, id: HoleId) -> std::result::Result<&Hole, ModelError> {
        self.holes.get(&id).ok_or(ModelError::EntityNotFound {
            kind: "hole",
            id: id.0,
        })
    }

    /// Returns the area stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::UnknownArea` if there is no such area.
    pub fn area(&self, id: AreaId) -> std::result::Result<&Area, OperationError> {
        self.areas.get(&id).ok_or(OperationError::UnknownArea(id))
    }

    /// Iterates over all nodes in ascending id order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().map(|(id, n)| (*id, n))
    }

    /// Iterates over all walls in ascending id order.
    pub fn walls(&self) -> impl Iterator<Item = (WallId, &Wall)> {
        self.walls.iter().map(|(id, w)| (*id, w))
    }

    /// Iterates over all holes in ascending id order.
    pub fn holes(&self) -> impl Iterator<Item = (HoleId, &Hole)> {
        self.holes.iter().map(|(id, h)| (*id, h))
    }

    /// Iterates over all areas in ascending id order.
    pub fn areas(&self) -> impl Iterator<Item = (AreaId, &Area)> {
        self.areas.iter().map(|(id, a)| (*id, a))
    }

    /// The wall ids of an area.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::UnknownArea` if the area does not exist.
    pub fn area_wall_ids(&self, id: AreaId) -> Result<&[WallId]> {
        Ok(self.area(id)?.wall_ids())
    }

    /// Every node touched by the walls of an area, in ascending id order.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::UnknownArea` if the area does not exist, or
    /// `ModelError::EntityNotFound` if one of its walls does not.
    pub fn area_node_ids(&self, id: AreaId) -> Result<Vec<NodeId>> {
        let mut node_ids = BTreeSet::new();
        for &wall_id in self.area(id)?.wall_ids() {
            let wall = self.wall(wall_id)?;
            node_ids.insert(wall.start_node_id);
            node_ids.insert(wall.end_node_id);
        }
        Ok(node_ids.into_iter().collect())
    }

    // --- Consistency ---

    /// Checks every entity for validity and every id reference for
    /// resolution.
    ///
    /// # Errors
    ///
    /// Returns the first `ModelError` found: an invalid wall, hole or area, or
    /// a reference to a missing node or wall.
    pub fn validate(&self) -> Result<()> {
        for (&id, wall) in &self.walls {
            self.validate_wall(id, wall)?;
        }
        for (&id, hole) in &self.holes {
            if !hole.is_valid() {
                return Err(invalid("hole", id.0, "width and distance must be positive"));
            }
            self.wall(hole.wall_id)?;
        }
        for (&id, area) in &self.areas {
            if area.wall_ids().is_empty() {
                return Err(invalid("area", id.0, "no walls"));
            }
            for &wall_id in area.wall_ids() {
                self.wall(wall_id)?;
            }
        }
        Ok(())
    }

    /// Checks a single wall for validity and endpoint resolution.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::InvalidEntity` for a degenerate wall, or
    /// `ModelError::EntityNotFound` for a missing endpoint.
    pub fn validate_wall(&self, id: WallId, wall: &Wall) -> Result<()> {
        if !wall.is_valid() {
            return Err(invalid(
                "wall",
                id.0,
                "endpoints must differ and thickness must be positive",
            ));
        }
        self.node(wall.start_node_id)?;
        self.node(wall.end_node_id)?;
        Ok(())
    }

    // --- Paths ---

    /// Traces the closed boundaries of one area.
    ///
    /// Shorthand for a non-strict [`CalculatePaths`].
    ///
    /// # Errors
    ///
    /// Returns `OperationError::UnknownArea` if the area does not exist.
    pub fn calculate_paths(&self, area_id: AreaId) -> Result<Vec<Path>> {
        CalculatePaths::new(area_id).execute(self)
    }

    /// Traces the closed boundaries of every area.
    ///
    /// # Errors
    ///
    /// Propagates the first failure of [`Plan::calculate_paths`].
    pub fn calculate_all_paths(&self) -> Result<BTreeMap<AreaId, Vec<Path>>> {
        self.areas
            .keys()
            .map(|&id| self.calculate_paths(id).map(|paths| (id, paths)))
            .collect()
    }
}

fn invalid(kind: &'static str, id: u64, reason: &str) -> crate::error::RoomtraceError {
    ModelError::InvalidEntity {
        kind,
        id,
        reason: reason.to_owned(),
    }
    .into()
}
