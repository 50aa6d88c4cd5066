use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{Area, AreaId, Hole, HoleId, Node, NodeId, Plan, Wall, WallId};
use crate::error::Result;

fn unknown() -> String {
    "unknown".to_owned()
}

fn no_direction() -> String {
    "none".to_owned()
}

/// One decoded entity record of a plan document.
///
/// Records are tagged by `"type"` and use kebab-case field names, e.g.
/// `{"type": "wall", "id": 3, "start-node-id": 1, "end-node-id": 2, "thickness": 0.2}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum EntityRecord {
    Node {
        id: NodeId,
        x: f64,
        y: f64,
    },
    #[serde(rename_all = "kebab-case")]
    Wall {
        id: WallId,
        #[serde(default = "unknown")]
        name: String,
        start_node_id: NodeId,
        end_node_id: NodeId,
        thickness: f64,
    },
    #[serde(rename_all = "kebab-case")]
    Hole {
        id: HoleId,
        #[serde(default = "unknown")]
        name: String,
        #[serde(default = "unknown")]
        kind: String,
        #[serde(default = "no_direction")]
        direction: String,
        wall_id: WallId,
        width: f64,
        distance: f64,
    },
    #[serde(rename_all = "kebab-case")]
    Area {
        id: AreaId,
        #[serde(default = "unknown")]
        name: String,
        wall_ids: Vec<WallId>,
    },
}

/// Accumulates entity records into a [`Plan`].
///
/// A later record with the same id replaces an earlier one. Areas that list
/// no walls are dropped.
#[derive(Debug, Default)]
pub struct PlanBuilder {
    plan: Plan,
}

impl PlanBuilder {
    /// Creates a builder for a plan with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            plan: Plan::new(name),
        }
    }

    /// Adds one record.
    pub fn push(&mut self, record: EntityRecord) -> &mut Self {
        match record {
            EntityRecord::Node { id, x, y } => {
                self.plan.insert_node(id, Node::new(x, y));
            }
            EntityRecord::Wall {
                id,
                name,
                start_node_id,
                end_node_id,
                thickness,
            } => {
                let wall = Wall::new(start_node_id, end_node_id, thickness).with_name(name);
                self.plan.insert_wall(id, wall);
            }
            EntityRecord::Hole {
                id,
                name,
                kind,
                direction,
                wall_id,
                width,
                distance,
            } => {
                let hole = Hole {
                    name,
                    kind,
                    direction,
                    wall_id,
                    width,
                    distance,
                };
                self.plan.insert_hole(id, hole);
            }
            EntityRecord::Area { id, name, wall_ids } => {
                let area = Area::new(name, wall_ids);
                if area.wall_ids().is_empty() {
                    debug!(area = %id, "dropping area record without walls");
                } else {
                    self.plan.insert_area(id, area);
                }
            }
        }
        self
    }

    /// Adds every record of an iterator.
    pub fn extend(&mut self, records: impl IntoIterator<Item = EntityRecord>) -> &mut Self {
        for record in records {
            self.push(record);
        }
        self
    }

    /// Finishes the plan. With `strict`, the plan must pass
    /// [`Plan::validate`].
    ///
    /// # Errors
    ///
    /// Returns the validation error when `strict` is set and the plan is
    /// inconsistent.
    pub fn build(self, strict: bool) -> Result<Plan> {
        if strict {
            self.plan.validate()?;
        }
        Ok(self.plan)
    }
}
