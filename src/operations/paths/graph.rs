use std::collections::BTreeMap;

use slotmap::SlotMap;
use tracing::{debug, warn};

use crate::error::Result;
use crate::model::{Area, NodeId, Plan, WallId};

slotmap::new_key_type! {
    /// Unique identifier for a directed arc in an [`ArcGraph`].
    pub struct ArcId;
}

/// One directed traversal of a wall.
#[derive(Debug, Clone, Copy)]
pub struct DirectedArc {
    pub wall_id: WallId,
    /// `true` when the arc runs from the wall's end node to its start node.
    pub inversed: bool,
    pub from: NodeId,
    pub to: NodeId,
    /// The arc running the same wall the other way.
    pub twin: ArcId,
    pub used: bool,
}

/// Directed-arc adjacency of one area.
///
/// Arcs live in an arena; each node keeps its outgoing arcs in insertion
/// order, which follows the area's wall list. Nodes iterate in ascending id
/// order.
#[derive(Debug, Default)]
pub struct ArcGraph {
    arcs: SlotMap<ArcId, DirectedArc>,
    outgoing: BTreeMap<NodeId, Vec<ArcId>>,
}

impl ArcGraph {
    /// Returns `true` when no arcs remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outgoing.is_empty()
    }

    /// Number of arcs still in the graph.
    #[must_use]
    pub fn arc_count(&self) -> usize {
        self.arcs.len()
    }

    /// Returns the arc stored under `id`.
    #[must_use]
    pub fn arc(&self, id: ArcId) -> Option<&DirectedArc> {
        self.arcs.get(id)
    }

    /// Outgoing arcs of `node`, used or not.
    #[must_use]
    pub fn outgoing(&self, node: NodeId) -> &[ArcId] {
        self.outgoing.get(&node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The first arc of the lowest-id node still present.
    #[must_use]
    pub fn first_arc(&self) -> Option<ArcId> {
        self.outgoing
            .values()
            .find_map(|arcs| arcs.first().copied())
    }

    /// Marks an arc as used. Its twin stays available to the face on the
    /// other side of the wall.
    pub fn consume(&mut self, id: ArcId) {
        if let Some(arc) = self.arcs.get_mut(id) {
            arc.used = true;
        }
    }

    /// Removes every used arc, then every node left without arcs.
    pub fn purge_used(&mut self) {
        self.arcs.retain(|_, arc| !arc.used);
        let arcs = &self.arcs;
        self.outgoing.retain(|_, list| {
            list.retain(|id| arcs.contains_key(*id));
            !list.is_empty()
        });
    }

    /// Repeatedly removes walls hanging off a node with a single arc, leaving
    /// only walls that lie on some cycle. Returns the number of walls removed.
    pub fn prune_dangling(&mut self) -> usize {
        let mut pruned = 0;
        let mut leaves: Vec<NodeId> = self
            .outgoing
            .iter()
            .filter(|(_, arcs)| arcs.len() == 1)
            .map(|(&node, _)| node)
            .collect();

        while let Some(node) = leaves.pop() {
            let Some(&[arc_id]) = self.outgoing.get(&node).map(Vec::as_slice) else {
                continue;
            };
            let Some(arc) = self.arcs.remove(arc_id) else {
                continue;
            };
            self.arcs.remove(arc.twin);
            self.outgoing.remove(&node);
            if let Some(arcs) = self.outgoing.get_mut(&arc.to) {
                arcs.retain(|&id| id != arc.twin);
                match arcs.len() {
                    0 => {
                        self.outgoing.remove(&arc.to);
                    }
                    1 => leaves.push(arc.to),
                    _ => {}
                }
            }
            pruned += 1;
        }

        pruned
    }

    fn insert_wall(&mut self, wall_id: WallId, start: NodeId, end: NodeId) {
        let forward = self.arcs.insert_with_key(|key| DirectedArc {
            wall_id,
            inversed: false,
            from: start,
            to: end,
            twin: key,
            used: false,
        });
        let backward = self.arcs.insert(DirectedArc {
            wall_id,
            inversed: true,
            from: end,
            to: start,
            twin: forward,
            used: false,
        });
        if let Some(arc) = self.arcs.get_mut(forward) {
            arc.twin = backward;
        }
        self.outgoing.entry(start).or_default().push(forward);
        self.outgoing.entry(end).or_default().push(backward);
    }
}

/// Builds the arc graph of an area.
///
/// Each wall `(s, e)` yields an arc `s -> e` and an inversed arc `e -> s`.
/// Walls joining a node to itself yield nothing. In `strict` mode an
/// unresolved or invalid wall fails the build; otherwise it is skipped.
///
/// # Errors
///
/// Only in `strict` mode: `ModelError::EntityNotFound` for a missing wall or
/// node, `ModelError::InvalidEntity` for an invalid wall.
pub fn build_arc_graph(plan: &Plan, area: &Area, strict: bool) -> Result<ArcGraph> {
    let mut graph = ArcGraph::default();

    for &wall_id in area.wall_ids() {
        let wall = match plan.wall(wall_id) {
            Ok(wall) => wall,
            Err(err) if strict => return Err(err.into()),
            Err(err) => {
                warn!(%err, "skipping unresolved wall");
                continue;
            }
        };

        if strict {
            plan.validate_wall(wall_id, wall)?;
        } else if let Err(err) = plan
            .node(wall.start_node_id)
            .and_then(|_| plan.node(wall.end_node_id))
        {
            warn!(wall = %wall_id, %err, "skipping wall with unresolved endpoint");
            continue;
        }

        if wall.start_node_id == wall.end_node_id {
            debug!(wall = %wall_id, "skipping wall that joins a node to itself");
            continue;
        }

        graph.insert_wall(wall_id, wall.start_node_id, wall.end_node_id);
    }

    Ok(graph)
}
