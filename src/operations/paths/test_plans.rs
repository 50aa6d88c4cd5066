//! Small plans shared by the path tests.

use crate::model::{Area, AreaId, Node, NodeId, Plan, Wall, WallId};

/// Builds a plan from `(id, x, y)` nodes and `(id, start, end)` walls, with
/// no areas.
pub fn plan_from(nodes: &[(u64, f64, f64)], walls: &[(u64, u64, u64)]) -> Plan {
    let mut plan = Plan::new("test");
    for &(id, x, y) in nodes {
        plan.insert_node(NodeId(id), Node::new(x, y));
    }
    for &(id, start, end) in walls {
        plan.insert_wall(WallId(id), Wall::new(NodeId(start), NodeId(end), 0.2));
    }
    plan
}

/// A 20 x 20 square, walls 1-4 running counter-clockwise, as area 1.
pub fn rectangle() -> Plan {
    let mut plan = plan_from(
        &[(1, 0.0, 0.0), (2, 20.0, 0.0), (3, 20.0, 20.0), (4, 0.0, 20.0)],
        &[(1, 1, 2), (2, 2, 3), (3, 3, 4), (4, 4, 1)],
    );
    plan.insert_area(AreaId(1), Area::new("room", [1, 2, 3, 4].map(WallId)));
    plan
}

/// Adds a square ring of four nodes and four walls, numbered from `first_id`.
pub fn add_square(plan: &mut Plan, first_id: u64, x: f64, y: f64, size: f64) -> Vec<WallId> {
    let corners = [(x, y), (x + size, y), (x + size, y + size), (x, y + size)];
    for (i, &(cx, cy)) in (0u64..).zip(corners.iter()) {
        plan.insert_node(NodeId(first_id + i), Node::new(cx, cy));
    }
    (0u64..4)
        .map(|i| {
            let id = WallId(first_id + i);
            let start = NodeId(first_id + i);
            let end = NodeId(first_id + (i + 1) % 4);
            plan.insert_wall(id, Wall::new(start, end, 0.2));
            id
        })
        .collect()
}
