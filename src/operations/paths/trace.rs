use tracing::{debug, trace};

use crate::error::Result;
use crate::math::angle_2d::turning_measure;
use crate::model::Plan;

use super::graph::{ArcGraph, ArcId, DirectedArc};
use super::PathWall;

/// Outcome of a single walk through the arc graph.
#[derive(Debug)]
enum Walk {
    /// The walk came back to its first arc.
    Closed(Vec<PathWall>),
    /// The walk hit a dead end or turned back on itself.
    Open,
}

/// Pulls every face out of `graph` until no arcs remain.
///
/// Each walk starts from the first arc of the lowest-id node and, at every
/// following node, takes the unused arc with the largest counter-clockwise
/// turning measure from the way back. Ties go to the arc listed first. A walk
/// closes when it selects its first arc again; walks that cannot continue are
/// discarded. Used arcs are purged after every walk.
///
/// Every wall is walked once in each direction, so the result holds the
/// counter-clockwise bounded faces together with the clockwise outline of
/// each connected component.
///
/// # Errors
///
/// Returns `ModelError::EntityNotFound` if an arc endpoint is missing from
/// the plan.
pub fn trace_loops(graph: &mut ArcGraph, plan: &Plan) -> Result<Vec<Vec<PathWall>>> {
    let mut loops = Vec::new();

    while let Some(first) = graph.first_arc() {
        match walk_from(graph, plan, first)? {
            Walk::Closed(walls) => loops.push(walls),
            Walk::Open => {}
        }
        graph.purge_used();
    }

    Ok(loops)
}

/// Walks from `first_id` until the walk closes or gets stuck.
///
/// Only the arcs taken are consumed. The first arc stays selectable for
/// closure.
fn walk_from(graph: &mut ArcGraph, plan: &Plan, first_id: ArcId) -> Result<Walk> {
    let Some(&first) = graph.arc(first_id) else {
        return Ok(Walk::Open);
    };
    graph.consume(first_id);

    let mut walls = vec![PathWall::from(&first)];
    let mut incoming = first;

    loop {
        let Some(next_id) = pick_next_arc(graph, plan, first_id, &incoming)? else {
            debug!(wall = %first.wall_id, at = %incoming.to, "discarding open walk: dead end");
            return Ok(Walk::Open);
        };
        if next_id == first_id {
            return Ok(Walk::Closed(walls));
        }
        let Some(&next) = graph.arc(next_id) else {
            return Ok(Walk::Open);
        };
        graph.consume(next_id);

        if next.to == incoming.from {
            debug!(wall = %next.wall_id, at = %incoming.to, "discarding open walk: turned back");
            return Ok(Walk::Open);
        }

        trace!(wall = %next.wall_id, inversed = next.inversed, to = %next.to, "step");
        walls.push(PathWall::from(&next));
        incoming = next;
    }
}

/// Chooses the outgoing arc at the head of `incoming` with the largest
/// turning measure relative to the way back.
///
/// The reverse of `incoming` is never chosen; a node offering nothing else
/// is a dead end.
fn pick_next_arc(
    graph: &ArcGraph,
    plan: &Plan,
    first_id: ArcId,
    incoming: &DirectedArc,
) -> Result<Option<ArcId>> {
    let origin = plan.node(incoming.to)?.point;
    let back = plan.node(incoming.from)?.point;

    let mut best: Option<(ArcId, f64)> = None;
    for &id in graph.outgoing(incoming.to) {
        if id == incoming.twin {
            continue;
        }
        let Some(arc) = graph.arc(id) else {
            continue;
        };
        if arc.used && id != first_id {
            continue;
        }
        let target = plan.node(arc.to)?.point;
        let measure = turning_measure(&origin, &back, &target);
        if best.is_none_or(|(_, best_measure)| measure > best_measure) {
            best = Some((id, measure));
        }
    }

    Ok(best.map(|(id, _)| id))
}
