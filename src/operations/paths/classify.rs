use std::collections::BTreeSet;

use tracing::debug;

use crate::error::Result;
use crate::math::polygon_2d::{polygon_contains_polygon, signed_area_2d};
use crate::math::{Point2, TOLERANCE};
use crate::model::{AreaId, Plan};

use super::{resolve_points, Path, PathWall};

/// A bounded face kept for classification.
struct Face {
    walls: Vec<PathWall>,
    sides: BTreeSet<PathWall>,
    polygon: Vec<Point2>,
    signed_area: f64,
}

impl Face {
    /// Whether `self` is the only other face bordering `inner`.
    ///
    /// Every wall of `inner` must be walked the other way either by `self` or
    /// by `inner` itself, and at least one by `self`.
    fn surrounds(&self, inner: &Face) -> bool {
        let mut shared = false;
        for side in &inner.walls {
            let back = side.reversed();
            if self.sides.contains(&back) {
                shared = true;
            } else if !inner.sides.contains(&back) {
                return false;
            }
        }
        shared
    }

    fn encloses(&self, inner: &Face) -> bool {
        self.surrounds(inner)
            || (self.signed_area > inner.signed_area
                && polygon_contains_polygon(&self.polygon, &inner.polygon))
    }
}

/// Turns traced faces into [`Path`]s, deciding which faces are holes.
///
/// Faces that are not counter-clockwise by more than [`TOLERANCE`] are
/// dropped: these are the clockwise outlines of each connected group of walls
/// and zero-area slivers. A remaining face's nesting depth is the number of
/// other faces enclosing it, either geometrically or by being the only face
/// on the far side of all its walls; odd depth marks it `inside`.
///
/// # Errors
///
/// Returns `ModelError::EntityNotFound` if a loop references a wall or node
/// missing from the plan.
pub fn classify_loops(plan: &Plan, area_id: AreaId, loops: Vec<Vec<PathWall>>) -> Result<Vec<Path>> {
    let traced = loops.len();
    let mut faces = Vec::with_capacity(traced);
    for walls in loops {
        let polygon = resolve_points(plan, &walls)?;
        let signed_area = signed_area_2d(&polygon);
        if signed_area <= TOLERANCE {
            continue;
        }
        faces.push(Face {
            sides: walls.iter().copied().collect(),
            walls,
            polygon,
            signed_area,
        });
    }
    if faces.len() < traced {
        debug!(area = %area_id, dropped = traced - faces.len(), "dropped outlines and slivers");
    }

    let inside: Vec<bool> = faces
        .iter()
        .enumerate()
        .map(|(i, face)| {
            let depth = faces
                .iter()
                .enumerate()
                .filter(|&(j, other)| j != i && other.encloses(face))
                .count();
            depth % 2 == 1
        })
        .collect();

    Ok(faces
        .into_iter()
        .zip(inside)
        .map(|(face, inside)| Path {
            area_id,
            inside,
            signed_area: face.signed_area,
            walls: face.walls,
        })
        .collect())
}
