use super::{Point2, TOLERANCE};

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Returns the minimum distance from `point` to the segment `a`-`b`.
#[must_use]
pub fn point_to_segment_dist(point: &Point2, a: &Point2, b: &Point2) -> f64 {
    let ab = b - a;
    let len_sq = ab.norm_squared();
    if len_sq < TOLERANCE * TOLERANCE {
        return (point - a).norm();
    }
    let t = ((point - a).dot(&ab) / len_sq).clamp(0.0, 1.0);
    (point - (a + ab * t)).norm()
}

/// Whether `point` lies on one of the polygon's edges, within [`TOLERANCE`].
#[must_use]
pub fn point_on_boundary(point: &Point2, polygon: &[Point2]) -> bool {
    let n = polygon.len();
    (0..n).any(|i| point_to_segment_dist(point, &polygon[i], &polygon[(i + 1) % n]) < TOLERANCE)
}

/// Point-in-polygon test using the winding number.
///
/// Works for either orientation. Points on the boundary give an unspecified
/// answer; callers that care should check [`point_on_boundary`] first.
#[must_use]
pub fn point_in_polygon_2d(point: &Point2, polygon: &[Point2]) -> bool {
    if polygon.len() < 3 {
        return false;
    }
    winding_number_2d(point, polygon) != 0
}

/// Whether `inner` lies inside `outer`.
///
/// Tests the first vertex of `inner` that is not on the boundary of `outer`,
/// falling back to edge midpoints when every vertex touches it. Two polygons
/// sharing all sample points are treated as not nested.
#[must_use]
pub fn polygon_contains_polygon(outer: &[Point2], inner: &[Point2]) -> bool {
    if outer.len() < 3 || inner.is_empty() {
        return false;
    }
    let n = inner.len();
    let midpoints = (0..n).map(|i| nalgebra::center(&inner[i], &inner[(i + 1) % n]));
    inner
        .iter()
        .copied()
        .chain(midpoints)
        .find(|sample| !point_on_boundary(sample, outer))
        .is_some_and(|sample| point_in_polygon_2d(&sample, outer))
}

/// Winding number of `point` with respect to polygon `verts`.
///
/// Non-zero => inside, zero => outside.
fn winding_number_2d(point: &Point2, verts: &[Point2]) -> i32 {
    let n = verts.len();
    let mut winding = 0i32;
    for i in 0..n {
        let v0 = verts[i];
        let v1 = verts[(i + 1) % n];
        let side = (v1 - v0).perp(&(point - v0));

        if v0.y <= point.y {
            if v1.y > point.y && side > 0.0 {
                winding += 1;
            }
        } else if v1.y <= point.y && side < 0.0 {
            winding -= 1;
        }
    }
    winding
}
