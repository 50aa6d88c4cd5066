use super::{Point2, Vector2, TOLERANCE};

/// Upper bound (exclusive) of [`turning_measure`], standing in for a full turn.
pub const FULL_TURN_MEASURE: f64 = 4.0;

/// Returns the unit direction from `from` to `to`, or the zero vector when the
/// two points coincide.
#[must_use]
pub fn unit_direction(from: &Point2, to: &Point2) -> Vector2 {
    (to - from)
        .try_normalize(TOLERANCE)
        .unwrap_or_else(Vector2::zeros)
}

/// Order-preserving stand-in for the counter-clockwise angle swept from
/// `a` to `b`, both unit (or zero) vectors.
///
/// Maps `[0, 2pi)` monotonically onto `[0, 4)` using only the cross and dot
/// products: each quarter turn occupies one unit of the range.
/// A zero vector on either side yields `0`.
#[must_use]
pub fn pseudo_angle(a: &Vector2, b: &Vector2) -> f64 {
    let sin = a.perp(b);
    let cos = a.dot(b);
    if cos < 0.0 {
        2.0 - sin
    } else if sin < 0.0 {
        FULL_TURN_MEASURE + sin
    } else {
        sin
    }
}

/// Turning measure at `origin` from the edge leading back to `back` round to
/// the edge leading out to `candidate`, swept counter-clockwise.
///
/// The way back measures `0`; a larger value means the candidate lies further
/// round counter-clockwise from the way back, i.e. a sharper left turn for a
/// walker arriving from `back`.
#[must_use]
pub fn turning_measure(origin: &Point2, back: &Point2, candidate: &Point2) -> f64 {
    let back_dir = unit_direction(origin, back);
    let out_dir = unit_direction(origin, candidate);
    pseudo_angle(&back_dir, &out_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn quarter_turns_map_to_integers() {
        let east = Vector2::new(1.0, 0.0);
        assert_abs_diff_eq!(pseudo_angle(&east, &Vector2::new(1.0, 0.0)), 0.0);
        assert_abs_diff_eq!(pseudo_angle(&east, &Vector2::new(0.0, 1.0)), 1.0);
        assert_abs_diff_eq!(pseudo_angle(&east, &Vector2::new(-1.0, 0.0)), 2.0);
        assert_abs_diff_eq!(pseudo_angle(&east, &Vector2::new(0.0, -1.0)), 3.0);
    }

    #[test]
    fn measure_is_monotonic_over_full_turn() {
        let start = Vector2::new(1.0, 0.0);
        let mut last = -1.0;
        for step in 0..360 {
            let theta = f64::from(step).to_radians();
            let dir = Vector2::new(theta.cos(), theta.sin());
            let m = pseudo_angle(&start, &dir);
            assert!(m > last, "not monotonic at {step} degrees: {m} <= {last}");
            assert!((0.0..FULL_TURN_MEASURE).contains(&m));
            last = m;
        }
    }

    #[test]
    fn measure_is_rotation_invariant() {
        let a = Vector2::new(0.6, 0.8);
        let b = Vector2::new(-0.8, 0.6);
        assert_abs_diff_eq!(pseudo_angle(&a, &b), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn zero_vectors_measure_lowest() {
        let zero = Vector2::zeros();
        let east = Vector2::new(1.0, 0.0);
        assert_abs_diff_eq!(pseudo_angle(&zero, &east), 0.0);
        assert_abs_diff_eq!(pseudo_angle(&east, &zero), 0.0);
    }

    #[test]
    fn unit_direction_of_coincident_points_is_zero() {
        let d = unit_direction(&p(1.0, 1.0), &p(1.0, 1.0));
        assert_abs_diff_eq!(d.norm(), 0.0);
    }

    #[test]
    fn turning_measure_left_turn_beats_right_turn() {
        // Arriving at (1,0) from the origin, heading east.
        let origin = p(1.0, 0.0);
        let back = p(0.0, 0.0);
        let left = turning_measure(&origin, &back, &p(1.0, 1.0));
        let straight = turning_measure(&origin, &back, &p(2.0, 0.0));
        let right = turning_measure(&origin, &back, &p(1.0, -1.0));
        assert!(left > straight && straight > right);
        assert_abs_diff_eq!(left, 3.0);
        assert_abs_diff_eq!(turning_measure(&origin, &back, &back), 0.0);
    }
}
