//! # Geometric Predicates
//!
//! Distance, volume and containment tests shared by the hull builder.
//!
//! Every comparison that can hit an exact tie takes the scale-aware tolerance
//! computed by [`config::constants::hull_epsilon`]. Predicates assume their
//! inputs were already checked for degeneracy by the caller.

use glam::DVec3;

/// Squared distance from `p` to the infinite line through `a` and `b`.
///
/// `a` and `b` must be distinct.
///
/// # Example
///
/// ```rust
/// use lod_outside::geometry::point_line_distance_sq;
/// use glam::DVec3;
///
/// let d = point_line_distance_sq(DVec3::ZERO, DVec3::X, DVec3::new(0.5, 2.0, 0.0));
/// assert_eq!(d, 4.0);
/// ```
#[inline]
pub fn point_line_distance_sq(a: DVec3, b: DVec3, p: DVec3) -> f64 {
    let ab = b - a;
    ab.cross(a - p).length_squared() / ab.length_squared()
}

/// Unsigned volume of the tetrahedron `(a, b, c, d)`.
///
/// # Example
///
/// ```rust
/// use lod_outside::geometry::tetrahedron_volume;
/// use glam::DVec3;
///
/// let v = tetrahedron_volume(DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::Z);
/// assert!((v - 1.0 / 6.0).abs() < 1e-15);
/// ```
#[inline]
pub fn tetrahedron_volume(a: DVec3, b: DVec3, c: DVec3, d: DVec3) -> f64 {
    (a - d).dot((b - d).cross(c - d)).abs() / 6.0
}

/// Returns true if every coordinate of `p0` and `p1` differs by at most `epsilon`.
#[inline]
pub fn same_position(p0: DVec3, p1: DVec3, epsilon: f64) -> bool {
    (p0 - p1).abs().cmple(DVec3::splat(epsilon)).all()
}

/// Signed side of `p` relative to the directed edge `a -> b` inside a plane
/// with normal `n`.
///
/// Positive values lie to the left of the edge for counter-clockwise winding
/// around `n`.
#[inline]
pub fn edge_side(p: DVec3, a: DVec3, b: DVec3, n: DVec3) -> f64 {
    n.cross(b - a).dot(p - a)
}

/// Returns true if `p` lies on the segment `a -> b`, excluding `a` itself.
///
/// `p` is assumed to already lie on the line through `a` and `b`. The end
/// point `b` counts as inside; `a` does not, so a point shared by two edges
/// of a triangle is only claimed by the edge it ends.
///
/// # Example
///
/// ```rust
/// use lod_outside::geometry::is_inside_segment;
/// use glam::DVec3;
///
/// let eps = 1e-12;
/// assert!(is_inside_segment(DVec3::new(0.5, 0.0, 0.0), DVec3::ZERO, DVec3::X, eps));
/// assert!(is_inside_segment(DVec3::X, DVec3::ZERO, DVec3::X, eps));
/// assert!(!is_inside_segment(DVec3::ZERO, DVec3::ZERO, DVec3::X, eps));
/// assert!(!is_inside_segment(DVec3::new(-0.5, 0.0, 0.0), DVec3::ZERO, DVec3::X, eps));
/// ```
pub fn is_inside_segment(p: DVec3, a: DVec3, b: DVec3, epsilon: f64) -> bool {
    let edge = b - a;
    let offset = p - a;
    same_position(p, b, epsilon)
        || (edge.dot(offset) > 0.0 && edge.length_squared() > offset.length_squared())
}

/// Returns true if `p` lies inside the triangle `corners` with normal `n`.
///
/// `p` is assumed to lie on the triangle plane. A point within `epsilon` of
/// an edge line is resolved by the 1-D segment test of that edge alone.
/// The triangle must not have coincident corners.
pub fn is_inside_triangle(p: DVec3, corners: [DVec3; 3], n: DVec3, epsilon: f64) -> bool {
    let [p0, p1, p2] = corners;
    debug_assert!(
        !same_position(p0, p1, epsilon)
            && !same_position(p1, p2, epsilon)
            && !same_position(p2, p0, epsilon),
        "malformed triangle"
    );

    let d0 = edge_side(p, p0, p1, n);
    if d0.abs() <= epsilon {
        return is_inside_segment(p, p0, p1, epsilon);
    }

    let d1 = edge_side(p, p1, p2, n);
    if d1.abs() <= epsilon {
        return is_inside_segment(p, p1, p2, epsilon);
    }

    if (d0 < 0.0) != (d1 < 0.0) {
        return false;
    }

    let d2 = edge_side(p, p2, p0, n);
    if d2.abs() <= epsilon {
        return is_inside_segment(p, p2, p0, epsilon);
    }

    (d1 < 0.0) == (d2 < 0.0)
}
