//! Geometry primitives: angle conversion, distance, rotation and the two
//! closed-form solvers (line/circle and circle/circle intersection) the
//! frame and rider components are built from.

use glam::{DVec2, dvec2};

use crate::types::{Angle, Coordinates};

#[inline]
pub fn to_radians(deg: f64) -> f64 {
    deg * std::f64::consts::PI / 180.0
}

#[inline]
pub fn to_degrees(rad: f64) -> f64 {
    rad * 180.0 / std::f64::consts::PI
}

#[inline]
pub fn distance(a: Coordinates, b: Coordinates) -> f64 {
    ((b.x - a.x).powi(2) + (b.y - a.y).powi(2)).sqrt()
}

/// Rotate `point` counter-clockwise about `origin`.
pub fn rotate(point: Coordinates, angle: Angle, origin: Coordinates) -> Coordinates {
    let (sin, cos) = angle.radians().sin_cos();
    let d = point - origin;
    dvec2(
        d.x * cos - d.y * sin + origin.x,
        d.x * sin + d.y * cos + origin.y,
    )
}

/// Unit vector pointing at `angle` from the positive x axis.
#[inline]
pub fn direction(angle: Angle) -> DVec2 {
    dvec2(angle.cos(), angle.sin())
}

/// Roots of `a·x² + b·x + c = 0`, smaller root first.
/// Returns None when the discriminant is negative or `a` is zero.
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> Option<(f64, f64)> {
    if a == 0.0 {
        return None;
    }
    let disc = b * b - 4.0 * a * c;
    if disc < 0.0 {
        return None;
    }
    let sq = disc.sqrt();
    let r1 = (-b - sq) / (2.0 * a);
    let r2 = (-b + sq) / (2.0 * a);
    Some((r1.min(r2), r1.max(r2)))
}

/// Intersections of the circle (`c0`, `r0`) with the circle (`c1`, `r1`).
///
/// Uses the radical axis: the point on the centre line at distance
/// `a = (r0² − r1² + d²) / 2d` from `c0`, offset perpendicular by
/// `h = sqrt(r0² − a²)`. Returns None for concentric circles or when the
/// circles do not meet. The first point is on the left of `c0 → c1`.
pub fn circle_intersections(
    c0: Coordinates,
    r0: f64,
    c1: Coordinates,
    r1: f64,
) -> Option<(Coordinates, Coordinates)> {
    let delta = c1 - c0;
    let d = delta.length();
    if d == 0.0 {
        return None;
    }
    let a = (r0 * r0 - r1 * r1 + d * d) / (2.0 * d);
    let h2 = r0 * r0 - a * a;
    if h2 < 0.0 {
        return None;
    }
    let h = h2.sqrt();
    let unit = delta / d;
    let mid = c0 + unit * a;
    let perp = unit.perp();
    Some((mid + perp * h, mid - perp * h))
}

/// Interior angle opposite `opposite` in a triangle with the given sides
/// (law of cosines). None if the triangle cannot close.
pub fn law_of_cosines(adjacent_a: f64, adjacent_b: f64, opposite: f64) -> Option<Angle> {
    let denom = 2.0 * adjacent_a * adjacent_b;
    if denom == 0.0 {
        return None;
    }
    let cos = (adjacent_a * adjacent_a + adjacent_b * adjacent_b - opposite * opposite) / denom;
    if !(-1.0..=1.0).contains(&cos) {
        return None;
    }
    Some(Angle::from_radians(cos.acos()))
}
