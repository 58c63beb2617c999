//! General-form line algebra: construction, offsets, intersection, length.
//!
//! All constructors return `Result` instead of producing NaN; a parallel pair
//! or a zero-length chord is reported to the caller.

use nalgebra::Matrix2;

use super::types::{GeomCfg, GeometryError, Line, Orientation, Point};

/// Line through two distinct points.
///
/// `a = q.y - p.y`, `b = -(q.x - p.x)`, `c = p.y (q.x - p.x) - p.x (q.y - p.y)`.
pub fn make_line(p: Point, q: Point) -> Result<Line, GeometryError> {
    if !(p.iter().all(|v| v.is_finite()) && q.iter().all(|v| v.is_finite())) || p == q {
        return Err(GeometryError::CoincidentPoints);
    }
    let dx = q.x - p.x;
    let dy = q.y - p.y;
    Ok(Line::new(dy, -dx, p.y * dx - p.x * dy))
}

/// Line through `through` that is parallel or perpendicular to `line`.
///
/// Parallel keeps `(a, b)`; perpendicular rotates it to `(b, -a)`.
#[inline]
pub fn offset_line(line: &Line, through: Point, orientation: Orientation) -> Line {
    let (a, b) = (line.a, line.b);
    match orientation {
        Orientation::Parallel => Line::new(a, b, -a * through.x - b * through.y),
        Orientation::Perpendicular => Line::new(b, -a, -(b * through.x - a * through.y)),
    }
}

/// Intersection of two lines using the default tolerance.
#[inline]
pub fn intersect(l1: &Line, l2: &Line) -> Result<Point, GeometryError> {
    intersect_eps(l1, l2, GeomCfg::default().eps_det)
}

/// Intersection via Cramer's rule.
///
/// Fails with `ParallelLines` when `|det| <= eps_det * |n1| * |n2|`, i.e. when
/// the sine of the angle between the lines is below `eps_det`.
pub fn intersect_eps(l1: &Line, l2: &Line, eps_det: f64) -> Result<Point, GeometryError> {
    let det = Matrix2::new(l1.a, l1.b, l2.a, l2.b).determinant();
    let scale = l1.normal().norm() * l2.normal().norm();
    if !det.is_finite() || det.abs() <= eps_det * scale {
        return Err(GeometryError::ParallelLines { det });
    }
    let x = (l1.b * l2.c - l2.b * l1.c) / det;
    let y = (l1.c * l2.a - l2.c * l1.a) / det;
    Ok(Point::new(x, y))
}

/// Euclidean distance between two points.
#[inline]
pub fn distance(p: Point, q: Point) -> f64 {
    (q - p).norm()
}
