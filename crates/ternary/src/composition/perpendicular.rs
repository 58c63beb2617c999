//! Perpendicular (altitude) method.
//!
//! Each fraction is the length of the perpendicular from the query point to
//! the edge opposite the component's apex, over that apex's altitude. The three
//! values are computed independently; their sum is not forced to one.

use crate::geom2::{distance, intersect_eps, offset_line, GeometryError, Line, Orientation, Point};
use crate::triangle::{Component, Triangle};

use super::types::{Composition, ProjectionMode, Solution};

pub(super) fn solve_perpendicular(tri: &Triangle, p: Point) -> Result<Solution, GeometryError> {
    let edges = tri.edges();

    // A uses the fixed vertical probe against the bottom edge.
    let drop_a = offset_line(&tri.probes().vertical, p, Orientation::Parallel);
    let (foot_a, a) = foot_and_fraction(tri, &drop_a, &edges.bottom, p, Component::A)?;

    let drop_b = offset_line(&edges.right, p, Orientation::Perpendicular);
    let (foot_b, b) = foot_and_fraction(tri, &drop_b, &edges.right, p, Component::B)?;

    let drop_c = offset_line(&edges.left, p, Orientation::Perpendicular);
    let (foot_c, c) = foot_and_fraction(tri, &drop_c, &edges.left, p, Component::C)?;

    Ok(Solution {
        mode: ProjectionMode::PerpendicularFromVertex,
        point: p,
        composition: Composition { a, b, c },
        guides: [foot_a, foot_b, foot_c],
    })
}

fn foot_and_fraction(
    tri: &Triangle,
    drop: &Line,
    edge: &Line,
    p: Point,
    component: Component,
) -> Result<(Point, f64), GeometryError> {
    let foot = intersect_eps(drop, edge, tri.cfg().eps_det)?;
    Ok((foot, distance(foot, p) / tri.altitude(component)))
}
