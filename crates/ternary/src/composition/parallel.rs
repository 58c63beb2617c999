//! Parallel-to-edge method.
//!
//! For each component a chord through the query point, parallel to one edge,
//! is cut against a second edge; the fraction is the distance from the cut to
//! the far apex of that edge over the edge length.

use crate::geom2::{distance, intersect_eps, offset_line, GeometryError, Orientation, Point};
use crate::triangle::{Side, Triangle};

use super::types::{Composition, ProjectionMode, Solution};

pub(super) fn solve_parallel(tri: &Triangle, p: Point) -> Result<Solution, GeometryError> {
    let eps = tri.cfg().eps_det;
    let edges = tri.edges();
    let [p0, p1, p2] = tri.apexes();

    // A: horizontal chord meets the right edge; measured from C.
    let chord_a = offset_line(&tri.probes().horizontal, p, Orientation::Parallel);
    let hit_a = intersect_eps(&chord_a, &edges.right, eps)?;
    let a = distance(hit_a, p2) / tri.side_length(Side::Right);

    // B: chord parallel to the right edge meets the left edge; measured from A.
    let chord_b = offset_line(&edges.right, p, Orientation::Parallel);
    let hit_b = intersect_eps(&edges.left, &chord_b, eps)?;
    let b = distance(hit_b, p1) / tri.side_length(Side::Left);

    // C: chord parallel to the left edge meets the bottom edge; measured from B.
    let chord_c = offset_line(&edges.left, p, Orientation::Parallel);
    let hit_c = intersect_eps(&edges.bottom, &chord_c, eps)?;
    let c = distance(hit_c, p0) / tri.side_length(Side::Bottom);

    Ok(Solution {
        mode: ProjectionMode::ParallelToEdge,
        point: p,
        composition: Composition { a, b, c },
        guides: [hit_a, hit_b, hit_c],
    })
}
