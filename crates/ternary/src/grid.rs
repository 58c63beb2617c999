//! Guide lattice: the inner grid lines of the diagram.
//!
//! For `n` divisions every family gets `n - 1` chords at levels `i / n`. Each
//! chord is an edge line offset through a point on another edge, cut against
//! the remaining two edges.

use crate::geom2::{intersect_eps, offset_line, GeometryError, Line, Orientation, Point};
use crate::triangle::{Component, Triangle};

/// Chord on which `family`'s fraction is constant and equal to `level`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GuideSegment {
    pub family: Component,
    pub level: f64,
    pub from: Point,
    pub to: Point,
}

/// Most divisions `guide_lattice` accepts.
pub const MAX_DIVISIONS: usize = 10_000;

/// All guide chords for `divisions` steps, ordered by level then family (A, C, B).
pub fn guide_lattice(
    tri: &Triangle,
    divisions: usize,
) -> Result<Vec<GuideSegment>, GeometryError> {
    if divisions == 0 || divisions > MAX_DIVISIONS {
        return Err(GeometryError::invalid(format!(
            "divisions must be in 1..={MAX_DIVISIONS} (got {divisions})"
        )));
    }
    let eps = tri.cfg().eps_det;
    let e = tri.edges();
    let [p0, p1, p2] = tri.apexes();
    let n = divisions as f64;

    let chord = |base: &Line,
                 through: Point,
                 ends: [&Line; 2]|
     -> Result<(Point, Point), GeometryError> {
        let line = offset_line(base, through, Orientation::Parallel);
        Ok((
            intersect_eps(&line, ends[0], eps)?,
            intersect_eps(&line, ends[1], eps)?,
        ))
    };

    let mut out = Vec::with_capacity(3 * divisions.saturating_sub(1));
    for i in 1..divisions {
        let f = i as f64 / n;

        // Parallel to the bottom edge, stepping down the left edge from B.
        let (from, to) = chord(&e.bottom, p0 + (p1 - p0) * f, [&e.left, &e.right])?;
        out.push(GuideSegment {
            family: Component::A,
            level: f,
            from,
            to,
        });

        // Parallel to the left edge, stepping along the bottom from B.
        let (from, to) = chord(&e.left, p0 + (p2 - p0) * f, [&e.bottom, &e.right])?;
        out.push(GuideSegment {
            family: Component::C,
            level: f,
            from,
            to,
        });

        // Parallel to the right edge, stepping along the bottom from C.
        let (from, to) = chord(&e.right, p2 + (p0 - p2) * f, [&e.bottom, &e.left])?;
        out.push(GuideSegment {
            family: Component::B,
            level: f,
            from,
            to,
        });
    }
    Ok(out)
}
