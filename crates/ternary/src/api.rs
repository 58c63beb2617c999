//! Flat surface for harnesses (renderers, the CLI).
//!
//! A renderer needs four calls per frame: membership, the solve, the guide
//! lattice (once), and the readout text. They are gathered here under the
//! names the diagram uses.

pub use crate::composition::{solve_many, ProjectionMode, Solution};
pub use crate::grid::{guide_lattice, GuideSegment};
pub use crate::sample::{interior_points, lattice_points};
pub use crate::tracker::{round_to, Readout};
pub use crate::triangle::{DiagramCfg, Triangle};

use crate::geom2::{GeometryError, Point};

/// Evaluate `point` under both methods, in `ProjectionMode::ALL` order.
pub fn solve_both(tri: &Triangle, point: Point) -> Result<[Solution; 2], GeometryError> {
    let [first, second] = ProjectionMode::ALL;
    Ok([
        tri.solve_composition(point, first)?,
        tri.solve_composition(point, second)?,
    ])
}
