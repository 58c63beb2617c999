//! Point → ternary composition.
//!
//! Purpose
//! - Convert a point strictly inside a `Triangle` into fractions (A, B, C)
//!   plus the guide endpoints needed to draw the construction lines.
//! - Two projections, selected per call by `ProjectionMode`; no state is kept
//!   between calls, so repeated queries are bit-identical.
//!
//! Preconditions
//! - `Triangle::solve_composition` rejects exterior and boundary points with
//!   `PointOutsideTriangle`.
//! - `solve` takes an `Interior` from `Triangle::locate`; it only checks that
//!   the `Interior` came from the same apexes, not containment again.
//!
//! Code cross-refs: `parallel::solve_parallel`, `perpendicular::solve_perpendicular`

mod parallel;
mod perpendicular;
mod types;

pub use types::{Composition, ProjectionMode, Solution};

use crate::geom2::{GeometryError, Point};
use crate::triangle::{Interior, Triangle};

/// Solve for a point already located inside `tri`.
///
/// Errors: `PointOutsideTriangle` if `at` was located by a different triangle.
pub fn solve(
    tri: &Triangle,
    at: Interior,
    mode: ProjectionMode,
) -> Result<Solution, GeometryError> {
    if !at.belongs_to(tri) {
        let p = at.point();
        return Err(GeometryError::PointOutsideTriangle { x: p.x, y: p.y });
    }
    match mode {
        ProjectionMode::ParallelToEdge => parallel::solve_parallel(tri, at.point()),
        ProjectionMode::PerpendicularFromVertex => {
            perpendicular::solve_perpendicular(tri, at.point())
        }
    }
}

/// Batch evaluation; one result per input point, in order.
pub fn solve_many(
    tri: &Triangle,
    points: &[Point],
    mode: ProjectionMode,
) -> Vec<Result<Solution, GeometryError>> {
    points
        .iter()
        .map(|&p| tri.solve_composition(p, mode))
        .collect()
}

impl Triangle {
    /// Composition of `p` under `mode`.
    ///
    /// Errors: `PointOutsideTriangle` unless `self.contains(p)`; `ParallelLines`
    /// if a construction line turns out parallel to its target edge.
    pub fn solve_composition(
        &self,
        p: Point,
        mode: ProjectionMode,
    ) -> Result<Solution, GeometryError> {
        let at = self
            .locate(p)
            .ok_or(GeometryError::PointOutsideTriangle { x: p.x, y: p.y })?;
        solve(self, at, mode)
    }
}
