//! Geometry core of an interactive ternary (three-component) diagram.
//!
//! A fixed triangle is built once; each query maps a cursor position inside it
//! to fractions (A, B, C) under one of two projections, together with the
//! guide endpoints a renderer needs to draw the construction lines.
//!
//! Layout
//! - `geom2`: general-form lines, offsets, intersection, distance.
//! - `triangle`: apexes, cached edges and probes, strict membership.
//! - `composition`: the parallel and altitude solvers.
//! - `grid`, `sample`: guide lattice and interior samplers.
//! - `tracker`: mode / pin / readout state owned by the harness.

pub mod api;
pub mod composition;
pub mod geom2;
pub mod grid;
pub mod sample;
pub mod tracker;
pub mod triangle;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use composition::{Composition, ProjectionMode, Solution};
pub use geom2::{GeomCfg, GeometryError, Line, Point};
pub use triangle::{Component, DiagramCfg, Triangle};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::composition::{solve, solve_many, Composition, ProjectionMode, Solution};
    pub use crate::geom2::{
        distance, intersect, make_line, offset_line, GeomCfg, GeometryError, Line, Orientation,
        Point,
    };
    pub use crate::grid::{guide_lattice, GuideSegment};
    pub use crate::tracker::{Frame, Input, Readout, Tracker};
    pub use crate::triangle::{Component, DiagramCfg, Interior, Side, Triangle};
    pub use nalgebra::Vector2 as Vec2;
}
