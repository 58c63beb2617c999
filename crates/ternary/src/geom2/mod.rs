//! Planar primitives for the ternary diagram.
//!
//! Purpose
//! - General-form lines (`a x + b y + c = 0`) built from point pairs or offset
//!   from existing lines, and their pairwise intersection.
//! - Numerically explicit: near-parallel intersections and zero-length chords
//!   are errors, never NaN.
//!
//! Code cross-refs: `Line`, `GeomCfg`, `GeometryError`, `triangle::Triangle`

mod line;
mod types;

pub use line::{distance, intersect, intersect_eps, make_line, offset_line};
pub use types::{GeomCfg, GeometryError, Line, Orientation, Point};
