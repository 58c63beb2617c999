//! Basic 2D types and tolerances for the diagram geometry.
//!
//! - `GeomCfg`: centralizes epsilons for determinant, degeneracy, and residual checks.
//! - `Line`: infinite line in general form `a x + b y + c = 0`.
//! - `Orientation`: how a derived line relates to its parent line.
//! - `GeometryError`: every failure the core can report.
//!
//! Code cross-refs: `line::{make_line, offset_line, intersect}`, `triangle::Triangle`

use std::fmt;

use nalgebra::Vector2;

/// Screen-space point (y grows downward).
pub type Point = Vector2<f64>;

/// Geometry configuration (tolerances).
///
/// `eps_det` and `eps_degenerate` are relative: they are scaled by the
/// magnitudes of the quantities they guard, so the same defaults work for
/// unit triangles and for pixel-sized ones.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    /// Two lines are parallel when `|det| <= eps_det * |n1| * |n2|`.
    pub eps_det: f64,
    /// Three apexes are collinear when `|area2| <= eps_degenerate * longest_side²`.
    pub eps_degenerate: f64,
    /// Relative substitution residual accepted for "point lies on line".
    pub eps_residual: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_det: 1e-12,
            eps_degenerate: 1e-12,
            eps_residual: 1e-9,
        }
    }
}

/// Infinite line `a x + b y + c = 0` with `(a, b) != (0, 0)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Line {
    #[inline]
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Normal vector `(a, b)`.
    #[inline]
    pub fn normal(&self) -> Vector2<f64> {
        Vector2::new(self.a, self.b)
    }

    /// Substitution residual `a x + b y + c` (zero on the line).
    #[inline]
    pub fn eval(&self, p: Point) -> f64 {
        self.a * p.x + self.b * p.y + self.c
    }

    /// Unsigned perpendicular distance from `p` to the line.
    #[inline]
    pub fn distance_to(&self, p: Point) -> f64 {
        self.eval(p).abs() / self.normal().norm()
    }

    /// True if `p` lies on the line within the relative residual `eps`.
    ///
    /// The residual is compared against `|n| * (1 + |p|)` so the check does not
    /// depend on the line's scaling or on how far `p` is from the origin.
    pub fn passes_through(&self, p: Point, eps: f64) -> bool {
        self.eval(p).abs() <= eps * self.normal().norm() * (1.0 + p.norm())
    }
}

/// Relation of an offset line to its parent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Parallel,
    Perpendicular,
}

/// Errors surfaced by the geometry core.
#[derive(Clone, Debug, PartialEq)]
pub enum GeometryError {
    /// The three apexes are collinear (or not finite); the triangle is unusable.
    DegenerateTriangle { area2: f64 },
    /// A line was requested through two identical (or non-finite) points.
    CoincidentPoints,
    /// Two lines are parallel or coincident; they have no unique intersection.
    ParallelLines { det: f64 },
    /// A composition was requested for a point not strictly inside the triangle.
    PointOutsideTriangle { x: f64, y: f64 },
    /// A configuration value is out of range.
    InvalidParams { reason: String },
}

impl GeometryError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateTriangle { area2 } => write!(
                f,
                "triangle apexes are collinear (twice signed area = {area2})"
            ),
            Self::CoincidentPoints => write!(f, "a line needs two distinct finite points"),
            Self::ParallelLines { det } => {
                write!(f, "lines are parallel or coincident (det = {det:e})")
            }
            Self::PointOutsideTriangle { x, y } => {
                write!(f, "point ({x}, {y}) is not strictly inside the triangle")
            }
            Self::InvalidParams { reason } => write!(f, "invalid parameters: {reason}"),
        }
    }
}

impl std::error::Error for GeometryError {}
