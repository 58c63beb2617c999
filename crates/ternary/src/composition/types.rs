use std::fmt;
use std::str::FromStr;

use crate::geom2::Point;
use crate::triangle::Component;

/// Which projection turns a point into a composition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ProjectionMode {
    /// Chords parallel to the edges, measured along the edges.
    #[default]
    ParallelToEdge,
    /// Perpendicular distance to each edge over the altitude.
    PerpendicularFromVertex,
}

impl ProjectionMode {
    pub const ALL: [ProjectionMode; 2] = [
        ProjectionMode::ParallelToEdge,
        ProjectionMode::PerpendicularFromVertex,
    ];

    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            Self::ParallelToEdge => Self::PerpendicularFromVertex,
            Self::PerpendicularFromVertex => Self::ParallelToEdge,
        }
    }

    /// Short machine name, also accepted by `FromStr`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ParallelToEdge => "parallel",
            Self::PerpendicularFromVertex => "altitude",
        }
    }

    /// Status line shown by the diagram.
    pub fn status(self) -> &'static str {
        match self {
            Self::ParallelToEdge => "Using Parallel Method",
            Self::PerpendicularFromVertex => "Using Altitude Method",
        }
    }
}

impl fmt::Display for ProjectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "parallel" | "parallel-to-edge" => Ok(Self::ParallelToEdge),
            "altitude" | "perpendicular" | "perpendicular-from-vertex" => {
                Ok(Self::PerpendicularFromVertex)
            }
            other => Err(format!("unknown projection mode `{other}`")),
        }
    }
}

/// Unrounded component fractions.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Composition {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Composition {
    #[inline]
    pub fn get(&self, component: Component) -> f64 {
        match component {
            Component::A => self.a,
            Component::B => self.b,
            Component::C => self.c,
        }
    }

    #[inline]
    pub fn sum(&self) -> f64 {
        self.a + self.b + self.c
    }

    #[inline]
    pub fn to_array(&self) -> [f64; 3] {
        [self.a, self.b, self.c]
    }
}

/// Composition plus the guide endpoints (A, B, C order) used to draw the
/// construction lines from the query point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Solution {
    pub mode: ProjectionMode,
    pub point: Point,
    pub composition: Composition,
    pub guides: [Point; 3],
}

impl Solution {
    #[inline]
    pub fn guide(&self, component: Component) -> Point {
        match component {
            Component::A => self.guides[0],
            Component::B => self.guides[1],
            Component::C => self.guides[2],
        }
    }
}
