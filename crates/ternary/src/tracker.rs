//! Per-frame harness state threaded through the geometry core.
//!
//! The diagram keeps three pieces of UI state: the projection mode, whether
//! the probe follows the cursor or stays pinned, and the last readout (kept on
//! screen while the cursor is outside the triangle). They live here as plain
//! fields; the core functions stay pure and receive them as arguments.

use std::fmt;

use crate::composition::{solve, Composition, ProjectionMode, Solution};
use crate::geom2::{GeometryError, Point};
use crate::triangle::Triangle;

/// User actions the diagram reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    /// Freeze the probe at its current point (only while it is inside).
    Pin,
    /// Resume following the cursor.
    Follow,
    /// Switch between the parallel and altitude methods.
    ToggleMode,
}

/// Round to `places` decimals; exact ties go to the even digit.
#[inline]
pub fn round_to(value: f64, places: u32) -> f64 {
    let k = 10f64.powi(places as i32);
    (value * k).round_ties_even() / k
}

/// Composition rounded for display.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Readout {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub places: u32,
}

impl Readout {
    pub fn new(comp: &Composition, places: u32) -> Self {
        Self {
            a: round_to(comp.a, places),
            b: round_to(comp.b, places),
            c: round_to(comp.c, places),
            places,
        }
    }
}

impl fmt::Display for Readout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.places as usize;
        write!(f, "A: {:.p$}  B: {:.p$}  C: {:.p$}", self.a, self.b, self.c)
    }
}

/// Result of one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    /// Probe point actually used (cursor, or the pinned point).
    pub point: Point,
    pub mode: ProjectionMode,
    pub following: bool,
    /// Present only when `point` is strictly inside.
    pub solution: Option<Solution>,
    /// Latest readout, possibly from an earlier frame.
    pub readout: Option<Readout>,
}

#[derive(Clone, Debug)]
pub struct Tracker {
    mode: ProjectionMode,
    following: bool,
    point: Option<Point>,
    inside: bool,
    last: Option<Readout>,
    places: u32,
}

impl Default for Tracker {
    fn default() -> Self {
        Self::new(ProjectionMode::default())
    }
}

impl Tracker {
    pub fn new(mode: ProjectionMode) -> Self {
        Self {
            mode,
            following: true,
            point: None,
            inside: false,
            last: None,
            places: 2,
        }
    }

    /// Override the display precision (default 2 decimals).
    pub fn with_places(mut self, places: u32) -> Self {
        self.places = places;
        self
    }

    #[inline]
    pub fn mode(&self) -> ProjectionMode {
        self.mode
    }

    #[inline]
    pub fn is_following(&self) -> bool {
        self.following
    }

    pub fn follow_status(&self) -> &'static str {
        if self.following {
            "Following"
        } else {
            "Not Following"
        }
    }

    pub fn apply(&mut self, input: Input) {
        match input {
            Input::Pin => {
                if self.inside {
                    self.following = false;
                }
            }
            Input::Follow => self.following = true,
            Input::ToggleMode => self.mode = self.mode.toggled(),
        }
    }

    /// Advance one frame with the current cursor position.
    pub fn frame(&mut self, tri: &Triangle, cursor: Point) -> Result<Frame, GeometryError> {
        let point = match self.point {
            Some(pinned) if !self.following => pinned,
            _ => cursor,
        };
        self.point = Some(point);
        self.inside = false;

        let solution = match tri.locate(point) {
            Some(at) => Some(solve(tri, at, self.mode)?),
            None => None,
        };
        if let Some(sol) = &solution {
            self.inside = true;
            self.last = Some(Readout::new(&sol.composition, self.places));
        }
        Ok(Frame {
            point,
            mode: self.mode,
            following: self.following,
            solution,
            readout: self.last,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triangle::DiagramCfg;
    use nalgebra::vector;

    #[test]
    fn rounding_happens_only_in_readout() {
        let comp = Composition {
            a: 0.33333,
            b: 0.166666,
            c: 0.5000004,
        };
        let r = Readout::new(&comp, 2);
        assert_eq!((r.a, r.b, r.c), (0.33, 0.17, 0.5));
        assert_eq!(r.to_string(), "A: 0.33  B: 0.17  C: 0.50");
        assert_eq!(round_to(0.125, 1), 0.1);
        assert_eq!(round_to(0.125, 2), 0.12);
        assert_eq!(round_to(0.375, 2), 0.38);
        assert_eq!(round_to(2.5, 0), 2.0);
        assert_eq!(round_to(3.5, 0), 4.0);
    }

    #[test]
    fn pin_only_inside_and_follow_resumes() {
        let tri = DiagramCfg::default().triangle().unwrap();
        let inside = tri.centroid();
        let outside = vector![0.0, 0.0];
        let mut t = Tracker::default();

        t.frame(&tri, outside).unwrap();
        t.apply(Input::Pin);
        assert!(t.is_following(), "pin outside must be ignored");

        t.frame(&tri, inside).unwrap();
        t.apply(Input::Pin);
        assert!(!t.is_following());
        assert_eq!(t.follow_status(), "Not Following");

        let f = t.frame(&tri, outside).unwrap();
        assert_eq!(f.point, inside);
        assert!(f.solution.is_some());

        t.apply(Input::Follow);
        let f = t.frame(&tri, outside).unwrap();
        assert_eq!(f.point, outside);
        assert!(f.solution.is_none());
    }

    #[test]
    fn readout_survives_leaving_the_triangle() {
        let tri = DiagramCfg::default().triangle().unwrap();
        let mut t = Tracker::default();
        assert!(t.frame(&tri, vector![0.0, 0.0]).unwrap().readout.is_none());
        let inside = t.frame(&tri, tri.centroid()).unwrap();
        let outside = t.frame(&tri, vector![0.0, 0.0]).unwrap();
        assert!(outside.solution.is_none());
        assert_eq!(outside.readout, inside.readout);
        assert_eq!(outside.readout.unwrap().to_string(), "A: 0.33  B: 0.33  C: 0.33");
    }

    #[test]
    fn toggle_mode_changes_solver() {
        let tri = DiagramCfg::default().triangle().unwrap();
        let mut t = Tracker::new(ProjectionMode::ParallelToEdge);
        let p = tri.centroid() + vector![20.0, 10.0];
        let par = t.frame(&tri, p).unwrap().solution.unwrap();
        t.apply(Input::ToggleMode);
        assert_eq!(t.mode().status(), "Using Altitude Method");
        let alt = t.frame(&tri, p).unwrap().solution.unwrap();
        assert_eq!(alt.mode, ProjectionMode::PerpendicularFromVertex);
        assert_ne!(par.guides, alt.guides);
        assert!((par.composition.sum() - alt.composition.sum()).abs() < 1e-9);
    }
}
