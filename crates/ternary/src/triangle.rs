//! The diagram triangle: apexes, cached edge lines, and membership.
//!
//! Conventions
//! - Apexes are `p0` (left-bottom), `p1` (top), `p2` (right-bottom) in screen
//!   space (y grows downward).
//! - Component A sits at `p1`, B at `p0`, C at `p2`.
//! - Edges: left = p0–p1, right = p1–p2, bottom = p0–p2.
//!
//! Everything derivable from the apexes (edge lines, probe directions, signed
//! area, side lengths, altitudes) is computed once in the constructor; queries
//! only read the cached values.

use crate::geom2::{
    distance, make_line, offset_line, GeomCfg, GeometryError, Line, Orientation, Point,
};

/// One of the three mixture components.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Component {
    A,
    B,
    C,
}

impl Component {
    pub const ALL: [Component; 3] = [Component::A, Component::B, Component::C];

    /// Index into `Triangle::apexes()`.
    #[inline]
    pub fn apex_index(self) -> usize {
        match self {
            Component::A => 1,
            Component::B => 0,
            Component::C => 2,
        }
    }

    /// The edge that does not touch this component's apex.
    #[inline]
    pub fn opposite(self) -> Side {
        match self {
            Component::A => Side::Bottom,
            Component::B => Side::Right,
            Component::C => Side::Left,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Component::A => "A",
            Component::B => "B",
            Component::C => "C",
        }
    }
}

/// Named triangle edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
    Bottom,
}

/// General-form lines of the three edges.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edges {
    pub left: Line,
    pub right: Line,
    pub bottom: Line,
}

impl Edges {
    #[inline]
    pub fn get(&self, side: Side) -> &Line {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
            Side::Bottom => &self.bottom,
        }
    }
}

/// Fixed probe directions through the origin.
///
/// `horizontal` is parallel to the bottom edge, `vertical` perpendicular to it.
/// Offset them through a query point with `offset_line(.., Parallel)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Probes {
    pub horizontal: Line,
    pub vertical: Line,
}

/// A point proven to be strictly inside a triangle (see `Triangle::locate`).
///
/// Carries the apexes of the triangle that located it, so a solve against a
/// different triangle can be refused.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interior {
    point: Point,
    apexes: [Point; 3],
}

impl Interior {
    #[inline]
    pub fn point(&self) -> Point {
        self.point
    }

    /// True if this point was located by `tri` (same apexes).
    #[inline]
    pub fn belongs_to(&self, tri: &Triangle) -> bool {
        self.apexes == tri.apexes
    }
}

/// Immutable, non-degenerate triangle with cached derived geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    apexes: [Point; 3],
    edges: Edges,
    probes: Probes,
    /// Twice the signed area of (p0, p1, p2).
    area2: f64,
    sign: f64,
    /// Indexed like `Side as usize`: left, right, bottom.
    side_lengths: [f64; 3],
    cfg: GeomCfg,
}

impl Triangle {
    /// Build from apexes `p0` (left-bottom), `p1` (top), `p2` (right-bottom).
    pub fn new(p0: Point, p1: Point, p2: Point) -> Result<Self, GeometryError> {
        Self::with_cfg(p0, p1, p2, GeomCfg::default())
    }

    pub fn with_cfg(
        p0: Point,
        p1: Point,
        p2: Point,
        cfg: GeomCfg,
    ) -> Result<Self, GeometryError> {
        let finite = [p0, p1, p2].iter().all(|p| p.iter().all(|v| v.is_finite()));
        let area2 = -p1.y * p2.x + p0.y * (-p1.x + p2.x) + p0.x * (p1.y - p2.y) + p1.x * p2.y;
        let side_lengths = [distance(p0, p1), distance(p1, p2), distance(p0, p2)];
        let longest = side_lengths.iter().copied().fold(0.0, f64::max);
        if !finite || !area2.is_finite() || area2.abs() <= cfg.eps_degenerate * longest * longest {
            return Err(GeometryError::DegenerateTriangle { area2 });
        }

        let edges = Edges {
            left: make_line(p0, p1)?,
            right: make_line(p1, p2)?,
            bottom: make_line(p0, p2)?,
        };
        let origin = Point::zeros();
        let probes = Probes {
            horizontal: offset_line(&edges.bottom, origin, Orientation::Parallel),
            vertical: offset_line(&edges.bottom, origin, Orientation::Perpendicular),
        };
        debug_assert!(
            [(&edges.left, p0, p1), (&edges.right, p1, p2), (&edges.bottom, p0, p2)]
                .iter()
                .all(|(l, u, v)| l.passes_through(*u, cfg.eps_residual)
                    && l.passes_through(*v, cfg.eps_residual)),
            "edge line misses its apexes"
        );

        Ok(Self {
            apexes: [p0, p1, p2],
            edges,
            probes,
            area2,
            sign: if area2 < 0.0 { -1.0 } else { 1.0 },
            side_lengths,
            cfg,
        })
    }

    /// Equilateral preset hanging from `top`: base below it, altitude `side * sin(60°)`.
    pub fn equilateral(side: f64, top: Point) -> Result<Self, GeometryError> {
        if !(side.is_finite() && side > 0.0) {
            return Err(GeometryError::invalid(format!(
                "side length must be finite and > 0 (got {side})"
            )));
        }
        let altitude = side * (std::f64::consts::PI / 3.0).sin();
        let half = side / 2.0;
        let p0 = Point::new(top.x - half, top.y + altitude);
        let p2 = Point::new(top.x + half, top.y + altitude);
        Self::new(p0, top, p2)
    }

    #[inline]
    pub fn apexes(&self) -> [Point; 3] {
        self.apexes
    }

    #[inline]
    pub fn apex(&self, component: Component) -> Point {
        self.apexes[component.apex_index()]
    }

    #[inline]
    pub fn edges(&self) -> &Edges {
        &self.edges
    }

    #[inline]
    pub fn probes(&self) -> &Probes {
        &self.probes
    }

    #[inline]
    pub fn cfg(&self) -> &GeomCfg {
        &self.cfg
    }

    /// Twice the signed area of (p0, p1, p2).
    #[inline]
    pub fn area2(&self) -> f64 {
        self.area2
    }

    #[inline]
    pub fn side_length(&self, side: Side) -> f64 {
        self.side_lengths[side as usize]
    }

    /// Perpendicular height from the component's apex to the opposite edge.
    #[inline]
    pub fn altitude(&self, component: Component) -> f64 {
        self.area2.abs() / self.side_length(component.opposite())
    }

    pub fn centroid(&self) -> Point {
        let [p0, p1, p2] = self.apexes;
        (p0 + p1 + p2) / 3.0
    }

    /// Axis-aligned bounding box `(min, max)`.
    pub fn bounds(&self) -> (Point, Point) {
        let [p0, p1, p2] = self.apexes;
        (p0.inf(&p1).inf(&p2), p0.sup(&p1).sup(&p2))
    }

    /// Strict membership test; points on an edge or apex are outside.
    pub fn contains(&self, p: Point) -> bool {
        let [p0, p1, p2] = self.apexes;
        let sign = self.sign;
        let s = (p0.y * p2.x - p0.x * p2.y + (p2.y - p0.y) * p.x + (p0.x - p2.x) * p.y) * sign;
        let t = (p0.x * p1.y - p0.y * p1.x + (p0.y - p1.y) * p.x + (p1.x - p0.x) * p.y) * sign;
        s > 0.0 && t > 0.0 && (s + t) < self.area2 * sign
    }

    /// `Some(Interior)` iff `contains(p)`.
    #[inline]
    pub fn locate(&self, p: Point) -> Option<Interior> {
        self.contains(p).then_some(Interior {
            point: p,
            apexes: self.apexes,
        })
    }
}

/// Diagram layout: equilateral triangle whose top apex sits at `origin + offset`.
///
/// Defaults reproduce the classic 650 px canvas: side 500, origin (256, 64),
/// offset `650 / 2 - 256`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DiagramCfg {
    pub side_length: f64,
    pub origin: Point,
    pub offset: f64,
}

impl Default for DiagramCfg {
    fn default() -> Self {
        Self::for_canvas(650.0)
    }
}

impl DiagramCfg {
    /// Center the top apex horizontally on a square canvas of width `canvas`.
    pub fn for_canvas(canvas: f64) -> Self {
        let origin = Point::new(256.0, 64.0);
        Self {
            side_length: 500.0,
            origin,
            offset: canvas / 2.0 - origin.x,
        }
    }

    #[inline]
    pub fn top(&self) -> Point {
        self.origin.add_scalar(self.offset)
    }

    pub fn triangle(&self) -> Result<Triangle, GeometryError> {
        Triangle::equilateral(self.side_length, self.top())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    fn reference() -> Triangle {
        Triangle::new(vector![32.0, 448.0], vector![256.0, 64.0], vector![480.0, 448.0]).unwrap()
    }

    #[test]
    fn centroid_inside_apexes_and_far_points_outside() {
        let tri = reference();
        assert!(tri.contains(tri.centroid()));
        assert!(tri.contains(vector![256.0, 320.0]));
        for p in tri.apexes() {
            assert!(!tri.contains(p), "apex {p:?} must be outside");
        }
        assert!(!tri.contains(vector![0.0, 0.0]));
        assert!(tri.locate(vector![0.0, 0.0]).is_none());
    }

    #[test]
    fn edge_midpoints_are_outside() {
        let tri = reference();
        let [p0, p1, p2] = tri.apexes();
        for m in [(p0 + p1) / 2.0, (p1 + p2) / 2.0, (p0 + p2) / 2.0] {
            assert!(!tri.contains(m));
        }
        // Just above the bottom edge is inside.
        assert!(tri.contains(vector![256.0, 447.999]));
    }

    #[test]
    fn contains_is_orientation_independent() {
        let tri = reference();
        let [p0, p1, p2] = tri.apexes();
        let flipped = Triangle::new(p2, p1, p0).unwrap();
        assert!(tri.area2() > 0.0 && flipped.area2() < 0.0);
        for p in [tri.centroid(), vector![256.0, 100.0], vector![0.0, 0.0], p1] {
            assert_eq!(tri.contains(p), flipped.contains(p));
        }
    }

    #[test]
    fn degenerate_triangles_rejected() {
        let r = Triangle::new(vector![0.0, 0.0], vector![1.0, 1.0], vector![2.0, 2.0]);
        assert!(matches!(r, Err(GeometryError::DegenerateTriangle { .. })));
        let p = vector![3.0, 3.0];
        assert!(Triangle::new(p, p, p).is_err());
        let far = vector![f64::INFINITY, 0.0];
        assert!(Triangle::new(far, vector![1.0, 0.0], vector![0.0, 1.0]).is_err());
        assert!(matches!(
            Triangle::equilateral(0.0, vector![0.0, 0.0]),
            Err(GeometryError::InvalidParams { .. })
        ));
    }

    #[test]
    fn centroid_inside_any_triangle_seeded() {
        use rand::{rngs::StdRng, Rng, SeedableRng};
        let mut rng = StdRng::seed_from_u64(11);
        let mut checked = 0;
        for _ in 0..500 {
            // Integer coordinates keep the apex edge functions exactly zero.
            let mut pt = || {
                vector![
                    rng.gen_range(-1000i32..1000) as f64,
                    rng.gen_range(-1000i32..1000) as f64
                ]
            };
            let (p0, p1, p2) = (pt(), pt(), pt());
            let Ok(tri) = Triangle::new(p0, p1, p2) else {
                continue;
            };
            assert!(tri.contains(tri.centroid()), "{tri:?}");
            for apex in tri.apexes() {
                assert!(!tri.contains(apex));
            }
            checked += 1;
        }
        assert!(checked > 450);
    }

    #[test]
    fn edges_pass_through_their_apexes() {
        let tri = DiagramCfg::default().triangle().unwrap();
        let [p0, p1, p2] = tri.apexes();
        let e = tri.edges();
        for (line, u, v) in [(e.left, p0, p1), (e.right, p1, p2), (e.bottom, p0, p2)] {
            assert!(line.passes_through(u, 1e-12));
            assert!(line.passes_through(v, 1e-12));
        }
    }

    #[test]
    fn equilateral_preset_geometry() {
        let cfg = DiagramCfg::default();
        assert_eq!(cfg.offset, 69.0);
        let tri = cfg.triangle().unwrap();
        assert_eq!(tri.apex(Component::A), vector![325.0, 133.0]);
        let alt = 500.0 * (std::f64::consts::PI / 3.0).sin();
        for c in Component::ALL {
            assert!((tri.altitude(c) - alt).abs() < 1e-9);
        }
        for s in [Side::Left, Side::Right, Side::Bottom] {
            assert!((tri.side_length(s) - 500.0).abs() < 1e-9);
        }
        // Bottom edge is horizontal, so the probes are the screen axes.
        let probes = tri.probes();
        assert!(probes.horizontal.a.abs() < 1e-12 && probes.horizontal.c == 0.0);
        assert!(probes.vertical.b.abs() < 1e-12 && probes.vertical.c == 0.0);
    }

    #[test]
    fn bounds_cover_apexes() {
        let (lo, hi) = reference().bounds();
        assert_eq!(lo, vector![32.0, 64.0]);
        assert_eq!(hi, vector![480.0, 448.0]);
    }
}
