//! Interior point samplers for batch evaluation.
//!
//! - `interior_points`: seeded uniform draws (reproducible per seed).
//! - `lattice_points`: regular row-major grid over the bounding box.
//!
//! Both return only points that pass `Triangle::contains`, so every output is a
//! valid `solve_composition` input.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geom2::{GeometryError, Point};
use crate::triangle::Triangle;

/// Largest number of points a single sampler call may produce or visit.
pub const MAX_POINTS: usize = 1 << 24;

/// Up to `count` uniformly distributed interior points.
///
/// Draws `(u, v)` on the unit square and folds the upper half back into the
/// simplex. Samples landing exactly on the boundary are dropped, so the result
/// can be shorter than `count` (in practice it almost never is).
///
/// Errors: `InvalidParams` if `count > MAX_POINTS`.
pub fn interior_points(
    tri: &Triangle,
    count: usize,
    seed: u64,
) -> Result<Vec<Point>, GeometryError> {
    if count > MAX_POINTS {
        return Err(GeometryError::invalid(format!(
            "sample count {count} exceeds {MAX_POINTS}"
        )));
    }
    let mut rng = StdRng::seed_from_u64(seed);
    let [p0, p1, p2] = tri.apexes();
    let (e1, e2) = (p1 - p0, p2 - p0);
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        let (mut u, mut v): (f64, f64) = (rng.gen(), rng.gen());
        if u + v > 1.0 {
            u = 1.0 - u;
            v = 1.0 - v;
        }
        let p = p0 + e1 * u + e2 * v;
        if tri.contains(p) {
            out.push(p);
        }
    }
    Ok(out)
}

/// Interior points of the grid `min + (i, j) * step` over the bounding box.
///
/// Errors: `InvalidParams` for a non-positive step, or one so small that the
/// grid would exceed `MAX_POINTS` nodes.
pub fn lattice_points(tri: &Triangle, step: f64) -> Result<Vec<Point>, GeometryError> {
    if !(step.is_finite() && step > 0.0) {
        return Err(GeometryError::invalid(format!(
            "lattice step must be finite and > 0 (got {step})"
        )));
    }
    let (lo, hi) = tri.bounds();
    let nx = ((hi.x - lo.x) / step).floor();
    let ny = ((hi.y - lo.y) / step).floor();
    if (nx + 1.0) * (ny + 1.0) > MAX_POINTS as f64 {
        return Err(GeometryError::invalid(format!(
            "lattice step {step} needs more than {MAX_POINTS} grid nodes"
        )));
    }
    let (nx, ny) = (nx as usize, ny as usize);
    let mut out = Vec::new();
    for j in 0..=ny {
        for i in 0..=nx {
            let p = Point::new(lo.x + i as f64 * step, lo.y + j as f64 * step);
            if tri.contains(p) {
                out.push(p);
            }
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triangle::DiagramCfg;

    #[test]
    fn interior_points_are_reproducible_and_inside() {
        let tri = DiagramCfg::default().triangle().unwrap();
        let a = interior_points(&tri, 500, 42).unwrap();
        let b = interior_points(&tri, 500, 42).unwrap();
        assert_eq!(a, b);
        assert!(a.len() >= 495);
        assert!(a.iter().all(|p| tri.contains(*p)));
        assert_ne!(a, interior_points(&tri, 500, 43).unwrap());
    }

    #[test]
    fn interior_points_cover_all_three_corners() {
        let tri = DiagramCfg::default().triangle().unwrap();
        let pts = interior_points(&tri, 2000, 1).unwrap();
        let c = tri.centroid();
        // Each apex region (closer to the apex than the centroid) gets hits.
        for apex in tri.apexes() {
            let near = pts
                .iter()
                .filter(|p| (**p - apex).norm() < (c - apex).norm() / 2.0)
                .count();
            assert!(near > 0);
        }
    }

    #[test]
    fn lattice_points_inside_and_validated() {
        let tri = DiagramCfg::default().triangle().unwrap();
        let pts = lattice_points(&tri, 25.0).unwrap();
        assert!(!pts.is_empty());
        assert!(pts.iter().all(|p| tri.contains(*p)));
        // Roughly area / step², within a generous band.
        let expected = tri.area2().abs() / 2.0 / (25.0 * 25.0);
        let n = pts.len() as f64;
        assert!(n > 0.6 * expected && n < 1.2 * expected, "{n} vs {expected}");
        assert!(lattice_points(&tri, 0.0).is_err());
        assert!(lattice_points(&tri, f64::NAN).is_err());
    }

    #[test]
    fn oversized_requests_are_refused() {
        let tri = DiagramCfg::default().triangle().unwrap();
        assert!(matches!(
            interior_points(&tri, usize::MAX, 0),
            Err(GeometryError::InvalidParams { .. })
        ));
        assert!(matches!(
            interior_points(&tri, MAX_POINTS + 1, 0),
            Err(GeometryError::InvalidParams { .. })
        ));
        assert!(matches!(
            lattice_points(&tri, 1e-9),
            Err(GeometryError::InvalidParams { .. })
        ));
        assert!(lattice_points(&tri, f64::MIN_POSITIVE).is_err());
        assert!(interior_points(&tri, 0, 0).unwrap().is_empty());
    }
}
