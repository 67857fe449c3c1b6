use super::error::EngineError;
use crate::core::geometry::sphere::sample_sphere;
use nalgebra::Point3;
use tracing::{debug, instrument};

/// Half-width of the binary-search window around the regression estimate.
const SEARCH_WINDOW: f64 = 500.0;

/// Tunable constants of the maximum-packing search.
///
/// The defaults encode the silica-bead model the regression was fitted
/// against: the effective sphere radius is corrected by the physical radius
/// of a reference silica bead, and the initial count estimate comes from a
/// quadratic fit `a·x² + b·x + c` in `x = radius / bead_diameter`. The fit
/// only bounds the search window; the binary search finds the exact boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PackingParams {
    /// Physical radius of the reference bead used to correct the sphere
    /// radius, in nm. Default is the silica bead radius, 0.40323 / 2.
    pub reference_bead_radius: f64,
    /// Quadratic coefficient of the count estimate.
    pub regression_a: f64,
    /// Linear coefficient of the count estimate.
    pub regression_b: f64,
    /// Constant coefficient of the count estimate.
    pub regression_c: f64,
}

impl Default for PackingParams {
    fn default() -> Self {
        Self {
            reference_bead_radius: 0.40323 / 2.0,
            regression_a: 9.4379,
            regression_b: 0.6826,
            regression_c: -1.3333,
        }
    }
}

impl PackingParams {
    /// Sphere radius corrected for the reference bead model.
    pub fn effective_radius(&self, radius: f64, bead_diameter: f64) -> f64 {
        radius - bead_diameter / 2.0 + self.reference_bead_radius
    }

    fn estimate(&self, radius: f64, bead_diameter: f64) -> f64 {
        let x = radius / bead_diameter;
        self.regression_a * x * x + self.regression_b * x + self.regression_c
    }
}

/// Reports whether any two points are closer than `min_separation`.
///
/// Self-pairs are excluded; treating the points as hard spheres of diameter
/// `min_separation`, a `true` result means at least one pair overlaps.
pub fn has_overlap(points: &[Point3<f64>], min_separation: f64) -> bool {
    for (i, a) in points.iter().enumerate() {
        for b in &points[i + 1..] {
            if (a - b).norm() < min_separation {
                return true;
            }
        }
    }
    false
}

/// Finds the largest count of non-overlapping beads on the sphere surface.
///
/// Returns the largest `n` for which the Fibonacci sample of `n` beads has no
/// pair closer than `bead_diameter`, while `n + 1` beads do violate the
/// separation. The quadratic regression estimate bounds a window of
/// `estimate ± 500` (floored at 1), which is then binary-searched with a
/// `mid` / `mid + 1` overlap probe.
///
/// # Errors
///
/// Returns [`EngineError::Configuration`] for non-positive inputs, and
/// [`EngineError::Convergence`] if the window is exhausted without finding
/// the boundary, which means the regression estimate was inconsistent with
/// the true packing limit. Convergence failures are fatal and must not be
/// retried with the same parameters.
#[instrument(level = "debug", skip(params))]
pub fn max_nonoverlapping_count(
    radius: f64,
    bead_diameter: f64,
    params: &PackingParams,
) -> Result<usize, EngineError> {
    if radius <= 0.0 {
        return Err(EngineError::config(format!(
            "Core radius must be positive, got {}",
            radius
        )));
    }
    if bead_diameter <= 0.0 {
        return Err(EngineError::config(format!(
            "Bead diameter must be positive, got {}",
            bead_diameter
        )));
    }

    let r_eff = params.effective_radius(radius, bead_diameter);
    let estimate = params.estimate(r_eff, bead_diameter);
    debug!(r_eff, estimate, "starting packing search");

    let mut lo = (estimate - SEARCH_WINDOW).max(1.0);
    let mut hi = estimate + SEARCH_WINDOW;

    while lo <= hi {
        let mid = ((hi + lo) / 2.0).ceil() as usize;
        let overlaps = has_overlap(&sample_sphere(mid, r_eff), bead_diameter);
        let next_overlaps = has_overlap(&sample_sphere(mid + 1, r_eff), bead_diameter);

        if !overlaps && next_overlaps {
            debug!(count = mid, "packing search converged");
            return Ok(mid);
        } else if overlaps {
            hi = mid as f64 - 1.0;
        } else {
            lo = mid as f64 + 1.0;
        }
    }

    Err(EngineError::Convergence {
        radius,
        bead_diameter,
        lo: lo.max(0.0) as usize,
        hi: hi.max(0.0) as usize,
    })
}
