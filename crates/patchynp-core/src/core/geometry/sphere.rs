use nalgebra::Point3;
use serde::Deserialize;

/// An ordered sequence of 3D points, in nanometers, centered on the origin.
///
/// Iteration order is the generation order (Fibonacci band index), which is
/// the stable ordering downstream consumers rely on.
pub type PointSet = Vec<Point3<f64>>;

/// The golden ratio, driving the azimuthal increment of the spiral.
const GOLDEN_RATIO: f64 = 1.618033988749895;

/// Parameters for a single uniform sphere sample.
///
/// Drives the sampler for one invocation; immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SphereConfig {
    /// Sphere radius in nanometers.
    pub radius: f64,
    /// Number of points to place on the surface.
    pub count: usize,
}

impl SphereConfig {
    pub fn new(radius: f64, count: usize) -> Self {
        Self { radius, count }
    }

    /// Generates the point set described by this configuration.
    pub fn points(&self) -> PointSet {
        sample_sphere(self.count, self.radius)
    }
}

/// Distributes `count` points near-uniformly on a sphere of the given radius.
///
/// Uses the deterministic golden-angle (Fibonacci) spiral: each band index `i`
/// is assigned `z_i = i·(2/count) − 1 + 1/count` and an azimuth advancing by
/// `2π/φ` per band, where `φ` is the golden ratio. The same `(count, radius)`
/// always produces the identical sequence, in band-index order, in O(count).
pub fn sample_sphere(count: usize, radius: f64) -> PointSet {
    let n = count as f64;
    let long_incr = 2.0 * std::f64::consts::PI / GOLDEN_RATIO;
    let dz = 2.0 / n;

    (0..count)
        .map(|i| {
            let band = i as f64;
            let z = band * dz - 1.0 + dz / 2.0;
            let r = (1.0 - z * z).sqrt();
            let az = band * long_incr;
            Point3::new(r * az.cos() * radius, r * az.sin() * radius, z * radius)
        })
        .collect()
}

/// Number of isotropic candidate points for a given areal chain density.
///
/// `density · 4πr²` is truncated toward zero rather than rounded; e.g.
/// density 3.0 on a 2.5 nm sphere gives 235 points, not 236.
pub fn isotropic_count(chain_density: f64, radius: f64) -> usize {
    (chain_density * 4.0 * std::f64::consts::PI * radius * radius) as usize
}

/// Exact-value membership test of a point in a point set.
///
/// Membership is exact floating-point equality on all three coordinates. The
/// pattern/complement accounting depends on this being exact, since retained
/// subsets are always drawn verbatim from the full candidate set. Tolerance
/// comparisons, if ever needed, should be swapped in here and nowhere else.
pub fn contains_point(set: &[Point3<f64>], point: &Point3<f64>) -> bool {
    set.iter().any(|p| p == point)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_sphere_returns_exactly_count_points() {
        for count in [1, 2, 10, 235, 1000] {
            assert_eq!(sample_sphere(count, 2.5).len(), count);
        }
    }

    #[test]
    fn sample_sphere_is_deterministic() {
        let a = sample_sphere(235, 2.5);
        let b = sample_sphere(235, 2.5);
        assert_eq!(a, b);
    }

    #[test]
    fn sampled_points_lie_on_the_sphere() {
        let radius = 3.7;
        for point in sample_sphere(500, radius) {
            let norm = point.coords.norm();
            assert!(
                (norm - radius).abs() < 1e-9,
                "point {:?} has norm {}",
                point,
                norm
            );
        }
    }

    #[test]
    fn bands_ascend_in_z() {
        let points = sample_sphere(100, 1.0);
        for pair in points.windows(2) {
            assert!(pair[0].z < pair[1].z);
        }
    }

    #[test]
    fn isotropic_count_truncates_toward_zero() {
        // 3.0 * 4π * 2.5^2 = 235.62
        assert_eq!(isotropic_count(3.0, 2.5), 235);
        // The random pattern oversamples at five times the density: 1178.09
        assert_eq!(isotropic_count(3.0 * 5.0, 2.5), 1178);
    }

    #[test]
    fn sphere_config_points_matches_free_function() {
        let config = SphereConfig::new(2.5, 50);
        assert_eq!(config.points(), sample_sphere(50, 2.5));
    }

    #[test]
    fn contains_point_requires_exact_equality() {
        let set = sample_sphere(20, 2.5);
        assert!(contains_point(&set, &set[7]));

        let mut nudged = set[7];
        nudged.x += 1e-15;
        assert!(!contains_point(&set, &nudged));
    }
}
