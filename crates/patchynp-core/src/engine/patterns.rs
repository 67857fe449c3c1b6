use super::error::EngineError;
use crate::core::geometry::sphere::{
    PointSet, SphereConfig, contains_point, isotropic_count, sample_sphere,
};
use crate::core::geometry::spherical::spherical_to_cartesian;
use nalgebra::Point3;
use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};
use serde::Deserialize;
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, instrument};

/// Seed used for the random pattern when the caller does not supply one.
pub const DEFAULT_RANDOM_SEED: u64 = 12345;

/// Colatitude of the three off-pole tetrahedral patch centers, in degrees.
const TETRAHEDRAL_ANGLE_DEG: f64 = 109.5;

/// Fractional surface area at and beyond which the cube pattern has no
/// retainable points. Empirically determined for the default silica model;
/// kept as a guard rather than derived.
const CUBE_FRACTIONAL_SA_LIMIT: f64 = 0.8;

/// The named surface coating patterns.
///
/// Each pattern is a geometric rule that decides which points of an isotropic
/// sphere sample keep their tethered chain. The excluded complement forms the
/// bare patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternKind {
    /// The full uniform sample; nothing excluded.
    Isotropic,
    /// One polar cap removed.
    Polar,
    /// Two opposite polar caps removed.
    Bipolar,
    /// An equatorial band removed.
    Equatorial,
    /// Two opposite edge-bands removed (box cutoff on y and z).
    Square,
    /// Six face regions removed (box cutoff on x, y, and z).
    Cube,
    /// Four tetrahedrally placed patches removed.
    Tetrahedral,
    /// Only three tetrahedrally placed patches retained.
    Ring,
    /// A random fifth of an oversampled point set retained.
    Random,
}

impl PatternKind {
    pub const ALL: [PatternKind; 9] = [
        PatternKind::Isotropic,
        PatternKind::Polar,
        PatternKind::Bipolar,
        PatternKind::Equatorial,
        PatternKind::Square,
        PatternKind::Cube,
        PatternKind::Tetrahedral,
        PatternKind::Ring,
        PatternKind::Random,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PatternKind::Isotropic => "isotropic",
            PatternKind::Polar => "polar",
            PatternKind::Bipolar => "bipolar",
            PatternKind::Equatorial => "equatorial",
            PatternKind::Square => "square",
            PatternKind::Cube => "cube",
            PatternKind::Tetrahedral => "tetrahedral",
            PatternKind::Ring => "ring",
            PatternKind::Random => "random",
        }
    }

    /// Whether the pattern produces an excluded set that backfill chains can
    /// be grown on. The isotropic pattern excludes nothing, and the random
    /// pattern's complement is not a surface patch.
    pub fn supports_backfill(&self) -> bool {
        !matches!(self, PatternKind::Isotropic | PatternKind::Random)
    }
}

#[derive(Debug, Error)]
#[error("Unknown coating pattern '{0}'; valid patterns are: {valid}", valid = valid_pattern_names())]
pub struct ParsePatternKindError(String);

fn valid_pattern_names() -> String {
    PatternKind::ALL
        .iter()
        .map(|k| k.name())
        .collect::<Vec<_>>()
        .join(", ")
}

impl FromStr for PatternKind {
    type Err = ParsePatternKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        PatternKind::ALL
            .into_iter()
            .find(|k| k.name() == lower)
            .ok_or_else(|| ParsePatternKindError(s.to_string()))
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Parameters of one pattern-selection invocation.
///
/// Immutable for the invocation. `fractional_sa` is the fraction of the total
/// sphere surface area to exclude from coating; it is ignored by the
/// isotropic and random patterns.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PatchConfig {
    /// Areal chain density in chains per nm².
    pub chain_density: f64,
    /// Sphere radius in nm.
    pub radius: f64,
    /// Fraction of total surface area to leave bare, in `[0, 1)`.
    pub fractional_sa: f64,
}

impl PatchConfig {
    pub fn new(chain_density: f64, radius: f64, fractional_sa: f64) -> Self {
        Self {
            chain_density,
            radius,
            fractional_sa,
        }
    }

    /// Validates the configuration for the given pattern, before any geometry.
    fn validate(&self, kind: PatternKind) -> Result<(), EngineError> {
        if self.chain_density <= 0.0 {
            return Err(EngineError::config(format!(
                "Chain density must be positive, got {}",
                self.chain_density
            )));
        }
        if self.radius <= 0.0 {
            return Err(EngineError::config(format!(
                "Radius must be positive, got {}",
                self.radius
            )));
        }
        if !(0.0..1.0).contains(&self.fractional_sa) {
            return Err(EngineError::config(format!(
                "Fractional surface area must be in [0, 1), got {}",
                self.fractional_sa
            )));
        }
        if kind == PatternKind::Cube && self.fractional_sa >= CUBE_FRACTIONAL_SA_LIMIT {
            return Err(EngineError::config(format!(
                "The cube pattern only supports fractional surface areas below {}, got {}",
                CUBE_FRACTIONAL_SA_LIMIT, self.fractional_sa
            )));
        }
        Ok(())
    }

    /// Total sphere surface area, 4πr².
    fn total_surface_area(&self) -> f64 {
        4.0 * PI * self.radius * self.radius
    }

    /// Target bare-patch surface area.
    fn patch_surface_area(&self) -> f64 {
        self.total_surface_area() * self.fractional_sa
    }

    /// The isotropic candidate point set at this density and radius.
    pub fn isotropic_points(&self) -> PointSet {
        SphereConfig::new(
            self.radius,
            isotropic_count(self.chain_density, self.radius),
        )
        .points()
    }
}

/// A selected coating pattern: the retained (coated) anchor positions.
#[derive(Debug, Clone, PartialEq)]
pub struct Pattern {
    pub kind: PatternKind,
    /// Retained positions, in the candidate set's generation order.
    pub points: PointSet,
}

/// Policy applied to the points matched by the patch-region predicate.
///
/// The tetrahedral pattern's predicate computes the bare patches, so the
/// coated result is the complement of the matched set; the ring pattern keeps
/// the matched set itself. Modeling this as an explicit per-pattern policy
/// over one shared predicate documents the asymmetry as deliberate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PatchSelection {
    Matched,
    Complement,
}

/// Selects the named pattern on a fresh isotropic sample.
///
/// Builds the candidate set at `config`'s density and radius, then retains
/// the subset the pattern's geometric rule selects. The retained set is
/// always an exact subset of the candidate set, in generation order, so the
/// retained points and their complement partition the candidates exactly.
///
/// `seed` drives the random pattern only; all other patterns are fully
/// deterministic. Pure: no state survives the call.
#[instrument(level = "debug", skip(config), fields(pattern = %kind))]
pub fn select(
    kind: PatternKind,
    config: &PatchConfig,
    seed: Option<u64>,
) -> Result<Pattern, EngineError> {
    config.validate(kind)?;

    let points = match kind {
        PatternKind::Isotropic => config.isotropic_points(),
        PatternKind::Polar => polar_points(config),
        PatternKind::Bipolar => bipolar_points(config),
        PatternKind::Equatorial => equatorial_points(config),
        PatternKind::Square => square_points(config),
        PatternKind::Cube => cube_points(config),
        PatternKind::Tetrahedral => {
            patch_box_points(config, /* include_pole */ true, PatchSelection::Complement)
        }
        PatternKind::Ring => {
            patch_box_points(config, /* include_pole */ false, PatchSelection::Matched)
        }
        PatternKind::Random => random_points(config, seed.unwrap_or(DEFAULT_RANDOM_SEED)),
    };

    debug!(retained = points.len(), "pattern selected");
    Ok(Pattern { kind, points })
}

/// One polar cap removed: retain `z < radius − cutoff`.
fn polar_points(config: &PatchConfig) -> PointSet {
    let cutoff = config.patch_surface_area() / (2.0 * PI * config.radius);
    let bound = config.radius - cutoff;
    config
        .isotropic_points()
        .into_iter()
        .filter(|p| p.z < bound)
        .collect()
}

/// Two opposite caps removed: retain `cutoff − radius < z < radius − cutoff`.
fn bipolar_points(config: &PatchConfig) -> PointSet {
    let cutoff = config.patch_surface_area() / (4.0 * PI * config.radius);
    let bound = config.radius - cutoff;
    config
        .isotropic_points()
        .into_iter()
        .filter(|p| p.z < bound && p.z > -bound)
        .collect()
}

/// An equatorial band removed: retain `|z| > width / 2`.
fn equatorial_points(config: &PatchConfig) -> PointSet {
    let width = config.patch_surface_area() / (2.0 * PI * config.radius);
    config
        .isotropic_points()
        .into_iter()
        .filter(|p| p.z < -width / 2.0 || p.z > width / 2.0)
        .collect()
}

/// Two opposite edge-bands removed: box cutoff applied on y and z.
fn square_points(config: &PatchConfig) -> PointSet {
    let cutoff = config.patch_surface_area() / (8.0 * PI * config.radius);
    let bound = config.radius - cutoff;
    config
        .isotropic_points()
        .into_iter()
        .filter(|p| p.y < bound && p.y > -bound && p.z < bound && p.z > -bound)
        .collect()
}

/// Six face regions removed: box cutoff applied on x, y, and z.
fn cube_points(config: &PatchConfig) -> PointSet {
    let cutoff = config.patch_surface_area() / (8.0 * PI * config.radius);
    let bound = config.radius - cutoff;
    config
        .isotropic_points()
        .into_iter()
        .filter(|p| {
            p.x < bound && p.x > -bound && p.y < bound && p.y > -bound && p.z < bound && p.z > -bound
        })
        .collect()
}

/// Centers of the tetrahedrally placed patches, in Cartesian coordinates.
///
/// One patch sits at the north pole (spherical angles (0, 0)); the other
/// three sit at colatitude 109.5°, spaced 120° apart in longitude.
fn patch_centers(radius: f64, include_pole: bool) -> Vec<Point3<f64>> {
    let colat = TETRAHEDRAL_ANGLE_DEG.to_radians();
    let mut centers = Vec::with_capacity(4);
    if include_pole {
        centers.push(spherical_to_cartesian(radius, 0.0, 0.0));
    }
    for i in 0..3 {
        let longitude = (i as f64) * 120f64.to_radians();
        centers.push(spherical_to_cartesian(radius, longitude, colat));
    }
    centers
}

/// Whether `point` falls inside the axis-aligned cube of the given half-width
/// around `center`. Boundaries are exclusive on all faces.
fn in_patch_box(point: &Point3<f64>, center: &Point3<f64>, half_width: f64) -> bool {
    (point.x - center.x).abs() < half_width
        && (point.y - center.y).abs() < half_width
        && (point.z - center.z).abs() < half_width
}

/// Shared predicate of the tetrahedral and ring patterns.
///
/// Matches points inside any patch cube of half-width `sqrt(patch_sa / 4π)`,
/// then applies the per-pattern selection policy.
fn patch_box_points(
    config: &PatchConfig,
    include_pole: bool,
    selection: PatchSelection,
) -> PointSet {
    let half_width = (config.patch_surface_area() / (4.0 * PI)).sqrt();
    let centers = patch_centers(config.radius, include_pole);

    config
        .isotropic_points()
        .into_iter()
        .filter(|p| {
            let matched = centers.iter().any(|c| in_patch_box(p, c, half_width));
            match selection {
                PatchSelection::Matched => matched,
                PatchSelection::Complement => !matched,
            }
        })
        .collect()
}

/// Oversamples at five times the density, shuffles with the explicit seed,
/// and keeps the first fifth.
fn random_points(config: &PatchConfig, seed: u64) -> PointSet {
    let count = (config.chain_density * 20.0 * PI * config.radius * config.radius) as usize;
    let mut points = sample_sphere(count, config.radius);

    let mut rng = StdRng::seed_from_u64(seed);
    points.shuffle(&mut rng);
    points.truncate(count / 5);
    points
}

/// Counts the excluded patch positions of a selected pattern.
///
/// Recomputes the isotropic candidate set at the same density and radius, and
/// counts the points absent from `retained` by exact coordinate match. For
/// every pattern, `retained.len() + count_patch_points(..) ` equals the
/// candidate count.
pub fn count_patch_points(retained: &PointSet, radius: f64, chain_density: f64) -> usize {
    let full = sample_sphere(isotropic_count(chain_density, radius), radius);
    full.iter()
        .filter(|&p| !contains_point(retained, p))
        .count()
}

/// The excluded complement of a retained subset within a candidate set.
pub fn complement(full: &PointSet, retained: &PointSet) -> PointSet {
    full.iter()
        .filter(|&p| !contains_point(retained, p))
        .copied()
        .collect()
}
