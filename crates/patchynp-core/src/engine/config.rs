use super::packing::PackingParams;
use super::patterns::{PatchConfig, PatternKind};
use crate::core::models::chain::ChainTopology;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
}

/// Parameters of the coated-particle assembly workflow.
///
/// Assembled through [`BuildConfigBuilder`]; every field is fixed for the
/// run. Sphere geometry (radius, density, fractional surface area) lives in
/// the embedded [`PatchConfig`].
#[derive(Debug, Clone, PartialEq)]
pub struct BuildConfig {
    /// The surface coating pattern to apply.
    pub pattern: PatternKind,
    /// Sphere geometry and coverage parameters.
    pub patch: PatchConfig,
    /// Diameter of a core surface bead, in nm.
    pub bead_diameter: f64,
    /// Topology of the chains tethered at retained anchor points.
    pub chain: ChainTopology,
    /// Topology for chains grown on the excluded patch, if any.
    pub backfill_chain: Option<ChainTopology>,
    /// Seed for the random pattern's shuffle.
    pub random_seed: Option<u64>,
    /// Regression constants of the core packing search.
    pub packing: PackingParams,
}

#[derive(Debug, Default)]
pub struct BuildConfigBuilder {
    pattern: Option<PatternKind>,
    chain_density: Option<f64>,
    radius: Option<f64>,
    fractional_sa: Option<f64>,
    bead_diameter: Option<f64>,
    chain: Option<ChainTopology>,
    backfill_chain: Option<ChainTopology>,
    random_seed: Option<u64>,
    packing: Option<PackingParams>,
}

impl BuildConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pattern(mut self, pattern: PatternKind) -> Self {
        self.pattern = Some(pattern);
        self
    }
    pub fn chain_density(mut self, density: f64) -> Self {
        self.chain_density = Some(density);
        self
    }
    pub fn radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }
    pub fn fractional_sa(mut self, fraction: f64) -> Self {
        self.fractional_sa = Some(fraction);
        self
    }
    pub fn bead_diameter(mut self, diameter: f64) -> Self {
        self.bead_diameter = Some(diameter);
        self
    }
    pub fn chain(mut self, chain: ChainTopology) -> Self {
        self.chain = Some(chain);
        self
    }
    pub fn backfill_chain(mut self, chain: ChainTopology) -> Self {
        self.backfill_chain = Some(chain);
        self
    }
    pub fn random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }
    pub fn packing(mut self, params: PackingParams) -> Self {
        self.packing = Some(params);
        self
    }

    pub fn build(self) -> Result<BuildConfig, ConfigError> {
        let patch = PatchConfig::new(
            self.chain_density
                .ok_or(ConfigError::MissingParameter("chain_density"))?,
            self.radius.ok_or(ConfigError::MissingParameter("radius"))?,
            // The fully covered patterns have no bare patch.
            self.fractional_sa.unwrap_or(0.0),
        );
        Ok(BuildConfig {
            pattern: self
                .pattern
                .ok_or(ConfigError::MissingParameter("pattern"))?,
            patch,
            bead_diameter: self
                .bead_diameter
                .ok_or(ConfigError::MissingParameter("bead_diameter"))?,
            chain: self.chain.ok_or(ConfigError::MissingParameter("chain"))?,
            backfill_chain: self.backfill_chain,
            random_seed: self.random_seed,
            packing: self.packing.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_builder() -> BuildConfigBuilder {
        BuildConfigBuilder::new()
            .pattern(PatternKind::Polar)
            .chain_density(3.0)
            .radius(2.5)
            .fractional_sa(0.2)
            .bead_diameter(0.6)
            .chain(ChainTopology::cg_alkane(17))
    }

    #[test]
    fn build_succeeds_with_all_required_parameters() {
        let config = minimal_builder().build().unwrap();
        assert_eq!(config.pattern, PatternKind::Polar);
        assert_eq!(config.patch.radius, 2.5);
        assert!(config.backfill_chain.is_none());
        assert_eq!(config.packing, PackingParams::default());
    }

    #[test]
    fn build_fails_when_a_required_parameter_is_missing() {
        let result = BuildConfigBuilder::new()
            .pattern(PatternKind::Polar)
            .chain_density(3.0)
            .radius(2.5)
            .chain(ChainTopology::cg_alkane(17))
            .build();
        assert_eq!(
            result.unwrap_err(),
            ConfigError::MissingParameter("bead_diameter")
        );
    }

    #[test]
    fn fractional_sa_defaults_to_zero() {
        let config = BuildConfigBuilder::new()
            .pattern(PatternKind::Isotropic)
            .chain_density(3.0)
            .radius(2.5)
            .bead_diameter(0.6)
            .chain(ChainTopology::cg_alkane(17))
            .build()
            .unwrap();
        assert_eq!(config.patch.fractional_sa, 0.0);
    }
}
