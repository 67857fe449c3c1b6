use crate::core::geometry::sphere::{PointSet, sample_sphere};
use crate::core::models::bead::{Bead, BeadRole};
use crate::core::models::chain::ChainTopology;
use crate::core::models::ids::BeadId;
use crate::core::models::nanoparticle::Nanoparticle;
use crate::engine::config::BuildConfig;
use crate::engine::error::EngineError;
use crate::engine::packing::max_nonoverlapping_count;
use crate::engine::patterns::{self, complement};
use crate::engine::progress::{Progress, ProgressReporter};
use nalgebra::Point3;
use tracing::{info, instrument};

/// Species name of a coarse-grained core surface bead.
const CORE_BEAD_NAME: &str = "_CGN";

/// Counts gathered while assembling a coated particle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildSummary {
    /// Packed core surface beads.
    pub core_beads: usize,
    /// Anchor points retained by the pattern (one chain each).
    pub retained_anchors: usize,
    /// Excluded patch positions.
    pub patch_points: usize,
    /// Beads belonging to coating chains.
    pub chain_beads: usize,
    /// Beads belonging to backfill chains.
    pub backfill_beads: usize,
}

/// An assembled coated nanoparticle plus its build statistics.
#[derive(Debug)]
pub struct BuildResult {
    pub particle: Nanoparticle,
    pub summary: BuildSummary,
}

/// Assembles a coated nanoparticle from a [`BuildConfig`].
///
/// Runs the core packing search, selects the coating pattern, and grows one
/// chain per retained anchor point outward along its surface normal. Each
/// chain's first bead is bonded to the core bead nearest its anchor, and
/// consecutive chain beads are bonded along the chain. When a backfill chain
/// is configured, the same growth is applied to the excluded patch positions;
/// patterns that exclude nothing reject backfill as a configuration error.
#[instrument(skip_all, name = "build_workflow")]
pub fn run(config: &BuildConfig, reporter: &ProgressReporter) -> Result<BuildResult, EngineError> {
    validate(config)?;

    let mut particle = Nanoparticle::new();

    // === Phase 1: Core packing ===
    reporter.report(Progress::PhaseStart {
        name: "Core Packing",
    });
    let core_count = max_nonoverlapping_count(
        config.patch.radius,
        config.bead_diameter,
        &config.packing,
    )?;
    // Bead centers sit on the adjusted sphere the packing search optimized.
    let core_radius = config
        .packing
        .effective_radius(config.patch.radius, config.bead_diameter);
    let core_positions = sample_sphere(core_count, core_radius);
    let core_ids: Vec<BeadId> = core_positions
        .iter()
        .map(|pos| particle.add_bead(Bead::new(CORE_BEAD_NAME, BeadRole::Core, *pos)))
        .collect();
    info!(core_beads = core_count, "Packed core surface");
    reporter.report(Progress::PhaseFinish);

    // === Phase 2: Pattern selection ===
    reporter.report(Progress::PhaseStart {
        name: "Pattern Selection",
    });
    let pattern = patterns::select(config.pattern, &config.patch, config.random_seed)?;
    let excluded = if config.pattern.supports_backfill() {
        complement(&config.patch.isotropic_points(), &pattern.points)
    } else {
        PointSet::new()
    };
    info!(
        pattern = %config.pattern,
        retained = pattern.points.len(),
        excluded = excluded.len(),
        "Selected coating pattern"
    );
    reporter.report(Progress::PhaseFinish);

    // === Phase 3: Chain growth ===
    reporter.report(Progress::PhaseStart {
        name: "Chain Growth",
    });
    let chain_beads = grow_chains(
        &mut particle,
        &pattern.points,
        &config.chain,
        BeadRole::Chain,
        &core_positions,
        &core_ids,
    );
    reporter.report(Progress::PhaseFinish);

    // === Phase 4: Backfill (optional) ===
    let backfill_beads = if let Some(backfill) = &config.backfill_chain {
        reporter.report(Progress::PhaseStart { name: "Backfill" });
        let grown = grow_chains(
            &mut particle,
            &excluded,
            backfill,
            BeadRole::Backfill,
            &core_positions,
            &core_ids,
        );
        reporter.report(Progress::PhaseFinish);
        grown
    } else {
        0
    };

    let summary = BuildSummary {
        core_beads: core_count,
        retained_anchors: pattern.points.len(),
        patch_points: excluded.len(),
        chain_beads,
        backfill_beads,
    };
    info!(
        beads = particle.bead_count(),
        bonds = particle.bond_count(),
        "Assembly complete"
    );
    Ok(BuildResult { particle, summary })
}

fn validate(config: &BuildConfig) -> Result<(), EngineError> {
    if config.chain.bead_count() == 0 {
        return Err(EngineError::config(
            "Chain prototype must contain at least one bead",
        ));
    }
    if let Some(backfill) = &config.backfill_chain {
        if backfill.bead_count() == 0 {
            return Err(EngineError::config(
                "Backfill chain prototype must contain at least one bead",
            ));
        }
        if !config.pattern.supports_backfill() {
            return Err(EngineError::config(format!(
                "The {} pattern has no excluded patch to backfill",
                config.pattern
            )));
        }
    }
    Ok(())
}

/// Grows one chain per anchor and returns the number of beads added.
///
/// Beads are added in anchor order, then growth order within each chain, so
/// the model's bead order stays reproducible.
fn grow_chains(
    particle: &mut Nanoparticle,
    anchors: &PointSet,
    chain: &ChainTopology,
    role: BeadRole,
    core_positions: &PointSet,
    core_ids: &[BeadId],
) -> usize {
    let mut added = 0;
    for anchor in anchors {
        let mut previous = nearest_core_bead(anchor, core_positions, core_ids);
        for (name, position) in chain.bead_names().zip(chain.positions(anchor)) {
            let id = particle.add_bead(Bead::new(name, role, position));
            if let Some(prev) = previous {
                let bonded = particle.add_bond(prev, id);
                debug_assert!(bonded.is_some(), "bond endpoints must exist");
            }
            previous = Some(id);
            added += 1;
        }
    }
    added
}

/// The core bead closest to `anchor`, used as the chain's tether.
fn nearest_core_bead(
    anchor: &Point3<f64>,
    core_positions: &PointSet,
    core_ids: &[BeadId],
) -> Option<BeadId> {
    core_positions
        .iter()
        .zip(core_ids)
        .min_by(|(a, _), (b, _)| {
            let da = (*a - anchor).norm_squared();
            let db = (*b - anchor).norm_squared();
            da.total_cmp(&db)
        })
        .map(|(_, id)| *id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::config::BuildConfigBuilder;
    use crate::engine::patterns::PatternKind;
    use std::sync::Mutex;

    fn reference_builder() -> BuildConfigBuilder {
        BuildConfigBuilder::new()
            .chain_density(3.0)
            .radius(2.5)
            .fractional_sa(0.2)
            .bead_diameter(0.6)
    }

    #[test]
    fn polar_build_assembles_the_expected_counts() {
        let config = reference_builder()
            .pattern(PatternKind::Polar)
            .chain(ChainTopology::cg_alkane(2))
            .build()
            .unwrap();
        let result = run(&config, &ProgressReporter::new()).unwrap();

        assert_eq!(result.summary.core_beads, 153);
        assert_eq!(result.summary.retained_anchors, 188);
        assert_eq!(result.summary.patch_points, 47);
        // Three beads per chain (two body beads plus the cap).
        assert_eq!(result.summary.chain_beads, 188 * 3);
        assert_eq!(result.summary.backfill_beads, 0);
        assert_eq!(result.particle.bead_count(), 153 + 188 * 3);
        // Each chain carries one tether bond and two internal bonds.
        assert_eq!(result.particle.bond_count(), 188 * 3);
        assert_eq!(result.particle.count_role(BeadRole::Core), 153);
        assert_eq!(result.particle.count_role(BeadRole::Chain), 188 * 3);
    }

    #[test]
    fn core_beads_sit_on_the_adjusted_sphere() {
        let config = reference_builder()
            .pattern(PatternKind::Polar)
            .chain(ChainTopology::cg_alkane(2))
            .build()
            .unwrap();
        let result = run(&config, &ProgressReporter::new()).unwrap();

        // r − σ/2 + r_silica: the radius the packing search optimized.
        let r_eff = config.packing.effective_radius(2.5, 0.6);
        assert!((r_eff - 2.401615).abs() < 1e-6);
        for (_, bead) in result.particle.beads_iter() {
            if bead.role == BeadRole::Core {
                assert!((bead.position.coords.norm() - r_eff).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn backfill_grows_chains_on_the_excluded_patch() {
        let mut short = ChainTopology::cg_alkane(1);
        short.cap_name = None;
        let config = reference_builder()
            .pattern(PatternKind::Polar)
            .chain(ChainTopology::cg_alkane(2))
            .backfill_chain(short)
            .build()
            .unwrap();
        let result = run(&config, &ProgressReporter::new()).unwrap();

        assert_eq!(result.summary.backfill_beads, 47);
        assert_eq!(result.particle.count_role(BeadRole::Backfill), 47);
        // Single-bead backfill chains contribute exactly one tether bond each.
        assert_eq!(result.particle.bond_count(), 188 * 3 + 47);
    }

    #[test]
    fn backfill_is_rejected_for_patterns_without_a_patch() {
        for kind in [PatternKind::Isotropic, PatternKind::Random] {
            let config = reference_builder()
                .pattern(kind)
                .chain(ChainTopology::cg_alkane(2))
                .backfill_chain(ChainTopology::cg_alkane(1))
                .build()
                .unwrap();
            assert!(matches!(
                run(&config, &ProgressReporter::new()),
                Err(EngineError::Configuration { .. })
            ));
        }
    }

    #[test]
    fn chains_are_tethered_to_their_nearest_core_bead() {
        let config = reference_builder()
            .pattern(PatternKind::Polar)
            .chain(ChainTopology::cg_alkane(2))
            .build()
            .unwrap();
        let result = run(&config, &ProgressReporter::new()).unwrap();

        let particle = &result.particle;
        for (id, bead) in particle.beads_iter() {
            if bead.role != BeadRole::Core {
                continue;
            }
            for neighbor_id in particle.bonded_neighbors(id) {
                let neighbor = particle.bead(*neighbor_id).unwrap();
                assert_eq!(neighbor.role, BeadRole::Chain);
                // A tethered bead sits within one chain length of the surface.
                let reach = config.chain.spacing * config.chain.bead_count() as f64;
                let dist = (neighbor.position - bead.position).norm();
                assert!(dist <= config.patch.radius + reach);
            }
        }
    }

    #[test]
    fn workflow_reports_its_phases_in_order() {
        let phases = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            if let Progress::PhaseStart { name } = event {
                phases.lock().unwrap().push(name);
            }
        }));

        let config = reference_builder()
            .pattern(PatternKind::Polar)
            .chain(ChainTopology::cg_alkane(2))
            .backfill_chain(ChainTopology::cg_alkane(1))
            .build()
            .unwrap();
        run(&config, &reporter).unwrap();

        assert_eq!(
            *phases.lock().unwrap(),
            vec!["Core Packing", "Pattern Selection", "Chain Growth", "Backfill"]
        );
    }
}
