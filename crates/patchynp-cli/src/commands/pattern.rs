use crate::cli::PatternArgs;
use crate::error::{CliError, Result};
use patchynp::core::io::xyz::XyzFile;
use patchynp::engine::patterns::{self, PatchConfig, PatternKind};
use tracing::info;

pub fn run(args: PatternArgs) -> Result<()> {
    let kind: PatternKind = args
        .pattern
        .parse()
        .map_err(|e: patchynp::engine::patterns::ParsePatternKindError| {
            CliError::Argument(e.to_string())
        })?;
    let config = PatchConfig::new(args.chain_density, args.radius, args.fractional_sa);

    info!("Computing the {} pattern...", kind);
    let pattern = patterns::select(kind, &config, args.seed)?;
    // The random pattern's points are not a subset of the isotropic
    // candidates, so patch accounting only applies to the geometric rules.
    let patch = if kind.supports_backfill() {
        patterns::count_patch_points(&pattern.points, config.radius, config.chain_density)
    } else {
        0
    };

    let comment = format!(
        "{} pattern: r={} nm, density={} chains/nm^2, fsa={}",
        kind, config.radius, config.chain_density, config.fractional_sa
    );
    XyzFile::write_points_to_path(&pattern.points, &args.name, &comment, &args.output).map_err(
        |e| CliError::FileParsing {
            path: args.output.clone(),
            source: e.into(),
        },
    )?;

    println!(
        "✓ {} pattern: {} points retained, {} excluded, written to: {}",
        kind,
        pattern.points.len(),
        patch,
        args.output.display()
    );
    Ok(())
}
