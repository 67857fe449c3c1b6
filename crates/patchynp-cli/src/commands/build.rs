use crate::cli::BuildArgs;
use crate::config::FileBuildConfig;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use patchynp::{core::io::xyz::XyzFile, engine::progress::ProgressReporter, workflows};
use tracing::info;

pub fn run(args: BuildArgs) -> Result<()> {
    let file_config = match &args.config {
        Some(path) => FileBuildConfig::from_file(path)?,
        None => FileBuildConfig::default(),
    };
    info!("Merging configuration from file and CLI arguments...");
    let config = file_config.merge_with_cli(&args)?;

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    println!("Building {} coated nanoparticle...", config.pattern);
    info!("Invoking the core build workflow...");

    let result = workflows::build::run(&config, &reporter)?;
    let summary = &result.summary;
    info!(
        core_beads = summary.core_beads,
        chains = summary.retained_anchors,
        "Workflow finished."
    );

    let comment = format!(
        "{} pattern: r={} nm, density={} chains/nm^2, {} core beads, {} chains, {} patch points",
        config.pattern,
        config.patch.radius,
        config.patch.chain_density,
        summary.core_beads,
        summary.retained_anchors,
        summary.patch_points,
    );
    XyzFile::write_to_path(&result.particle, &comment, &args.output)
        .map_err(|e| CliError::FileParsing {
            path: args.output.clone(),
            source: e.into(),
        })?;

    println!(
        "✓ Particle with {} beads ({} core, {} chain, {} backfill) written to: {}",
        result.particle.bead_count(),
        summary.core_beads,
        summary.chain_beads,
        summary.backfill_beads,
        args.output.display()
    );
    Ok(())
}
