use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "patchynp - A command-line interface for building coarse-grained spherical nanoparticles with patchy polymer coatings.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Assemble a coated nanoparticle and export it in XYZ format.
    Build(BuildArgs),
    /// Compute a coating pattern's retained point set and export it in XYZ format.
    Pattern(PatternArgs),
}

/// Arguments for the `build` subcommand.
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Path for the output XYZ file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    /// Path to a build configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    // --- Geometry Overrides ---
    /// Override the coating pattern (e.g. 'polar', 'tetrahedral').
    #[arg(short, long, value_name = "NAME")]
    pub pattern: Option<String>,

    /// Override the core radius, in nm.
    #[arg(short, long, value_name = "FLOAT")]
    pub radius: Option<f64>,

    /// Override the areal chain density, in chains per nm^2.
    #[arg(short = 'd', long, value_name = "FLOAT")]
    pub chain_density: Option<f64>,

    /// Override the bare fraction of the surface, in [0, 1).
    #[arg(short = 'f', long, value_name = "FLOAT")]
    pub fractional_sa: Option<f64>,

    /// Override the diameter of a core surface bead, in nm.
    #[arg(short = 'b', long, value_name = "FLOAT")]
    pub bead_diameter: Option<f64>,

    // --- Chain Overrides ---
    /// Override the number of body beads per coating chain.
    #[arg(short = 'n', long, value_name = "INT")]
    pub chain_length: Option<usize>,

    /// Grow uncapped chains, overriding the config file.
    #[arg(long)]
    pub no_cap: bool,

    /// Grow backfill chains of this many beads on the bare patch.
    #[arg(long, value_name = "INT")]
    pub backfill_length: Option<usize>,

    /// Override the seed of the random pattern's shuffle.
    #[arg(short, long, value_name = "INT")]
    pub seed: Option<u64>,
}

/// Arguments for the `pattern` subcommand.
#[derive(Args, Debug)]
pub struct PatternArgs {
    /// The coating pattern (e.g. 'polar', 'tetrahedral').
    #[arg(short, long, required = true, value_name = "NAME")]
    pub pattern: String,

    /// Path for the output XYZ file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    /// Core radius, in nm.
    #[arg(short, long, value_name = "FLOAT", default_value_t = 2.5)]
    pub radius: f64,

    /// Areal chain density, in chains per nm^2.
    #[arg(short = 'd', long, value_name = "FLOAT", default_value_t = 3.0)]
    pub chain_density: f64,

    /// Bare fraction of the surface, in [0, 1).
    #[arg(short = 'f', long, value_name = "FLOAT", default_value_t = 0.0)]
    pub fractional_sa: f64,

    /// Seed of the random pattern's shuffle.
    #[arg(short, long, value_name = "INT")]
    pub seed: Option<u64>,

    /// Species name written for every point record.
    #[arg(long, value_name = "NAME", default_value = "LJ")]
    pub name: String,
}
