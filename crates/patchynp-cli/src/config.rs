use crate::cli::BuildArgs;
use crate::error::{CliError, Result};
use patchynp::core::models::chain::ChainTopology;
use patchynp::engine::config::{BuildConfig, BuildConfigBuilder};
use patchynp::engine::patterns::PatternKind;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Default number of body beads per coating chain when neither the config
/// file nor the CLI specifies one. Matches the 3:1 CG hexadecane coating.
const DEFAULT_CHAIN_LENGTH: usize = 6;

/// Chain prototype as declared in a TOML build file.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileChainConfig {
    pub length: usize,
    pub spacing: Option<f64>,
    pub bead_name: Option<String>,
    pub cap_name: Option<String>,
    pub capped: Option<bool>,
}

impl From<FileChainConfig> for ChainTopology {
    fn from(file: FileChainConfig) -> Self {
        let mut chain = ChainTopology::cg_alkane(file.length);
        if let Some(spacing) = file.spacing {
            chain.spacing = spacing;
        }
        if let Some(name) = file.bead_name {
            chain.bead_name = name;
        }
        if file.capped == Some(false) {
            chain.cap_name = None;
        } else if let Some(cap) = file.cap_name {
            chain.cap_name = Some(cap);
        }
        chain
    }
}

/// A build configuration loaded from a TOML file. Every field is optional;
/// CLI arguments override file values and the builder reports what is still
/// missing after the merge.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileBuildConfig {
    pub pattern: Option<String>,
    pub radius: Option<f64>,
    pub chain_density: Option<f64>,
    pub fractional_sa: Option<f64>,
    pub bead_diameter: Option<f64>,
    pub seed: Option<u64>,
    pub chain: Option<FileChainConfig>,
    pub backfill: Option<FileChainConfig>,
}

impl FileBuildConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })?;
        let config: Self = toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })?;
        debug!("Loaded build configuration from {:?}", path);
        Ok(config)
    }

    /// Merges this file configuration with CLI overrides into a validated
    /// core [`BuildConfig`]. CLI values win.
    pub fn merge_with_cli(self, args: &BuildArgs) -> Result<BuildConfig> {
        let pattern_name = args
            .pattern
            .clone()
            .or(self.pattern)
            .ok_or_else(|| CliError::Config("Missing required parameter: pattern".into()))?;
        let pattern: PatternKind = pattern_name
            .parse()
            .map_err(|e: patchynp::engine::patterns::ParsePatternKindError| {
                CliError::Argument(e.to_string())
            })?;

        let chain = resolve_chain(args.chain_length, args.no_cap, self.chain)
            .unwrap_or_else(|| ChainTopology::cg_alkane(DEFAULT_CHAIN_LENGTH));

        let mut builder = BuildConfigBuilder::new().pattern(pattern).chain(chain);

        if let Some(radius) = args.radius.or(self.radius) {
            builder = builder.radius(radius);
        }
        if let Some(density) = args.chain_density.or(self.chain_density) {
            builder = builder.chain_density(density);
        }
        if let Some(fraction) = args.fractional_sa.or(self.fractional_sa) {
            builder = builder.fractional_sa(fraction);
        }
        if let Some(diameter) = args.bead_diameter.or(self.bead_diameter) {
            builder = builder.bead_diameter(diameter);
        }
        if let Some(seed) = args.seed.or(self.seed) {
            builder = builder.random_seed(seed);
        }
        if let Some(backfill) = resolve_chain(args.backfill_length, args.no_cap, self.backfill) {
            builder = builder.backfill_chain(backfill);
        }

        builder.build().map_err(|e| CliError::Config(e.to_string()))
    }
}

/// A CLI chain length beats the file's chain table; `--no-cap` applies to
/// whichever source wins.
fn resolve_chain(
    cli_length: Option<usize>,
    no_cap: bool,
    file: Option<FileChainConfig>,
) -> Option<ChainTopology> {
    let mut chain = match (cli_length, file) {
        (Some(length), _) => ChainTopology::cg_alkane(length),
        (None, Some(file)) => file.into(),
        (None, None) => return None,
    };
    if no_cap {
        chain.cap_name = None;
    }
    Some(chain)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn default_args() -> BuildArgs {
        BuildArgs {
            output: "out.xyz".into(),
            config: None,
            pattern: None,
            radius: None,
            chain_density: None,
            fractional_sa: None,
            bead_diameter: None,
            chain_length: None,
            no_cap: false,
            backfill_length: None,
            seed: None,
        }
    }

    fn write_config(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("build.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn full_file_config_builds_without_cli_overrides() {
        let (_dir, path) = write_config(
            r#"
            pattern = "tetrahedral"
            radius = 2.5
            chain-density = 3.0
            fractional-sa = 0.2
            bead-diameter = 0.6
            seed = 57

            [chain]
            length = 4

            [backfill]
            length = 1
            capped = false
            "#,
        );
        let config = FileBuildConfig::from_file(&path)
            .unwrap()
            .merge_with_cli(&default_args())
            .unwrap();

        assert_eq!(config.pattern, PatternKind::Tetrahedral);
        assert_eq!(config.patch.radius, 2.5);
        assert_eq!(config.random_seed, Some(57));
        assert_eq!(config.chain.length, 4);
        assert_eq!(config.chain.cap_name.as_deref(), Some("_MME"));
        let backfill = config.backfill_chain.unwrap();
        assert_eq!(backfill.length, 1);
        assert!(backfill.cap_name.is_none());
    }

    #[test]
    fn cli_overrides_beat_file_values() {
        let (_dir, path) = write_config(
            r#"
            pattern = "polar"
            radius = 2.5
            chain-density = 3.0
            bead-diameter = 0.6
            "#,
        );
        let mut args = default_args();
        args.pattern = Some("bipolar".into());
        args.radius = Some(5.0);
        args.chain_length = Some(2);
        args.no_cap = true;

        let config = FileBuildConfig::from_file(&path)
            .unwrap()
            .merge_with_cli(&args)
            .unwrap();

        assert_eq!(config.pattern, PatternKind::Bipolar);
        assert_eq!(config.patch.radius, 5.0);
        assert_eq!(config.chain.length, 2);
        assert!(config.chain.cap_name.is_none());
    }

    #[test]
    fn chain_defaults_apply_when_no_source_names_one() {
        let (_dir, path) = write_config(
            r#"
            pattern = "polar"
            radius = 2.5
            chain-density = 3.0
            bead-diameter = 0.6
            "#,
        );
        let config = FileBuildConfig::from_file(&path)
            .unwrap()
            .merge_with_cli(&default_args())
            .unwrap();
        assert_eq!(config.chain, ChainTopology::cg_alkane(DEFAULT_CHAIN_LENGTH));
        assert!(config.backfill_chain.is_none());
    }

    #[test]
    fn missing_parameters_surface_as_config_errors() {
        let (_dir, path) = write_config(r#"pattern = "polar""#);
        let result = FileBuildConfig::from_file(&path)
            .unwrap()
            .merge_with_cli(&default_args());
        match result {
            Err(CliError::Config(msg)) => assert!(msg.contains("radius")),
            other => panic!("expected a config error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn unknown_pattern_names_surface_as_argument_errors() {
        let mut args = default_args();
        args.pattern = Some("spiral".into());
        args.radius = Some(2.5);
        args.chain_density = Some(3.0);
        args.bead_diameter = Some(0.6);
        let result = FileBuildConfig::default().merge_with_cli(&args);
        assert!(matches!(result, Err(CliError::Argument(_))));
    }

    #[test]
    fn unknown_file_keys_are_rejected() {
        let (_dir, path) = write_config("pattern = \"polar\"\nradiuss = 2.5\n");
        assert!(matches!(
            FileBuildConfig::from_file(&path),
            Err(CliError::FileParsing { .. })
        ));
    }
}
