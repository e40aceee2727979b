use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Settings for one `permute` run, from a YAML job file and/or the CLI.
///
/// ```yaml
/// ascending: true
/// swap_passes: 20
/// dither_passes: 50
/// seed: 1234
/// reorient: false
/// palette_out: palette.png
/// ```
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct JobConfig {
    /// Rank-match by luminance before any swap passes
    #[serde(default)]
    pub ascending: bool,

    /// Plain compare-and-swap passes
    pub swap_passes: Option<usize>,

    /// Dithered compare-and-swap passes
    pub dither_passes: Option<usize>,

    /// Seed for every random choice; drawn at startup when absent
    pub seed: Option<u64>,

    /// Apply a random cube orientation to the palette
    #[serde(default)]
    pub reorient: bool,

    /// Write the palette, in generation order, to this image
    pub palette_out: Option<PathBuf>,
}

impl JobConfig {
    /// Load and validate a job file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&content, path)?;
        tracing::info!(
            path = %path.display(),
            ascending = config.ascending,
            swap_passes = ?config.swap_passes,
            dither_passes = ?config.dither_passes,
            "Loaded job file"
        );
        Ok(config)
    }

    /// Parse and validate YAML. `path` is only used in errors.
    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        // An empty document is an empty job, not a parse error.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Pass counts, when given, must be at least 1.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, passes) in [
            ("swap_passes", self.swap_passes),
            ("dither_passes", self.dither_passes),
        ] {
            if passes == Some(0) {
                return Err(ConfigError::Invalid {
                    key,
                    message: "must be at least 1".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Layer `overrides` (usually the CLI) on top of `self`.
    ///
    /// Values set in `overrides` win; flags can only be switched on.
    pub fn merged_with(self, overrides: JobConfig) -> JobConfig {
        JobConfig {
            ascending: self.ascending || overrides.ascending,
            swap_passes: overrides.swap_passes.or(self.swap_passes),
            dither_passes: overrides.dither_passes.or(self.dither_passes),
            seed: overrides.seed.or(self.seed),
            reorient: self.reorient || overrides.reorient,
            palette_out: overrides.palette_out.or(self.palette_out),
        }
    }
}
