//! Generator configuration.
//!
//! Values come from three layers: built-in defaults, an optional YAML file,
//! and command-line flags. Later layers win.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Seed used when none is given.
pub const DEFAULT_SEED: u64 = 31415;
/// Output file used when none is given.
pub const DEFAULT_OUTPUT: &str = "data.txt";
/// Number of records written by default.
pub const DEFAULT_COUNT: usize = 100_000;
/// Exclusive upper bound on generated values (2^24).
pub const DEFAULT_UPPER_BOUND: u64 = 1 << 24;
/// Largest accepted upper bound; values are stored as `u32`.
pub const MAX_UPPER_BOUND: u64 = 1 << 32;

/// Configuration for a generator run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Random seed for reproducibility
    pub seed: u64,
    /// File the records are written to (created or truncated)
    pub output_path: PathBuf,
    /// Number of records to write
    pub count: usize,
    /// Values are drawn from `[0, value_upper_bound)`
    pub value_upper_bound: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            count: DEFAULT_COUNT,
            value_upper_bound: DEFAULT_UPPER_BOUND,
        }
    }
}

impl GeneratorConfig {
    /// Check that the value range is usable.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.value_upper_bound == 0 {
            anyhow::bail!("upper bound must be greater than 0");
        }
        if self.value_upper_bound > MAX_UPPER_BOUND {
            anyhow::bail!(
                "upper bound {} exceeds the maximum of {}",
                self.value_upper_bound,
                MAX_UPPER_BOUND
            );
        }
        Ok(())
    }

    /// Apply the settings present in a YAML config on top of this one.
    pub fn merge_yaml(mut self, yaml: &GeneratorYamlConfig) -> Self {
        if let Some(seed) = yaml.seed {
            self.seed = seed;
        }
        if let Some(ref output) = yaml.output {
            self.output_path = output.clone();
        }
        if let Some(count) = yaml.count {
            self.count = count;
        }
        if let Some(bound) = yaml.upper_bound {
            self.value_upper_bound = bound;
        }
        self
    }
}

/// YAML configuration file for the generate command.
///
/// Every field is optional; missing fields keep their defaults.
///
/// ```yaml
/// seed: 31415
/// output: data.txt
/// count: 100000
/// upper_bound: 16777216
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorYamlConfig {
    pub seed: Option<u64>,
    pub output: Option<PathBuf>,
    pub count: Option<usize>,
    pub upper_bound: Option<u64>,
}

impl GeneratorYamlConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    /// Parse configuration from YAML text
    pub fn parse(content: &str) -> anyhow::Result<Self> {
        // An empty document deserializes as null; treat it as all defaults.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: GeneratorYamlConfig = serde_yaml_ng::from_str(content)?;
        Ok(config)
    }
}
