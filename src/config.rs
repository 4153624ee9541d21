//! Experiment configuration loaded from TOML.
//!
//! Every field has a default, so an empty file is a valid configuration:
//!
//! ```toml
//! algorithm = "merge sort"
//! size = 50000
//! ordering = "random2"
//! runs = 30
//! marker_width_ms = 250
//! keep_results = false
//! pin_cpu = true
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::dataset::OrderingMode;
use crate::error::ExperimentError;
use crate::experiment::{PowerSortExperiment, DEFAULT_RUNS};
use crate::marker::DEFAULT_MARKER_WIDTH;
use crate::registry::SorterRegistry;

/// Settings of one experiment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExperimentConfig {
    /// Sorter name, resolved through the registry
    pub algorithm: String,
    /// Dataset length
    pub size: usize,
    /// Initial arrangement: name or index
    pub ordering: OrderingMode,
    /// Number of sort runs
    pub runs: usize,
    /// Width of each marker phase, in milliseconds
    pub marker_width_ms: u64,
    /// Keep sorted replicas for verification
    pub keep_results: bool,
    /// Pin the experiment thread to one core
    pub pin_cpu: bool,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            algorithm: "quick".to_string(),
            size: 50_000,
            ordering: OrderingMode::default(),
            runs: DEFAULT_RUNS,
            marker_width_ms: DEFAULT_MARKER_WIDTH.as_millis() as u64,
            keep_results: false,
            pin_cpu: false,
        }
    }
}

impl ExperimentConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ExperimentError> {
        toml::from_str(content).map_err(|e| ExperimentError::Config(e.to_string()))
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ExperimentError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ExperimentError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    pub fn to_toml_string(&self) -> Result<String, ExperimentError> {
        toml::to_string(self).map_err(|e| ExperimentError::Config(e.to_string()))
    }

    /// Build an experiment with these settings.
    ///
    /// # Errors
    /// Unknown algorithm names and oversized datasets are rejected before
    /// any experiment exists.
    pub fn build(&self, registry: &SorterRegistry) -> Result<PowerSortExperiment, ExperimentError> {
        let mut experiment =
            PowerSortExperiment::with_name(registry, &self.algorithm, self.size, self.ordering)?;
        experiment.set_runs(self.runs);
        experiment.set_marker_width_ms(self.marker_width_ms);
        experiment.set_keep_results(self.keep_results);
        experiment.set_pin_cpu(self.pin_cpu);
        Ok(experiment)
    }
}
