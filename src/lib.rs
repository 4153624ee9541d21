//! # Power-Sort
//!
//! Marker-delimited sorting experiments for power-consumption tracing.
//!
//! An experiment repeatedly sorts copies of a reproducible dataset and
//! brackets every run with a Sleep-Busy-Sleep power pulse, so an external
//! power recorder can cut the trace into runs by current draw alone.

pub mod config;
pub mod dataset;
pub mod error;
pub mod experiment;
pub mod marker;
pub mod random;
pub mod registry;
pub mod sort;
pub mod utils;

/// Re-export tui from utils
pub use utils::tui;

/// Re-export commonly used items
pub mod prelude {
    pub use crate::config::ExperimentConfig;
    pub use crate::dataset::{generate, Dataset, OrderingMode};
    pub use crate::error::{ExperimentError, SortError};
    pub use crate::experiment::PowerSortExperiment;
    pub use crate::marker::{pulse, Marker, PulseMarker};
    pub use crate::registry::{build_registry, SorterRegistry};
    pub use crate::sort::IntSorter;
}
