//! Error types for experiments and sorting strategies.

/// Failure reported by a sorting strategy.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SortError {
    #[error("counting sort requires non-negative values, found {0}")]
    NegativeValue(i32),

    #[error("{0}")]
    Failed(String),
}

/// Errors raised while configuring or running an experiment.
#[derive(Debug, thiserror::Error)]
pub enum ExperimentError {
    #[error("could not find any algorithm named `{0}`")]
    UnknownAlgorithm(String),

    #[error("ordering mode index {index} is out of range, must be between 0 and {max}")]
    InvalidOrderingIndex { index: usize, max: usize },

    #[error("unknown ordering mode `{0}`")]
    UnknownOrderingMode(String),

    #[error("dataset size {size} exceeds the maximum of {max}")]
    DatasetTooLarge { size: usize, max: usize },

    #[error("sorter `{sorter}` failed in run {run}: {source}")]
    Sort {
        run: usize,
        sorter: &'static str,
        #[source]
        source: SortError,
    },

    #[error("verification failed: {0}")]
    Verification(String),

    #[error("configuration error: {0}")]
    Config(String),
}
