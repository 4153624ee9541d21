//! # Power Sort Experiment
//!
//! An experiment sorts copies of one dataset `runs` times. A marker is
//! emitted before the first run and after every run, so the power trace
//! reads:
//!
//! ```text
//! marker, sort #0, marker, sort #1, marker, ..., sort #(n-1), marker
//! ```
//!
//! Runs are strictly sequential on the calling thread.
//!
//! ```no_run
//! use power_sort::dataset::OrderingMode;
//! use power_sort::experiment::PowerSortExperiment;
//! use power_sort::registry::build_registry;
//!
//! let registry = build_registry();
//! let mut pse =
//!     PowerSortExperiment::with_name(&registry, "Quick Sort", 50_000, OrderingMode::Random1)?;
//! pse.set_marker_width_ms(250);
//! let elapsed = pse.run_experiment()?;
//! println!("{} took {:?}", pse, elapsed);
//! # Ok::<(), power_sort::error::ExperimentError>(())
//! ```

use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::dataset::{generate, Dataset, OrderingMode};
use crate::error::ExperimentError;
use crate::marker::{Marker, PulseMarker, DEFAULT_MARKER_WIDTH};
use crate::registry::SorterRegistry;
use crate::sort::{is_permutation, IntSorter};
use crate::utils::cpu_affinity::CpuPinGuard;
use crate::utils::stats::TimingSummary;

/// Default number of runs per experiment
pub const DEFAULT_RUNS: usize = 30;

/// A marker-delimited series of sorts over one dataset
pub struct PowerSortExperiment<M: Marker = PulseMarker> {
    sorter: Arc<dyn IntSorter>,
    dataset: Dataset,
    runs: usize,
    marker_width: Duration,
    keep_results: bool,
    pin_cpu: bool,
    marker: M,
    results: Option<Vec<Vec<i32>>>,
    sort_times: Vec<Duration>,
}

impl PowerSortExperiment<PulseMarker> {
    /// Create an experiment around an explicit sorter.
    ///
    /// # Errors
    /// [`ExperimentError::DatasetTooLarge`] for sizes beyond `i32::MAX`.
    pub fn new(
        sorter: Arc<dyn IntSorter>,
        size: usize,
        mode: OrderingMode,
    ) -> Result<Self, ExperimentError> {
        Ok(Self {
            sorter,
            dataset: generate(mode, size)?,
            runs: DEFAULT_RUNS,
            marker_width: DEFAULT_MARKER_WIDTH,
            keep_results: false,
            pin_cpu: false,
            marker: PulseMarker,
            results: None,
            sort_times: Vec::new(),
        })
    }

    /// Create an experiment with a sorter looked up by name, e.g. `"merge"`,
    /// `"MergeSort"` or `"Merge sort"`.
    pub fn with_name(
        registry: &SorterRegistry,
        algorithm: &str,
        size: usize,
        mode: OrderingMode,
    ) -> Result<Self, ExperimentError> {
        let sorter = registry.resolve(algorithm)?;
        Self::new(sorter, size, mode)
    }

    /// Create an experiment with the ordering mode given by its index
    /// (0 = sorted, 1 = reverse, 2..=4 = random).
    pub fn with_mode_index(
        registry: &SorterRegistry,
        algorithm: &str,
        size: usize,
        mode_index: usize,
    ) -> Result<Self, ExperimentError> {
        let mode = OrderingMode::from_index(mode_index)?;
        Self::with_name(registry, algorithm, size, mode)
    }
}

impl<M: Marker> PowerSortExperiment<M> {
    /// Replace the marker implementation, keeping every other setting.
    pub fn with_marker<N: Marker>(self, marker: N) -> PowerSortExperiment<N> {
        PowerSortExperiment {
            sorter: self.sorter,
            dataset: self.dataset,
            runs: self.runs,
            marker_width: self.marker_width,
            keep_results: self.keep_results,
            pin_cpu: self.pin_cpu,
            marker,
            results: self.results,
            sort_times: self.sort_times,
        }
    }

    /// Number of runs forming the experiment (default 30)
    pub fn runs(&self) -> usize {
        self.runs
    }

    pub fn set_runs(&mut self, runs: usize) {
        self.runs = runs;
    }

    /// Width of each marker phase (default 500 ms)
    pub fn marker_width(&self) -> Duration {
        self.marker_width
    }

    pub fn set_marker_width(&mut self, width: Duration) {
        self.marker_width = width;
    }

    pub fn set_marker_width_ms(&mut self, width_ms: u64) {
        self.marker_width = Duration::from_millis(width_ms);
    }

    /// Keep the sorted replicas of the next run for inspection
    pub fn set_keep_results(&mut self, keep: bool) {
        self.keep_results = keep;
    }

    pub fn keep_results(&self) -> bool {
        self.keep_results
    }

    /// Pin the thread to its current core for the duration of a run
    pub fn set_pin_cpu(&mut self, pin: bool) {
        self.pin_cpu = pin;
    }

    pub fn sorter(&self) -> &dyn IntSorter {
        self.sorter.as_ref()
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn marker(&self) -> &M {
        &self.marker
    }

    /// Sorted replicas of the last run, when results were kept
    pub fn results(&self) -> Option<&[Vec<i32>]> {
        self.results.as_deref()
    }

    /// Time spent in each sort of the last run, in run order
    pub fn sort_times(&self) -> &[Duration] {
        &self.sort_times
    }

    pub fn sort_timing_summary(&self) -> Option<TimingSummary> {
        TimingSummary::from_durations(&self.sort_times)
    }

    /// Run the whole marker/sort sequence and return the total wall-clock time,
    /// markers included.
    ///
    /// # Errors
    /// [`ExperimentError::Sort`] as soon as a sort fails. The remaining runs
    /// and markers are skipped and no results are kept.
    pub fn run_experiment(&mut self) -> Result<Duration, ExperimentError> {
        let start = Instant::now();
        self.results = None;
        self.sort_times.clear();

        let pin_guard = self.pin_cpu.then(CpuPinGuard::new);

        info!(
            sorter = self.sorter.name(),
            size = self.dataset.len(),
            mode = %self.dataset.mode(),
            runs = self.runs,
            marker_ms = self.marker_width.as_millis() as u64,
            pinned_core = ?pin_guard.as_ref().and_then(CpuPinGuard::core_id),
            "starting experiment"
        );

        let mut replicas: Vec<Vec<i32>> =
            (0..self.runs).map(|_| self.dataset.replicate()).collect();
        let mut sort_times = Vec::with_capacity(self.runs);

        self.marker.emit(self.marker_width);
        for (run, replica) in replicas.iter_mut().enumerate() {
            let sort_start = Instant::now();
            self.sorter
                .sort(replica)
                .map_err(|source| ExperimentError::Sort {
                    run,
                    sorter: self.sorter.name(),
                    source,
                })?;
            let sort_time = sort_start.elapsed();
            sort_times.push(sort_time);
            debug!(run, sort_us = sort_time.as_micros() as u64, "run complete");

            self.marker.emit(self.marker_width);
        }

        let elapsed = start.elapsed();
        info!(elapsed_ms = elapsed.as_millis() as u64, "experiment complete");

        self.sort_times = sort_times;
        if self.keep_results {
            self.results = Some(replicas);
        }
        Ok(elapsed)
    }

    /// Check that every kept replica is sorted and a permutation of the dataset.
    ///
    /// # Errors
    /// [`ExperimentError::Verification`] naming the first bad replica, or
    /// when no results were kept.
    pub fn verify_results(&self) -> Result<(), ExperimentError> {
        let results = self.results.as_ref().ok_or_else(|| {
            ExperimentError::Verification("no results kept, enable keep_results first".into())
        })?;

        for (i, replica) in results.iter().enumerate() {
            if let Some(pos) = replica.windows(2).position(|w| w[0] > w[1]) {
                return Err(ExperimentError::Verification(format!(
                    "wrong order of element {} in replica {}",
                    pos + 1,
                    i
                )));
            }
            if !is_permutation(self.dataset.as_slice(), replica) {
                return Err(ExperimentError::Verification(format!(
                    "replica {} is not a permutation of the dataset",
                    i
                )));
            }
        }
        Ok(())
    }
}

impl<M: Marker> fmt::Display for PowerSortExperiment<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Experiment on {}, array size: {} sorted: {}",
            self.sorter.name(),
            self.dataset.len(),
            self.dataset.mode()
        )
    }
}

/// Convert an elapsed duration to whole milliseconds
pub fn elapsed_ms(elapsed: Duration) -> u64 {
    elapsed.as_millis().min(u64::MAX as u128) as u64
}
