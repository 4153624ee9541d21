//! Summary statistics over per-run sort durations.

use std::time::Duration;

/// Aggregate view of a set of timings
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimingSummary {
    /// Number of samples
    pub samples: usize,
    pub avg: Duration,
    pub median: Duration,
    pub min: Duration,
    pub max: Duration,
    /// Sample standard deviation (n - 1 denominator)
    pub std_dev: Duration,
}

impl TimingSummary {
    /// Summarize `times`, or `None` when there are no samples.
    pub fn from_durations(times: &[Duration]) -> Option<Self> {
        if times.is_empty() {
            return None;
        }

        let min = times.iter().min().copied().unwrap_or_default();
        let max = times.iter().max().copied().unwrap_or_default();
        let total: Duration = times.iter().sum();
        let avg = total / times.len() as u32;

        Some(Self {
            samples: times.len(),
            avg,
            median: calculate_median(times),
            min,
            max,
            std_dev: calculate_std_dev(times, avg),
        })
    }

    /// Coefficient of variation (std_dev / avg), 0 for a zero average
    pub fn cv(&self) -> f64 {
        let avg = self.avg.as_nanos() as f64;
        if avg > 0.0 {
            self.std_dev.as_nanos() as f64 / avg
        } else {
            0.0
        }
    }
}

/// Calculate standard deviation from a list of durations
pub fn calculate_std_dev(times: &[Duration], mean: Duration) -> Duration {
    if times.len() < 2 {
        return Duration::ZERO;
    }

    let mean_ns = mean.as_nanos() as f64;
    let variance: f64 = times
        .iter()
        .map(|t| {
            let diff = t.as_nanos() as f64 - mean_ns;
            diff * diff
        })
        .sum::<f64>()
        / (times.len() - 1) as f64;

    Duration::from_nanos(variance.sqrt() as u64)
}

/// Calculate median from a slice of durations (upper median for even counts).
pub fn calculate_median(times: &[Duration]) -> Duration {
    if times.is_empty() {
        return Duration::ZERO;
    }
    let mut sorted: Vec<_> = times.to_vec();
    sorted.sort();
    sorted[sorted.len() / 2]
}

/// Format a duration with a unit suited to its magnitude
pub fn format_duration(d: Duration) -> String {
    let ns = d.as_nanos();
    if ns < 1_000 {
        format!("{} ns", ns)
    } else if ns < 1_000_000 {
        format!("{:.2} µs", ns as f64 / 1e3)
    } else if ns < 1_000_000_000 {
        format!("{:.2} ms", ns as f64 / 1e6)
    } else {
        format!("{:.3} s", ns as f64 / 1e9)
    }
}
