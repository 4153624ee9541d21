//! Utility modules for experiment execution and reporting.

pub mod cpu_affinity;
pub mod sleep;
pub mod stats;
pub mod tui;

// Re-export commonly used items
pub use cpu_affinity::CpuPinGuard;
pub use sleep::{interruptible_sleep, SleepOutcome};
pub use stats::{calculate_median, calculate_std_dev, format_duration, TimingSummary};
