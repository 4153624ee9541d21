//! # Marker Protocol
//!
//! A marker is one power pulse with three phases of nominal width `w`:
//!
//! ```text
//!    _B__
//!    |  |   _ Run__
//!    |  |   |     |
//! _S_|  |_S_|     |_...
//! ```
//!
//! - **Sleep**: the thread is suspended, low current draw
//! - **Busy**: a side-effect-free counting loop, high current draw.
//!   It polls a monotonic clock and exits once `w` has elapsed, so it is
//!   never shorter than `w` whatever the CPU speed.
//! - **Sleep**: as the first phase
//!
//! Timing is best-effort. Sleeps may overrun by the scheduler granularity,
//! and a sleep interrupted by a signal simply ends early: the pulse goes
//! on with the next phase instead of failing.

use std::hint::black_box;
use std::time::{Duration, Instant};

use crate::utils::sleep::{interruptible_sleep, SleepOutcome};

/// Default marker pulse width
pub const DEFAULT_MARKER_WIDTH: Duration = Duration::from_millis(500);

/// Measured durations of one pulse
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PulseTiming {
    pub sleep_before: Duration,
    pub busy: Duration,
    pub sleep_after: Duration,
    /// Whether either sleep phase was cut short by a signal
    pub interrupted: bool,
}

impl PulseTiming {
    pub fn total(&self) -> Duration {
        self.sleep_before + self.busy + self.sleep_after
    }
}

/// Something the experiment engine can emit between runs.
pub trait Marker {
    fn emit(&mut self, width: Duration);
}

/// Marker that produces the real Sleep-Busy-Sleep pulse
#[derive(Clone, Copy, Debug, Default)]
pub struct PulseMarker;

impl Marker for PulseMarker {
    fn emit(&mut self, width: Duration) {
        pulse(width);
    }
}

fn sleep_phase(width: Duration, phase: &'static str) -> (Duration, bool) {
    let start = Instant::now();
    let outcome = interruptible_sleep(width);
    let elapsed = start.elapsed();

    if let SleepOutcome::Interrupted { remaining } = outcome {
        tracing::debug!(
            phase,
            remaining_us = remaining.as_micros() as u64,
            "marker sleep interrupted, continuing"
        );
    }
    (elapsed, outcome.is_interrupted())
}

/// Keep the CPU busy until `width` has elapsed since entry.
pub fn busy_phase(width: Duration) -> Duration {
    let start = Instant::now();
    let mut count: u64 = 0;

    loop {
        // Small unit of work between clock reads
        for i in 0..64u64 {
            count = black_box(count.wrapping_add(i));
        }
        let elapsed = start.elapsed();
        if elapsed >= width {
            black_box(count);
            return elapsed;
        }
    }
}

/// Emit one blocking Sleep-Busy-Sleep pulse of the given width.
pub fn pulse(width: Duration) -> PulseTiming {
    let (sleep_before, first_interrupted) = sleep_phase(width, "sleep-before");
    let busy = busy_phase(width);
    let (sleep_after, second_interrupted) = sleep_phase(width, "sleep-after");

    let timing = PulseTiming {
        sleep_before,
        busy,
        sleep_after,
        interrupted: first_interrupted || second_interrupted,
    };
    tracing::trace!(
        width_ms = width.as_millis() as u64,
        total_us = timing.total().as_micros() as u64,
        "marker"
    );
    timing
}
