//! Thread suspension that reports interruptions instead of hiding them.
//!
//! `std::thread::sleep` silently restarts after a signal. The marker protocol
//! needs the opposite: an interrupted sleep ends the phase early, and the
//! caller decides what that means. On Unix this is a single `nanosleep`
//! call; other platforms fall back to `std::thread::sleep`, which never
//! reports an interruption.

use std::time::Duration;

/// How a sleep ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SleepOutcome {
    /// The full duration elapsed
    Completed,
    /// A signal woke the thread early
    Interrupted {
        /// Time that was left when the thread woke up
        remaining: Duration,
    },
}

impl SleepOutcome {
    pub fn is_interrupted(&self) -> bool {
        matches!(self, SleepOutcome::Interrupted { .. })
    }
}

#[cfg(unix)]
mod platform {
    use super::SleepOutcome;
    use std::time::Duration;

    fn to_timespec(duration: Duration) -> libc::timespec {
        libc::timespec {
            tv_sec: duration.as_secs().min(libc::time_t::MAX as u64) as libc::time_t,
            tv_nsec: duration.subsec_nanos() as _,
        }
    }

    fn from_timespec(ts: &libc::timespec) -> Duration {
        Duration::new(ts.tv_sec.max(0) as u64, ts.tv_nsec.max(0) as u32)
    }

    pub fn sleep(duration: Duration) -> SleepOutcome {
        let request = to_timespec(duration);
        let mut remaining = libc::timespec {
            tv_sec: 0,
            tv_nsec: 0,
        };

        // SAFETY: both pointers reference live, properly initialized timespecs
        let rc = unsafe { libc::nanosleep(&request, &mut remaining) };
        if rc == 0 {
            return SleepOutcome::Completed;
        }

        match std::io::Error::last_os_error().raw_os_error() {
            Some(libc::EINTR) => SleepOutcome::Interrupted {
                remaining: from_timespec(&remaining),
            },
            _ => {
                // EINVAL cannot come from a normalized request; sleep anyway
                std::thread::sleep(duration);
                SleepOutcome::Completed
            }
        }
    }
}

#[cfg(not(unix))]
mod platform {
    use super::SleepOutcome;
    use std::time::Duration;

    pub fn sleep(duration: Duration) -> SleepOutcome {
        std::thread::sleep(duration);
        SleepOutcome::Completed
    }
}

/// Suspend the calling thread for `duration`, or until a signal interrupts it.
pub fn interruptible_sleep(duration: Duration) -> SleepOutcome {
    if duration.is_zero() {
        return SleepOutcome::Completed;
    }
    platform::sleep(duration)
}
