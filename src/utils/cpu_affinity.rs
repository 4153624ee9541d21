//! CPU pinning for experiment runs.
//!
//! Keeping markers and sorts on one core keeps the power signature of a
//! run on the same physical unit. Pinning is real on Linux (libc
//! `sched_setaffinity`); elsewhere the guard is a no-op that reports
//! itself as unpinned.

// ============================================================================
// Linux implementation using libc
// ============================================================================

#[cfg(target_os = "linux")]
mod platform {
    /// Affinity mask saved by [`pin`], restored by [`restore`].
    pub struct Saved(libc::cpu_set_t);

    /// Get the current CPU core the thread is running on
    pub fn current_cpu() -> Option<usize> {
        // SAFETY: sched_getcpu has no preconditions
        let cpu = unsafe { libc::sched_getcpu() };
        usize::try_from(cpu).ok()
    }

    /// Pin to `core_id`, returning the previous mask on success
    pub fn pin(core_id: usize) -> Option<Saved> {
        if core_id >= libc::CPU_SETSIZE as usize {
            return None;
        }
        // SAFETY: cpu_set_t is plain data; all-zero is the empty set
        unsafe {
            let mut original: libc::cpu_set_t = std::mem::zeroed();
            if libc::sched_getaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &mut original)
                != 0
            {
                return None;
            }

            let mut set: libc::cpu_set_t = std::mem::zeroed();
            libc::CPU_ZERO(&mut set);
            libc::CPU_SET(core_id, &mut set);
            if libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &set) == 0 {
                Some(Saved(original))
            } else {
                None
            }
        }
    }

    /// Restore a mask saved by [`pin`]
    pub fn restore(saved: &Saved) -> bool {
        // SAFETY: `saved.0` is a mask previously returned by sched_getaffinity
        unsafe {
            libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &saved.0) == 0
        }
    }
}

// ============================================================================
// Fallback for other platforms
// ============================================================================

#[cfg(not(target_os = "linux"))]
mod platform {
    pub struct Saved;

    pub fn current_cpu() -> Option<usize> {
        None
    }
    pub fn pin(_core_id: usize) -> Option<Saved> {
        None
    }
    pub fn restore(_saved: &Saved) -> bool {
        true
    }
}

/// Get the current CPU core the thread is running on
pub fn get_current_cpu() -> Option<usize> {
    platform::current_cpu()
}

// ============================================================================
// RAII Guard
// ============================================================================

/// RAII guard for CPU pinning - pins on creation, unpins on drop.
///
/// # Example
/// ```ignore
/// {
///     let _pin = CpuPinGuard::new(); // Thread pinned
///     // ... markers and sorts ...
/// } // Original affinity restored here
/// ```
pub struct CpuPinGuard {
    pinned: Option<(usize, platform::Saved)>,
}

impl CpuPinGuard {
    /// Pin to the core the thread is currently running on (core 0 if unknown).
    pub fn new() -> Self {
        Self::with_core(get_current_cpu().unwrap_or(0))
    }

    /// Pin to a specific core.
    pub fn with_core(core_id: usize) -> Self {
        Self {
            pinned: platform::pin(core_id).map(|saved| (core_id, saved)),
        }
    }

    /// Get the core ID this thread is pinned to, if any.
    pub fn core_id(&self) -> Option<usize> {
        self.pinned.as_ref().map(|(core, _)| *core)
    }

    /// Check if the thread was successfully pinned.
    pub fn is_pinned(&self) -> bool {
        self.pinned.is_some()
    }
}

impl Drop for CpuPinGuard {
    fn drop(&mut self) {
        if let Some((core_id, saved)) = self.pinned.take() {
            if !platform::restore(&saved) {
                tracing::warn!(core_id, "failed to restore CPU affinity");
            }
        }
    }
}

impl Default for CpuPinGuard {
    fn default() -> Self {
        Self::new()
    }
}
