//! Measure-button debouncing and the single-shot request flag
//!
//! The button context registers raw falling edges here; the acquisition
//! loop consumes at most one "measurement requested" event per raise.

use core::sync::atomic::{AtomicBool, Ordering};

/// Minimum interval between accepted button edges.
pub const DEBOUNCE_WINDOW_MS: u64 = 200;

/// Debounce policy for the measure button.
///
/// Accepts an edge only when at least the configured window has elapsed
/// since the previously accepted one; the stored timestamp advances on
/// accepted edges only, so a burst of bounces extends nothing.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PressDebouncer {
    window_ms: u64,
    last_accepted_ms: u64,
}

impl PressDebouncer {
    /// Debouncer with a custom window.
    pub const fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            last_accepted_ms: 0,
        }
    }

    /// Register a falling edge observed at `now_ms` milliseconds since
    /// boot. Returns `true` when the edge is accepted.
    pub fn register_edge(&mut self, now_ms: u64) -> bool {
        if now_ms.wrapping_sub(self.last_accepted_ms) < self.window_ms {
            return false;
        }
        self.last_accepted_ms = now_ms;
        true
    }
}

impl Default for PressDebouncer {
    fn default() -> Self {
        Self::new(DEBOUNCE_WINDOW_MS)
    }
}

/// Single-shot "measurement requested" flag shared between the button task
/// and the acquisition loop.
///
/// Restricted to plain loads and stores: thumbv6 cores have no atomic
/// read-modify-write, and a raise landing between the consumer's load and
/// clear folds into the cycle being started, same as the original flag.
pub struct MeasureRequest {
    requested: AtomicBool,
}

impl MeasureRequest {
    /// A lowered flag, usable in statics.
    pub const fn new() -> Self {
        Self {
            requested: AtomicBool::new(false),
        }
    }

    /// Raise the flag (button context).
    pub fn raise(&self) {
        self.requested.store(true, Ordering::Release);
    }

    /// Consume the flag; `true` at most once per raise.
    pub fn take(&self) -> bool {
        if self.requested.load(Ordering::Acquire) {
            self.requested.store(false, Ordering::Release);
            true
        } else {
            false
        }
    }

    /// Observe the flag without consuming it.
    pub fn is_raised(&self) -> bool {
        self.requested.load(Ordering::Acquire)
    }
}

impl Default for MeasureRequest {
    fn default() -> Self {
        Self::new()
    }
}
