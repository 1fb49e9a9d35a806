//! Portable stop signal for `no_std` environments.
//!
//! A one-way flag built on `critical-section`. It can be raised from an
//! interrupt, a signal handler thread or a test, and is polled by the
//! animation loops between steps.

use core::cell::Cell;

use critical_section::Mutex;

/// A flag requesting the engine to stop.
///
/// Once raised it stays raised for the lifetime of the signal.
pub struct StopSignal {
    raised: Mutex<Cell<bool>>,
}

impl StopSignal {
    /// Create a new signal in the lowered state.
    pub const fn new() -> Self {
        Self {
            raised: Mutex::new(Cell::new(false)),
        }
    }

    /// Request the engine to stop.
    pub fn raise(&self) {
        critical_section::with(|cs| self.raised.borrow(cs).set(true));
    }

    /// Check if a stop was requested.
    pub fn is_raised(&self) -> bool {
        critical_section::with(|cs| self.raised.borrow(cs).get())
    }
}

impl Default for StopSignal {
    fn default() -> Self {
        Self::new()
    }
}
