//! Wall-clock delay that wakes up early on stop

use std::thread;
use std::time::{Duration, Instant};

use embedded_hal::delay::DelayNs;
use pixel_control::StopSignal;

/// Blocking delay that parks the current thread
///
/// The stop handler unparks the thread after raising the signal, so a wait
/// ends as soon as a stop is requested instead of running to its deadline.
pub(crate) struct ParkingDelay {
    stop: &'static StopSignal,
}

impl ParkingDelay {
    pub(crate) const fn new(stop: &'static StopSignal) -> Self {
        Self { stop }
    }

    fn wait(&self, duration: Duration) {
        let deadline = Instant::now() + duration;
        // park_timeout may wake spuriously
        while !self.stop.is_raised() {
            let now = Instant::now();
            if now >= deadline {
                return;
            }
            thread::park_timeout(deadline - now);
        }
    }
}

impl DelayNs for ParkingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.wait(Duration::from_nanos(u64::from(ns)));
    }

    fn delay_us(&mut self, us: u32) {
        self.wait(Duration::from_micros(u64::from(us)));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.wait(Duration::from_millis(u64::from(ms)));
    }
}
