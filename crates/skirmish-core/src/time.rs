//! Wall-clock pacing for the fixed-tick loop
//!
//! - `Tick` - logical time unit
//! - `TickTimer` - converts elapsed wall-clock time into discrete tick
//!   firings, driven by an explicit `Instant` so tests can use a synthetic
//!   clock instead of sleeping

use std::time::{Duration, Instant};

/// A discrete tick identifier (logical time unit)
pub type Tick = u64;

/// Interval between scheduled combat ticks
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Gate that fires once per elapsed tick interval
#[derive(Debug, Clone, Copy)]
pub struct TickTimer {
    last: Instant,
    interval: Duration,
}

impl TickTimer {
    /// Start a timer; the first firing is one full interval after `now`
    pub fn new(now: Instant, interval: Duration) -> Self {
        Self { last: now, interval }
    }

    /// Report whether a tick is due, rebasing on `now` when it is.
    ///
    /// Rebasing on `now` rather than on `last + interval` means a late check
    /// never triggers a burst of catch-up ticks; tick timing is approximate,
    /// with up to one loop iteration of jitter.
    pub fn fire(&mut self, now: Instant) -> bool {
        if now.duration_since(self.last) >= self.interval {
            self.last = now;
            true
        } else {
            false
        }
    }
}
