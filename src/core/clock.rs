//! Monotonic clocks for the round timer

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Source of monotonic time
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall-clock monotonic time, for live detector feeds
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

const DEADLINE_HEADROOM: Duration = Duration::from_secs(24 * 60 * 60);

/// Manually driven clock. Clones share the same time.
#[derive(Debug, Clone)]
pub struct ManualClock {
    origin: Instant,
    elapsed: Rc<Cell<Duration>>,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            elapsed: Rc::new(Cell::new(Duration::ZERO)),
        }
    }

    /// Move time forward by `step`. Steps past the representable range are dropped.
    pub fn advance(&self, step: Duration) {
        if let Some(elapsed) = self.elapsed.get().checked_add(step) {
            self.set_elapsed(elapsed);
        }
    }

    /// Jump to `elapsed` since creation. Earlier or unrepresentable times are ignored.
    pub fn set_elapsed(&self, elapsed: Duration) {
        if elapsed > self.elapsed.get() && self.representable(elapsed) {
            self.elapsed.set(elapsed);
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed.get()
    }

    /// Leaves room for timer deadlines computed from `now()`
    fn representable(&self, elapsed: Duration) -> bool {
        elapsed
            .checked_add(DEADLINE_HEADROOM)
            .and_then(|d| self.origin.checked_add(d))
            .is_some()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.origin + self.elapsed.get()
    }
}
