//! Time sources for the measurement harness

use std::time::Instant;

/// Monotonic nanosecond time source.
///
/// Readings must never decrease. Only differences between readings are
/// meaningful.
pub trait Clock {
    /// Current reading in nanoseconds.
    fn now_ns(&mut self) -> u64;
}

/// Host monotonic clock (`std::time::Instant`).
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    /// Start a clock whose zero is the moment of creation.
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_ns(&mut self) -> u64 {
        // Saturates after ~584 years of uptime.
        u64::try_from(self.origin.elapsed().as_nanos()).unwrap_or(u64::MAX)
    }
}

/// Deterministic clock that advances by a fixed step on every reading.
///
/// Every timed invocation therefore measures exactly `step_ns`, which makes
/// medians and winner decisions reproducible in tests.
#[derive(Debug, Clone, Copy)]
pub struct StepClock {
    now: u64,
    step_ns: u64,
}

impl StepClock {
    /// Create a clock starting at zero that advances `step_ns` per reading.
    #[must_use]
    pub const fn new(step_ns: u64) -> Self {
        Self { now: 0, step_ns }
    }
}

impl Clock for StepClock {
    fn now_ns(&mut self) -> u64 {
        let reading = self.now;
        self.now = self.now.saturating_add(self.step_ns);
        reading
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monotonic_never_decreases() {
        let mut clock = MonotonicClock::new();
        let mut last = clock.now_ns();
        for _ in 0..1000 {
            let next = clock.now_ns();
            assert!(next >= last);
            last = next;
        }
    }

    #[test]
    fn test_step_clock() {
        let mut clock = StepClock::new(250);
        assert_eq!(clock.now_ns(), 0);
        assert_eq!(clock.now_ns(), 250);
        assert_eq!(clock.now_ns(), 500);
    }
}
