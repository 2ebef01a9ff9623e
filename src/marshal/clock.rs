//! Time sources for stamping encoded messages

use std::cell::Cell;
use std::time::{Duration, SystemTime};

use crate::msg::Time;

/// Source of header stamps
pub trait Clock {
    /// Current time
    fn now(&self) -> Time;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Time {
        Time::from_system_time(SystemTime::now())
    }
}

/// Clock frozen at a single instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    time: Time,
}

impl FixedClock {
    pub fn new(time: Time) -> Self {
        FixedClock { time }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Time {
        self.time
    }
}

/// Clock that advances by a fixed step on every read
///
/// The first read returns the start time.
#[derive(Debug)]
pub struct StepClock {
    next_nanos: Cell<u64>,
    step_nanos: u64,
}

impl StepClock {
    /// Create a clock starting at `start` and advancing by `step` per read
    pub fn new(start: Time, step: Duration) -> Self {
        StepClock {
            next_nanos: Cell::new(start.as_nanos()),
            step_nanos: u64::try_from(step.as_nanos()).unwrap_or(u64::MAX),
        }
    }
}

impl Clock for StepClock {
    fn now(&self) -> Time {
        let current = self.next_nanos.get();
        self.next_nanos.set(current.saturating_add(self.step_nanos));
        Time::from_nanos(current)
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Time {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_never_moves() {
        let clock = FixedClock::new(Time::new(42, 7));
        assert_eq!(clock.now(), Time::new(42, 7));
        assert_eq!(clock.now(), Time::new(42, 7));
    }

    #[test]
    fn test_step_clock_advances() {
        let clock = StepClock::new(Time::new(10, 999_999_999), Duration::from_nanos(1));
        assert_eq!(clock.now(), Time::new(10, 999_999_999));
        assert_eq!(clock.now(), Time::new(11, 0));
        assert_eq!(clock.now(), Time::new(11, 1));
    }

    #[test]
    fn test_system_clock_is_after_epoch() {
        let first = SystemClock.now();
        let second = SystemClock.now();
        assert!(!first.is_zero());
        assert!(second >= first);
    }
}
