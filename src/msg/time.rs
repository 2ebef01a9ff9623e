//! Wall-clock stamp carried in message headers

use std::fmt;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

const NANOS_PER_SEC: u64 = 1_000_000_000;

/// Seconds and nanoseconds since the Unix epoch
///
/// `nsecs` is always below one second, so the derived ordering is
/// chronological. The fields stay private to keep it that way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Time {
    secs: u32,
    nsecs: u32,
}

impl Time {
    /// Create a stamp, carrying surplus nanoseconds into seconds
    pub fn new(secs: u32, nsecs: u32) -> Self {
        let carry = nsecs / NANOS_PER_SEC as u32;
        Time {
            secs: secs.saturating_add(carry),
            nsecs: nsecs % NANOS_PER_SEC as u32,
        }
    }

    /// Create a stamp only if `nsecs` is below one second
    pub fn try_new(secs: u32, nsecs: u32) -> Option<Self> {
        if (nsecs as u64) < NANOS_PER_SEC {
            Some(Time { secs, nsecs })
        } else {
            None
        }
    }

    /// Whole seconds
    pub fn secs(&self) -> u32 {
        self.secs
    }

    /// Nanoseconds within the second
    pub fn nsecs(&self) -> u32 {
        self.nsecs
    }

    /// Stamp from a total nanosecond count, saturating at the largest representable time
    pub fn from_nanos(nanos: u64) -> Self {
        let secs = nanos / NANOS_PER_SEC;
        if secs > u32::MAX as u64 {
            return Time { secs: u32::MAX, nsecs: (NANOS_PER_SEC - 1) as u32 };
        }
        Time {
            secs: secs as u32,
            nsecs: (nanos % NANOS_PER_SEC) as u32,
        }
    }

    /// Convert a `SystemTime`; times before the epoch map to zero
    pub fn from_system_time(time: SystemTime) -> Self {
        match time.duration_since(UNIX_EPOCH) {
            Ok(elapsed) => Time::from_duration(elapsed),
            Err(_) => Time::default(),
        }
    }

    /// Convert a duration since the epoch
    pub fn from_duration(elapsed: Duration) -> Self {
        if elapsed.as_secs() > u32::MAX as u64 {
            return Time { secs: u32::MAX, nsecs: (NANOS_PER_SEC - 1) as u32 };
        }
        Time {
            secs: elapsed.as_secs() as u32,
            nsecs: elapsed.subsec_nanos(),
        }
    }

    /// Total nanoseconds since the epoch
    pub fn as_nanos(&self) -> u64 {
        self.secs as u64 * NANOS_PER_SEC + self.nsecs as u64
    }

    /// True for the all-zero stamp of a message that was never encoded
    pub fn is_zero(&self) -> bool {
        self.secs == 0 && self.nsecs == 0
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:09}", self.secs, self.nsecs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_normalizes_nanoseconds() {
        let time = Time::new(1, 2_500_000_000);
        assert_eq!(time, Time { secs: 3, nsecs: 500_000_000 });
    }

    #[test]
    fn test_try_new_rejects_whole_seconds_in_nanos() {
        assert_eq!(Time::try_new(1, 999_999_999), Some(Time::new(1, 999_999_999)));
        assert_eq!(Time::try_new(1, 1_000_000_000), None);
        assert_eq!(Time::try_new(1, u32::MAX), None);
    }

    #[test]
    fn test_ordering_is_chronological_after_carry() {
        let later = Time::new(1, 1_500_000_000);
        assert_eq!((later.secs(), later.nsecs()), (2, 500_000_000));
        assert!(later > Time::new(2, 0));
        assert!(later < Time::new(2, 500_000_001));
    }

    #[test]
    fn test_nanos_roundtrip_and_ordering() {
        let early = Time::from_nanos(1_999_999_999);
        let late = Time::from_nanos(2_000_000_000);
        assert_eq!(early, Time { secs: 1, nsecs: 999_999_999 });
        assert_eq!(late.as_nanos(), 2_000_000_000);
        assert!(early < late);
    }

    #[test]
    fn test_display_pads_nanoseconds() {
        assert_eq!(Time::new(12, 5).to_string(), "12.000000005");
    }

    #[test]
    fn test_before_epoch_is_zero() {
        let before = UNIX_EPOCH - Duration::from_secs(10);
        assert!(Time::from_system_time(before).is_zero());
    }
}
