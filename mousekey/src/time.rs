//! Monotonic time source used to pace mouse reports.
use embassy_time::{Duration, Instant};

/// A 16-bit millisecond tick.
///
/// The counter wraps every ~65s. Elapsed time is computed with wrapping
/// subtraction, so comparisons stay correct across the wrap as long as the
/// measured span is shorter than a full period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timestamp(u16);

impl Timestamp {
    pub const fn from_millis(ms: u64) -> Self {
        Self(ms as u16)
    }

    pub const fn as_millis(self) -> u16 {
        self.0
    }

    /// Time elapsed from `earlier` until `self`
    pub fn duration_since(self, earlier: Timestamp) -> Duration {
        Duration::from_millis(self.0.wrapping_sub(earlier.0) as u64)
    }
}

/// Source of [`Timestamp`]s
pub trait Clock {
    fn now(&self) -> Timestamp;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}

/// Clock backed by the embassy time driver
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now(&self) -> Timestamp {
        Timestamp::from_millis(Instant::now().as_millis())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn elapsed_survives_wraparound() {
        let before = Timestamp::from_millis(u16::MAX as u64 - 9);
        let after = Timestamp::from_millis(u16::MAX as u64 + 21);
        assert_eq!(after.as_millis(), 20);
        assert_eq!(after.duration_since(before), Duration::from_millis(30));
    }

    #[test]
    fn elapsed_without_wrap() {
        let start = Timestamp::from_millis(1000);
        assert_eq!(Timestamp::from_millis(1050).duration_since(start), Duration::from_millis(50));
        assert_eq!(start.duration_since(start), Duration::from_millis(0));
    }
}
