//! Time source abstraction.
//!
//! Every entry point that needs "now" takes a `&dyn Clock` instead of reading
//! the system clock, so month boundaries can be simulated in tests.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use super::period::Period;

/// Source of the current instant.
pub trait Clock: Send + Sync {
    /// Current instant.
    fn now(&self) -> DateTime<Utc>;

    /// Current UTC calendar date.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }

    /// Calendar month containing `today()`.
    fn current_period(&self) -> Period {
        Period::containing(self.today())
    }
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Freezes the clock at midnight UTC of `date`.
    #[must_use]
    pub fn at_date(date: NaiveDate) -> Self {
        Self(date.and_time(NaiveTime::MIN).and_utc())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_period() {
        let clock = FixedClock::at_date(NaiveDate::from_ymd_opt(2026, 3, 17).unwrap());
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2026, 3, 17).unwrap());
        assert_eq!(
            clock.current_period().start(),
            NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()
        );
    }

    #[test]
    fn test_system_clock_is_usable_as_trait_object() {
        let clock: &dyn Clock = &SystemClock;
        assert!(clock.current_period().start() <= clock.today());
    }
}
