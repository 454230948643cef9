//! Calendar month periods.

use chrono::{DateTime, Datelike, Days, Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// A calendar month, always normalized to its first day.
///
/// Serialized as the first-day date (`"2026-01-01"`); deserializing any date
/// of the month normalizes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "NaiveDate", from = "NaiveDate")]
pub struct Period(NaiveDate);

impl Period {
    /// Month containing `date`.
    #[must_use]
    pub fn containing(date: NaiveDate) -> Self {
        Self(date - Days::new(u64::from(date.day0())))
    }

    /// Month containing the UTC calendar date of `at`.
    #[must_use]
    pub fn containing_instant(at: DateTime<Utc>) -> Self {
        Self::containing(at.date_naive())
    }

    /// Builds a period from a year and a 1-based month.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidPeriod` if the month is out of range.
    pub fn from_ym(year: i32, month: u32) -> Result<Self, EngineError> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(Self)
            .ok_or_else(|| EngineError::InvalidPeriod(format!("{year}-{month:02}")))
    }

    /// Parses `YYYY-MM` or `YYYY-MM-DD` (any day normalizes to the month).
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidPeriod` for anything else.
    pub fn parse(input: &str) -> Result<Self, EngineError> {
        let trimmed = input.trim();
        NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
            .or_else(|_| NaiveDate::parse_from_str(&format!("{trimmed}-01"), "%Y-%m-%d"))
            .map(Self::containing)
            .map_err(|_| EngineError::InvalidPeriod(input.to_string()))
    }

    /// First day of the month.
    #[must_use]
    pub const fn start(self) -> NaiveDate {
        self.0
    }

    /// Last day of the month.
    #[must_use]
    pub fn end(self) -> NaiveDate {
        self.next().0 - Days::new(1)
    }

    /// The following month.
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0 + Months::new(1))
    }

    /// The preceding month.
    #[must_use]
    pub fn previous(self) -> Self {
        Self(self.0 - Months::new(1))
    }

    /// Returns true if `date` falls within this month.
    #[must_use]
    pub fn contains(self, date: NaiveDate) -> bool {
        date >= self.start() && date <= self.end()
    }

    /// Returns true if the UTC calendar date of `at` falls within this month.
    #[must_use]
    pub fn contains_instant(self, at: DateTime<Utc>) -> bool {
        self.contains(at.date_naive())
    }

    /// Consecutive periods from `self` through `last`, inclusive.
    ///
    /// Empty when `last` precedes `self`.
    #[must_use]
    pub fn through(self, last: Self) -> Vec<Self> {
        let mut periods = Vec::new();
        let mut current = self;
        while current <= last {
            periods.push(current);
            current = current.next();
        }
        periods
    }
}

impl From<NaiveDate> for Period {
    fn from(date: NaiveDate) -> Self {
        Self::containing(date)
    }
}

impl From<Period> for NaiveDate {
    fn from(period: Period) -> Self {
        period.0
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m"))
    }
}
