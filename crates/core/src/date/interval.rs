//! Time intervals that can be added to a [`MyDate`].

use core::ops::Mul;

use serde::{Deserialize, Serialize};

use super::{DateError, MyDate};

/// Supported interval units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeInterval {
    /// One calendar day.
    Day,
    /// Seven days.
    Week,
    /// Same month and day in the following year.
    Year,
}

/// A number of [`TimeInterval`] units, e.g. `TimeInterval::Week * 3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeIntervalAmount {
    /// The unit.
    pub interval: TimeInterval,
    /// How many units; negative amounts go backwards.
    pub amount: i32,
}

impl TimeIntervalAmount {
    /// Create an interval amount.
    #[must_use]
    pub const fn new(interval: TimeInterval, amount: i32) -> Self {
        Self { interval, amount }
    }

    pub(super) const fn year_shift(self) -> i32 {
        match self.interval {
            TimeInterval::Year => self.amount,
            TimeInterval::Day | TimeInterval::Week => 0,
        }
    }

    pub(super) fn day_shift(self) -> i64 {
        match self.interval {
            TimeInterval::Day => i64::from(self.amount),
            TimeInterval::Week => i64::from(self.amount) * 7,
            TimeInterval::Year => 0,
        }
    }
}

impl From<TimeInterval> for TimeIntervalAmount {
    fn from(interval: TimeInterval) -> Self {
        Self::new(interval, 1)
    }
}

impl Mul<i32> for TimeInterval {
    type Output = TimeIntervalAmount;

    fn mul(self, amount: i32) -> TimeIntervalAmount {
        TimeIntervalAmount::new(self, amount)
    }
}

/// `today + YEAR + WEEK`.
///
/// # Errors
///
/// Returns [`DateError::OutOfRange`] if the result cannot be represented.
pub fn one_year_and_a_week_after(today: MyDate) -> Result<MyDate, DateError> {
    today.checked_add_all([TimeInterval::Year, TimeInterval::Week])
}

/// `today + YEAR * 2 + WEEK * 3 + DAY * 5`.
///
/// # Errors
///
/// Returns [`DateError::OutOfRange`] if the result cannot be represented.
pub fn two_years_three_weeks_five_days_after(today: MyDate) -> Result<MyDate, DateError> {
    today.checked_add_all([
        TimeInterval::Year * 2,
        TimeInterval::Week * 3,
        TimeInterval::Day * 5,
    ])
}
