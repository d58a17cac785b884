//! Calendar dates, inclusive date ranges, and interval arithmetic.
//!
//! [`MyDate`] is a plain `(year, month, day)` triple with 1-based months. It
//! does not validate its fields; arithmetic normalizes out-of-calendar values
//! leniently (month 13 is January of the next year, day 32 of January is
//! February 1st) using the proleptic Gregorian calendar.

mod interval;
mod my_date;
mod range;

pub use interval::{
    TimeInterval, TimeIntervalAmount, one_year_and_a_week_after,
    two_years_three_weeks_five_days_after,
};
pub use my_date::MyDate;
pub use range::{DateRange, DateRangeIter, iterate_over_date_range};

/// Errors that can occur in date arithmetic and parsing.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// The date, after normalization, is outside the supported calendar range.
    #[error("date {0} is outside the supported range")]
    OutOfRange(MyDate),
    /// The timestamp cannot be represented as a calendar date.
    #[error("timestamp {0}ms is outside the supported range")]
    TimestampOutOfRange(i64),
    /// The input is not a `YYYY-MM-DD` date.
    #[error("invalid date: {0}")]
    Parse(String),
}
