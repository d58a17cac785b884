//! The [`MyDate`] value type.

use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, TimeDelta};
use serde::{Deserialize, Serialize};

use super::{DateError, DateRange, TimeInterval, TimeIntervalAmount};

/// A calendar date. Months and days are 1-based.
///
/// Ordering is lexicographic over `(year, month, day_of_month)`.
///
/// ```
/// use shop_koans_core::MyDate;
///
/// let a = MyDate::new(2021, 6, 15);
/// let b = MyDate::new(2021, 7, 1);
/// assert!(a < b);
/// assert_eq!(a.following_date().unwrap(), MyDate::new(2021, 6, 16));
/// assert_eq!("2021-06-15".parse::<MyDate>().unwrap(), a);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MyDate {
    /// Calendar year.
    pub year: i32,
    /// Month of the year, 1 to 12.
    pub month: i32,
    /// Day of the month, 1 to 31.
    pub day_of_month: i32,
}

impl MyDate {
    /// 1970-01-01, the date of timestamp zero.
    pub const EPOCH: Self = Self::new(1970, 1, 1);

    /// Create a date. No calendar validation is performed.
    #[must_use]
    pub const fn new(year: i32, month: i32, day_of_month: i32) -> Self {
        Self {
            year,
            month,
            day_of_month,
        }
    }

    /// Three-way comparison.
    ///
    /// Returns the difference of the first field that differs (years, then
    /// months, then days), so the sign says which date is later and zero
    /// means equal.
    #[must_use]
    pub const fn compare_to(&self, other: &Self) -> i32 {
        let years = self.year.saturating_sub(other.year);
        if years != 0 {
            return years;
        }
        let months = self.month.saturating_sub(other.month);
        if months != 0 {
            return months;
        }
        self.day_of_month.saturating_sub(other.day_of_month)
    }

    /// Inclusive range from `self` to `end`.
    #[must_use]
    pub const fn range_to(self, end: Self) -> DateRange {
        DateRange::new(self, end)
    }

    /// The next calendar day.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::OutOfRange`] if the result cannot be represented.
    pub fn following_date(&self) -> Result<Self, DateError> {
        self.checked_add(TimeInterval::Day)
    }

    /// Advance the date by an interval.
    ///
    /// Days and weeks are added to the normalized date. Years are applied one
    /// at a time, each advancing the year field and then normalizing, so
    /// 2020-02-29 plus one year is 2021-03-01 and `Year * n` always equals
    /// `n` single-year steps.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::OutOfRange`] if the result cannot be represented.
    pub fn checked_add(&self, interval: impl Into<TimeIntervalAmount>) -> Result<Self, DateError> {
        let interval = interval.into();
        let years = interval.year_shift();
        let step = years.signum();

        let mut shifted = *self;
        for _ in 0..years.unsigned_abs() {
            shifted = Self::new(
                shifted.year.saturating_add(step),
                shifted.month,
                shifted.day_of_month,
            )
            .normalized()?;
        }

        let date = shifted
            .to_naive()?
            .checked_add_signed(TimeDelta::days(interval.day_shift()))
            .ok_or(DateError::OutOfRange(shifted))?;
        Ok(Self::from_naive(date))
    }

    /// Apply intervals one after another, left to right.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::OutOfRange`] as soon as an intermediate result
    /// cannot be represented.
    pub fn checked_add_all<I, T>(&self, intervals: I) -> Result<Self, DateError>
    where
        I: IntoIterator<Item = T>,
        T: Into<TimeIntervalAmount>,
    {
        intervals
            .into_iter()
            .try_fold(*self, |date, interval| date.checked_add(interval))
    }

    /// Milliseconds since the Unix epoch at UTC midnight of this date.
    ///
    /// Out-of-calendar dates are normalized first.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::OutOfRange`] if the date cannot be represented.
    pub fn to_millis(&self) -> Result<i64, DateError> {
        Ok(self
            .to_naive()?
            .and_time(NaiveTime::MIN)
            .and_utc()
            .timestamp_millis())
    }

    /// The UTC calendar date containing the given timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::TimestampOutOfRange`] if the timestamp cannot be
    /// represented.
    pub fn from_millis(millis: i64) -> Result<Self, DateError> {
        DateTime::from_timestamp_millis(millis)
            .map(|dt| Self::from_naive(dt.date_naive()))
            .ok_or(DateError::TimestampOutOfRange(millis))
    }

    fn normalized(self) -> Result<Self, DateError> {
        self.to_naive().map(Self::from_naive)
    }

    /// Normalize into a real calendar date.
    fn to_naive(self) -> Result<NaiveDate, DateError> {
        let out_of_range = || DateError::OutOfRange(self);

        let months_from_zero = i64::from(self.year) * 12 + i64::from(self.month) - 1;
        let year = i32::try_from(months_from_zero.div_euclid(12)).map_err(|_| out_of_range())?;
        let month0 = u32::try_from(months_from_zero.rem_euclid(12)).map_err(|_| out_of_range())?;

        let first = NaiveDate::from_ymd_opt(year, month0 + 1, 1).ok_or_else(out_of_range)?;
        first
            .checked_add_signed(TimeDelta::days(i64::from(self.day_of_month) - 1))
            .ok_or_else(out_of_range)
    }

    #[allow(clippy::cast_possible_wrap)] // month <= 12 and day <= 31
    fn from_naive(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month() as i32, date.day() as i32)
    }
}

impl PartialOrd for MyDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MyDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare_to(other).cmp(&0)
    }
}

impl fmt::Display for MyDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.year, self.month, self.day_of_month
        )
    }
}

impl FromStr for MyDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DateError::Parse(format!("{s:?}, expected YYYY-MM-DD"));
        let date = NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| invalid())?;
        Ok(Self::from_naive(date))
    }
}

impl TryFrom<String> for MyDate {
    type Error = DateError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<MyDate> for String {
    fn from(date: MyDate) -> Self {
        date.to_string()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_to_is_sign_bearing() {
        let d = MyDate::new(2021, 6, 15);
        assert!(d.compare_to(&MyDate::new(2022, 1, 1)) < 0);
        assert!(d.compare_to(&MyDate::new(2021, 5, 31)) > 0);
        assert!(d.compare_to(&MyDate::new(2021, 6, 16)) < 0);
        assert_eq!(d.compare_to(&d), 0);
        assert_eq!(d.compare_to(&MyDate::new(2018, 12, 31)), 3);
    }

    #[test]
    fn test_ordering_is_lexicographic() {
        let mut dates = vec![
            MyDate::new(2021, 6, 15),
            MyDate::new(2020, 12, 31),
            MyDate::new(2021, 1, 30),
        ];
        dates.sort();
        assert_eq!(
            dates,
            [
                MyDate::new(2020, 12, 31),
                MyDate::new(2021, 1, 30),
                MyDate::new(2021, 6, 15),
            ]
        );
    }

    #[test]
    fn test_following_date_rolls_over() {
        let next = |y, m, d| MyDate::new(y, m, d).following_date().unwrap();
        assert_eq!(next(2021, 6, 15), MyDate::new(2021, 6, 16));
        assert_eq!(next(2021, 4, 30), MyDate::new(2021, 5, 1));
        assert_eq!(next(2021, 12, 31), MyDate::new(2022, 1, 1));
        assert_eq!(next(2020, 2, 28), MyDate::new(2020, 2, 29));
        assert_eq!(next(2021, 2, 28), MyDate::new(2021, 3, 1));
    }

    #[test]
    fn test_out_of_calendar_dates_normalize() {
        assert_eq!(
            MyDate::new(2021, 1, 32).following_date().unwrap(),
            MyDate::new(2021, 2, 2)
        );
        assert_eq!(
            MyDate::new(2021, 13, 1).following_date().unwrap(),
            MyDate::new(2022, 1, 2)
        );
    }

    #[test]
    fn test_out_of_range() {
        let far = MyDate::new(i32::MAX, 1, 1);
        assert!(matches!(far.following_date(), Err(DateError::OutOfRange(_))));
        assert!(far.to_millis().is_err());
    }

    #[test]
    fn test_millis_roundtrip() {
        assert_eq!(MyDate::EPOCH.to_millis().unwrap(), 0);
        let date = MyDate::new(2021, 6, 15);
        let millis = date.to_millis().unwrap();
        assert_eq!(millis, 1_623_715_200_000);
        assert_eq!(MyDate::from_millis(millis).unwrap(), date);
    }

    #[test]
    fn test_from_millis_mid_day_truncates_to_date() {
        let noon = 1_623_715_200_000 + 12 * 60 * 60 * 1000;
        assert_eq!(MyDate::from_millis(noon).unwrap(), MyDate::new(2021, 6, 15));
        assert_eq!(MyDate::from_millis(-1).unwrap(), MyDate::new(1969, 12, 31));
    }

    #[test]
    fn test_parse_and_display() {
        let date: MyDate = "2021-06-05".parse().unwrap();
        assert_eq!(date, MyDate::new(2021, 6, 5));
        assert_eq!(date.to_string(), "2021-06-05");
        assert!(matches!("2021-02-30".parse::<MyDate>(), Err(DateError::Parse(_))));
        assert!("yesterday".parse::<MyDate>().is_err());
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&MyDate::new(1999, 12, 31)).unwrap();
        assert_eq!(json, "\"1999-12-31\"");
        let parsed: MyDate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, MyDate::new(1999, 12, 31));
    }
}
