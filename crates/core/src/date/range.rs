//! Inclusive date ranges.

use core::iter::FusedIterator;

use serde::{Deserialize, Serialize};

use super::MyDate;

/// The dates from `start` to `end`, both included.
///
/// Iteration steps one calendar day at a time and can be restarted by
/// iterating the range again. A range whose start is after its end is empty.
///
/// ```
/// use shop_koans_core::MyDate;
///
/// let range = MyDate::new(2021, 2, 27).range_to(MyDate::new(2021, 3, 1));
/// let days: Vec<_> = range.iter().map(|d| d.day_of_month).collect();
/// assert_eq!(days, [27, 28, 1]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    /// First date of the range.
    pub start: MyDate,
    /// Last date of the range.
    pub end: MyDate,
}

impl DateRange {
    /// Create an inclusive range.
    #[must_use]
    pub const fn new(start: MyDate, end: MyDate) -> Self {
        Self { start, end }
    }

    /// Returns `true` if `start <= date <= end`.
    #[must_use]
    pub fn contains(&self, date: &MyDate) -> bool {
        self.start <= *date && *date <= self.end
    }

    /// Returns `true` if the range has no dates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Iterate the dates of the range in order.
    #[must_use]
    pub const fn iter(&self) -> DateRangeIter {
        DateRangeIter {
            next: Some(self.start),
            end: self.end,
        }
    }
}

impl IntoIterator for DateRange {
    type Item = MyDate;
    type IntoIter = DateRangeIter;

    fn into_iter(self) -> DateRangeIter {
        self.iter()
    }
}

impl IntoIterator for &DateRange {
    type Item = MyDate;
    type IntoIter = DateRangeIter;

    fn into_iter(self) -> DateRangeIter {
        self.iter()
    }
}

/// Iterator over a [`DateRange`].
#[derive(Debug, Clone)]
pub struct DateRangeIter {
    next: Option<MyDate>,
    end: MyDate,
}

impl Iterator for DateRangeIter {
    type Item = MyDate;

    fn next(&mut self) -> Option<MyDate> {
        let current = self.next.take().filter(|d| *d <= self.end)?;
        self.next = match current.following_date() {
            Ok(following) => Some(following),
            Err(e) => {
                tracing::warn!(date = %current, error = %e, "stopping date iteration early");
                None
            }
        };
        Some(current)
    }
}

impl FusedIterator for DateRangeIter {}

/// Call `handler` with every date from `first` to `last`, inclusive.
pub fn iterate_over_date_range<F>(first: MyDate, last: MyDate, handler: F)
where
    F: FnMut(MyDate),
{
    first.range_to(last).iter().for_each(handler);
}
