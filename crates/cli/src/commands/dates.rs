//! Date range and interval commands.
//!
//! # Usage
//!
//! ```bash
//! # List every date from one day to another (inclusive)
//! koans dates range 2021-02-26 2021-03-02
//!
//! # Shift a date by years, weeks and days (applied in that order)
//! koans dates shift 2021-06-15 --years 1 --weeks 1
//!
//! # Shift KOANS_TODAY
//! koans dates shift --days 30
//! ```

use shop_koans_core::date::iterate_over_date_range;
use shop_koans_core::properties::Agreement;
use shop_koans_core::{DateError, MyDate, TimeInterval, TimeIntervalAmount};
use thiserror::Error;
use tracing::info;

/// Errors that can occur while running date commands.
#[derive(Debug, Error)]
pub enum DatesError {
    /// No date argument and no `KOANS_TODAY`.
    #[error("No date given: pass one or set KOANS_TODAY")]
    NoDate,

    /// Date arithmetic failed.
    #[error(transparent)]
    Date(#[from] DateError),
}

/// Log every date in `[from, to]` and return how many there were.
pub fn range(from: MyDate, to: MyDate) -> usize {
    let range = from.range_to(to);
    if range.is_empty() {
        info!("{from} is after {to}: empty range");
        return 0;
    }

    let mut count = 0;
    iterate_over_date_range(from, to, |date| {
        count += 1;
        info!("{date}");
    });
    info!("{count} dates");
    count
}

/// The intervals `shift` applies, in order, skipping zero amounts.
#[must_use]
pub fn intervals(years: i32, weeks: i32, days: i32) -> Vec<TimeIntervalAmount> {
    [
        TimeInterval::Year * years,
        TimeInterval::Week * weeks,
        TimeInterval::Day * days,
    ]
    .into_iter()
    .filter(|i| i.amount != 0)
    .collect()
}

/// Shift a date, store the result in an [`Agreement`], and log the stored
/// timestamp along with the date read back from it.
///
/// # Errors
///
/// Returns an error if no date is available or the result is out of range.
pub fn shift(
    date: Option<MyDate>,
    today: Option<MyDate>,
    years: i32,
    weeks: i32,
    days: i32,
) -> Result<Agreement, DatesError> {
    let start = date.or(today).ok_or(DatesError::NoDate)?;
    let shifted = start.checked_add_all(intervals(years, weeks, days))?;

    let mut agreement = Agreement::default();
    agreement.set_date(shifted)?;

    if let Some(millis) = agreement.time_in_millis() {
        info!("{start} + {years}y {weeks}w {days}d = {shifted} (stored as {millis} ms)");
    }
    info!("Read back: {}", agreement.date());
    Ok(agreement)
}
