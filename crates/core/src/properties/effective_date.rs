//! Date property stored as a timestamp.

use crate::date::{DateError, MyDate};

/// Read/write accessor that stores a [`MyDate`] as milliseconds since the
/// Unix epoch and decodes it again on every read.
///
/// Reading before the first write yields [`MyDate::EPOCH`]. A calendar-valid
/// date reads back unchanged; an out-of-calendar one such as `2021-01-32`
/// reads back normalized (`2021-02-01`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EffectiveDate {
    time_in_millis: Option<i64>,
}

impl EffectiveDate {
    /// An accessor that has not been written.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            time_in_millis: None,
        }
    }

    /// Decode the stored timestamp, or the epoch if nothing was stored.
    #[must_use]
    pub fn get(&self) -> MyDate {
        self.time_in_millis
            .and_then(|millis| MyDate::from_millis(millis).ok())
            .unwrap_or(MyDate::EPOCH)
    }

    /// Encode and store `date`.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::OutOfRange`] if the date has no timestamp; the
    /// previously stored value is kept.
    pub fn set(&mut self, date: MyDate) -> Result<(), DateError> {
        let millis = date.to_millis()?;
        tracing::debug!(%date, millis, "storing effective date");
        self.time_in_millis = Some(millis);
        Ok(())
    }

    /// The raw stored timestamp.
    #[must_use]
    pub const fn time_in_millis(&self) -> Option<i64> {
        self.time_in_millis
    }
}

/// A record whose `date` is held by an [`EffectiveDate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Agreement {
    date: EffectiveDate,
}

impl Agreement {
    /// The agreement date (the epoch until one is set).
    #[must_use]
    pub fn date(&self) -> MyDate {
        self.date.get()
    }

    /// Set the agreement date.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::OutOfRange`] if the date has no timestamp.
    pub fn set_date(&mut self, date: MyDate) -> Result<(), DateError> {
        self.date.set(date)
    }

    /// The timestamp the date is stored as, if one was set.
    #[must_use]
    pub const fn time_in_millis(&self) -> Option<i64> {
        self.date.time_in_millis()
    }
}
