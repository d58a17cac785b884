//! Property that counts its writes.

/// A value whose every write increments a counter.
///
/// The counter only ever goes up, by exactly one per [`set`](Self::set),
/// whether or not the value changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountedProperty<T> {
    value: Option<T>,
    counter: u64,
}

impl<T> CountedProperty<T> {
    /// An unset property with a zero counter.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            value: None,
            counter: 0,
        }
    }

    /// The current value, if one has been written.
    #[must_use]
    pub const fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Store a value (or clear it with `None`) and bump the counter.
    pub fn set(&mut self, value: Option<T>) {
        self.value = value;
        self.counter += 1;
    }

    /// Number of writes so far.
    #[must_use]
    pub const fn counter(&self) -> u64 {
        self.counter
    }
}

impl<T> Default for CountedProperty<T> {
    fn default() -> Self {
        Self::new()
    }
}
