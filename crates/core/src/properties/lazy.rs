//! Lazily initialized property.

use std::cell::OnceCell;
use std::fmt;

/// A value computed by `initializer` on first read and cached afterwards.
///
/// Single-threaded: the cache is a [`OnceCell`], so `LazyProperty` is not
/// `Sync`.
pub struct LazyProperty<T, F = fn() -> T> {
    initializer: F,
    value: OnceCell<T>,
}

impl<T, F: Fn() -> T> LazyProperty<T, F> {
    /// Wrap an initializer. Nothing runs until the first [`get`](Self::get).
    pub const fn new(initializer: F) -> Self {
        Self {
            initializer,
            value: OnceCell::new(),
        }
    }

    /// The cached value, running the initializer if this is the first read.
    #[must_use]
    pub fn get(&self) -> &T {
        self.value.get_or_init(|| {
            tracing::trace!("running lazy property initializer");
            (self.initializer)()
        })
    }

    /// Returns `true` once the initializer has run.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.value.get().is_some()
    }
}

impl<T: fmt::Debug, F> fmt::Debug for LazyProperty<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyProperty")
            .field("value", &self.value.get())
            .finish_non_exhaustive()
    }
}
