//! Callable object that counts its invocations.

/// Counts how many times it has been invoked.
///
/// ```
/// use shop_koans_core::properties::Invokable;
///
/// let mut invokable = Invokable::new();
/// invokable.invoke().invoke().invoke();
/// assert_eq!(invokable.number_of_invocations(), 3);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Invokable {
    invocations: u64,
}

impl Invokable {
    /// A counter that has not been invoked yet.
    #[must_use]
    pub const fn new() -> Self {
        Self { invocations: 0 }
    }

    /// Record one invocation and return `self` for chaining.
    pub const fn invoke(&mut self) -> &mut Self {
        self.invocations += 1;
        self
    }

    /// How many times [`invoke`](Self::invoke) has been called.
    #[must_use]
    pub const fn number_of_invocations(&self) -> u64 {
        self.invocations
    }
}

/// Invoke twice in a row.
pub const fn invoke_twice(invokable: &mut Invokable) -> &mut Invokable {
    invokable.invoke().invoke()
}
