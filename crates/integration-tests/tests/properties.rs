//! Invocation counter and property wrappers.

use std::cell::RefCell;

use shop_koans_core::properties::{CountedProperty, Invokable, LazyProperty, invoke_twice};

#[test]
fn test_invoke_twice_from_zero() {
    let mut invokable = Invokable::new();
    assert_eq!(invokable.number_of_invocations(), 0);
    invoke_twice(&mut invokable);
    assert_eq!(invokable.number_of_invocations(), 2);
}

#[test]
fn test_chained_invocations() {
    let mut invokable = Invokable::default();
    let count = invokable
        .invoke()
        .invoke()
        .invoke()
        .invoke()
        .number_of_invocations();
    assert_eq!(count, 4);
}

#[test]
fn test_counted_property_counts_writes_not_reads() {
    let mut property: CountedProperty<i32> = CountedProperty::default();
    for i in 0..5 {
        property.set(Some(i));
        let _ = property.get();
    }
    assert_eq!(property.counter(), 5);
    assert_eq!(property.get(), Some(&4));
}

#[test]
fn test_lazy_property_caches_non_deterministic_initializer() {
    let values = RefCell::new(vec![3, 2, 1]);
    let lazy = LazyProperty::new(|| values.borrow_mut().pop().unwrap_or_default());

    assert!(!lazy.is_initialized());
    let first = *lazy.get();
    assert_eq!(first, 1);
    for _ in 0..3 {
        assert_eq!(*lazy.get(), first);
    }
    assert_eq!(*values.borrow(), [3, 2]);
}
