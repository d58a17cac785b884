//! Stateful wrappers: an invocation counter and property accessors with
//! custom read/write behaviour.

mod counted;
mod effective_date;
mod invokable;
mod lazy;

pub use counted::CountedProperty;
pub use effective_date::{Agreement, EffectiveDate};
pub use invokable::{Invokable, invoke_twice};
pub use lazy::LazyProperty;
