//! Derived views over the shop domain.
//!
//! Every query is a pure read: it borrows the [`Shop`](crate::Shop) or
//! [`Customer`](crate::Customer) it is called on and returns references into
//! it. "No result" is always `None`, never an error; the only fallible
//! queries are the ones that build name-keyed maps.

mod customer;
mod shop;
mod strings;

#[cfg(test)]
pub(crate) mod test_data;

pub use strings::largest_group_by_length;

/// Errors raised by queries that cannot represent their input faithfully.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// Two customers share a name, so a name-keyed map would lose one.
    #[error("duplicate customer name: {0}")]
    DuplicateCustomerName(String),
}

/// Returns the first element with the largest key.
///
/// [`Iterator::max_by_key`] keeps the last maximum; the queries here resolve
/// ties in favour of the earliest element.
fn first_max_by_key<I, K, F>(iter: I, mut key: F) -> Option<I::Item>
where
    I: IntoIterator,
    K: Ord,
    F: FnMut(&I::Item) -> K,
{
    iter.into_iter()
        .map(|item| (key(&item), item))
        .reduce(|best, candidate| if candidate.0 > best.0 { candidate } else { best })
        .map(|(_, item)| item)
}
