//! Customer type.

use serde::{Deserialize, Serialize};

use super::{City, Order};

/// A shop customer.
///
/// The name is expected to be unique within a [`Shop`](super::Shop), but this
/// is not enforced; queries that key by name report duplicates instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Customer {
    /// Customer name.
    pub name: String,
    /// City the customer lives in.
    pub city: City,
    /// Orders placed by the customer, oldest first.
    #[serde(default)]
    pub orders: Vec<Order>,
}

impl Customer {
    /// Create a new customer.
    #[must_use]
    pub fn new(name: impl Into<String>, city: City, orders: Vec<Order>) -> Self {
        Self {
            name: name.into(),
            city,
            orders,
        }
    }

    /// Returns `true` if the customer lives in a city with the same name.
    #[must_use]
    pub fn lives_in(&self, city: &City) -> bool {
        self.city.name() == city.name()
    }
}
