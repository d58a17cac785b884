//! Shop type.

use serde::{Deserialize, Serialize};

use super::Customer;

/// A shop and its customers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shop {
    /// Shop name.
    pub name: String,
    /// Customers, in registration order.
    #[serde(default)]
    pub customers: Vec<Customer>,
}

impl Shop {
    /// Create a new shop.
    #[must_use]
    pub fn new(name: impl Into<String>, customers: Vec<Customer>) -> Self {
        Self {
            name: name.into(),
            customers,
        }
    }
}
