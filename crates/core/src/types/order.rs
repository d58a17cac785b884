//! Order type.

use serde::{Deserialize, Serialize};

use super::Product;

/// An order: a list of products (repeats allowed) and a delivery flag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Order {
    /// Ordered products, in the order they were added.
    pub products: Vec<Product>,
    /// Whether the order has been delivered.
    #[serde(default)]
    pub is_delivered: bool,
}

impl Order {
    /// Create a new order.
    #[must_use]
    pub const fn new(products: Vec<Product>, is_delivered: bool) -> Self {
        Self {
            products,
            is_delivered,
        }
    }
}
