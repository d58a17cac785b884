//! Integration tests for Shop Koans.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p shop-koans-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `shop_queries` - Every shop and customer query over `fixtures/shop.yaml`
//! - `dates` - Date ordering, ranges, interval arithmetic and timestamp storage
//! - `properties` - Invocation counter and property wrappers

use shop_koans_core::{City, Customer, Shop, ShopFixture};

/// The fixture shipped with this crate.
pub const SHOP_FIXTURE: &str = include_str!("../fixtures/shop.yaml");

/// Parse and resolve [`SHOP_FIXTURE`].
///
/// # Panics
///
/// Panics if the bundled fixture is invalid.
#[must_use]
pub fn fixture_shop() -> Shop {
    let fixture: ShopFixture =
        serde_yaml::from_str(SHOP_FIXTURE).expect("bundled fixture is valid YAML");
    fixture
        .into_shop()
        .expect("bundled fixture references resolve")
}

/// Look up a customer of `shop` by name.
///
/// # Panics
///
/// Panics if there is no such customer.
#[must_use]
pub fn customer<'a>(shop: &'a Shop, name: &str) -> &'a Customer {
    shop.customers
        .iter()
        .find(|c| c.name == name)
        .expect("customer exists in fixture")
}

/// Shorthand for [`City::new`].
#[must_use]
pub fn city(name: &str) -> City {
    City::new(name)
}

/// Names of `customers`, in order.
pub fn names<'a>(customers: impl IntoIterator<Item = &'a Customer>) -> Vec<&'a str> {
    customers.into_iter().map(|c| c.name.as_str()).collect()
}
