//! Shop fixture queries.
//!
//! # Usage
//!
//! ```bash
//! # Report every query over a fixture
//! koans shop --fixture fixtures/shop.yaml report
//!
//! # Orders and spending of one customer
//! koans shop customer Lucas
//!
//! # Customers living in a city
//! koans shop city Canberra
//! ```
//!
//! The fixture path falls back to `KOANS_FIXTURE`. Files ending in `.json`
//! are read as JSON, anything else as YAML.

use std::path::{Path, PathBuf};

use shop_koans_core::{City, Customer, FixtureError, QueryError, Shop, ShopFixture};
use thiserror::Error;
use tracing::info;

/// Errors that can occur while running shop commands.
#[derive(Debug, Error)]
pub enum ShopError {
    /// Neither `--fixture` nor `KOANS_FIXTURE` was given.
    #[error("No fixture given: pass --fixture or set KOANS_FIXTURE")]
    NoFixture,

    /// The fixture file could not be read.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The fixture is not valid YAML for a shop.
    #[error("Invalid YAML fixture: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The fixture is not valid JSON for a shop.
    #[error("Invalid JSON fixture: {0}")]
    Json(#[from] serde_json::Error),

    /// The fixture references are inconsistent.
    #[error(transparent)]
    Fixture(#[from] FixtureError),

    /// A query rejected the shop data.
    #[error(transparent)]
    Query(#[from] QueryError),

    /// No customer has the requested name.
    #[error("No customer named {0:?}")]
    UnknownCustomer(String),
}

/// Pick the fixture path from the flag or the configured default.
///
/// # Errors
///
/// Returns [`ShopError::NoFixture`] if neither is set.
pub fn resolve_fixture(flag: Option<PathBuf>, default: Option<&Path>) -> Result<PathBuf, ShopError> {
    flag.or_else(|| default.map(Path::to_path_buf))
        .ok_or(ShopError::NoFixture)
}

/// Read and resolve a fixture file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or its product
/// references do not resolve.
pub fn load_fixture(path: &Path) -> Result<Shop, ShopError> {
    let content = std::fs::read_to_string(path).map_err(|source| ShopError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let fixture: ShopFixture = if is_json {
        serde_json::from_str(&content)?
    } else {
        serde_yaml::from_str(&content)?
    };

    let shop = fixture.into_shop()?;
    info!(path = %path.display(), shop = %shop.name, customers = shop.customers.len(), "Loaded fixture");
    Ok(shop)
}

/// Log every shop-level query.
///
/// # Errors
///
/// Returns an error if customer names are not unique.
pub fn report(shop: &Shop) -> Result<(), ShopError> {
    let sorted: Vec<&str> = shop
        .customers_sorted_by_orders()
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    info!("Customers by orders: {}", sorted.join(", "));

    let mut cities: Vec<&City> = shop.customer_cities().into_iter().collect();
    cities.sort();
    info!("Cities: {}", join(&cities));

    for (city, customers) in sorted_groups(shop) {
        let names: Vec<&str> = customers.iter().map(|c| c.name.as_str()).collect();
        info!("  {city}: {}", names.join(", "));
    }

    if let Some(top) = shop.customer_with_max_orders() {
        info!("Most orders: {} ({})", top.name, top.orders.len());
    }

    let by_name = shop.name_to_customer_map()?;
    info!("Customer names are unique ({} customers)", by_name.len());

    let (more, rest) = shop.partition_by_undelivered();
    let more: Vec<&str> = more.iter().map(|c| c.name.as_str()).collect();
    info!(
        "More undelivered than delivered: [{}] ({} others)",
        more.join(", "),
        rest.len()
    );

    let mut products: Vec<_> = shop.ordered_products().into_iter().collect();
    products.sort_by(|a, b| a.name.cmp(&b.name));
    info!("Ordered products ({}):", products.len());
    for product in &products {
        info!(
            "  {product}: ordered {} times",
            shop.number_of_times_product_was_ordered(product)
        );
    }

    let mut by_all: Vec<&str> = shop
        .products_ordered_by_all()
        .into_iter()
        .map(|p| p.name.as_str())
        .collect();
    by_all.sort_unstable();
    info!("Ordered by everyone: [{}]", by_all.join(", "));

    Ok(())
}

/// Log one customer's orders and spending.
///
/// # Errors
///
/// Returns an error if no customer has that name or names are not unique.
pub fn customer(shop: &Shop, name: &str) -> Result<(), ShopError> {
    let by_name = shop.name_to_customer_map()?;
    let customer = by_name
        .get(name)
        .ok_or_else(|| ShopError::UnknownCustomer(name.to_owned()))?;

    info!("{} lives in {}", customer.name, customer.city);
    info!("Orders: {}", customer.orders.len());
    info!("Money spent: {}", customer.money_spent());

    let products: Vec<String> = customer
        .ordered_products()
        .iter()
        .map(ToString::to_string)
        .collect();
    info!("Products, cheapest first: [{}]", products.join(", "));

    match customer.most_expensive_product() {
        Some(p) => info!("Most expensive ordered: {p}"),
        None => info!("Most expensive ordered: none"),
    }
    match customer.most_expensive_delivered_product() {
        Some(p) => info!("Most expensive delivered: {p}"),
        None => info!("Most expensive delivered: none"),
    }
    Ok(())
}

/// Log the customers of one city.
pub fn city(shop: &Shop, name: &str) {
    let city = City::new(name);
    let names: Vec<&str> = shop
        .customers_from(&city)
        .iter()
        .map(|c| c.name.as_str())
        .collect();

    info!(
        "{} of {} customers live in {city}: [{}]",
        shop.count_customers_from(&city),
        shop.customers.len(),
        names.join(", ")
    );
    info!("Everyone lives there: {}", shop.check_all_customers_are_from(&city));
}

fn sorted_groups(shop: &Shop) -> Vec<(&City, Vec<&Customer>)> {
    let mut groups: Vec<_> = shop.group_customers_by_city().into_iter().collect();
    groups.sort_by(|a, b| a.0.cmp(b.0));
    groups
}

fn join(cities: &[&City]) -> String {
    cities
        .iter()
        .map(|c| c.name())
        .collect::<Vec<_>>()
        .join(", ")
}
