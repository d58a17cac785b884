//! Serializable shop descriptions.
//!
//! A fixture lists the product catalogue once and lets orders refer to
//! products by name:
//!
//! ```yaml
//! name: Demo shop
//! products:
//!   - { name: Rider, price: "139.00" }
//! customers:
//!   - name: Lucas
//!     city: Canberra
//!     orders:
//!       - { products: [Rider, Rider], delivered: true }
//! ```
//!
//! Parsing the text is left to the caller (`serde_yaml`, `serde_json`);
//! [`ShopFixture::into_shop`] resolves the references.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use serde::{Deserialize, Serialize};

use crate::{City, Customer, Order, Product, Shop};

/// Errors that can occur when resolving a [`ShopFixture`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FixtureError {
    /// An order refers to a product missing from the catalogue.
    #[error("customer {customer:?} ordered unknown product {product:?}")]
    UnknownProduct {
        /// Customer whose order holds the reference.
        customer: String,
        /// The unresolved product name.
        product: String,
    },
    /// Two catalogue entries share a name.
    #[error("product {0:?} is listed more than once")]
    DuplicateProduct(String),
}

/// A shop as written in a fixture file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShopFixture {
    /// Shop name.
    pub name: String,
    /// Product catalogue.
    #[serde(default)]
    pub products: Vec<Product>,
    /// Customers, in registration order.
    #[serde(default)]
    pub customers: Vec<CustomerFixture>,
}

/// A customer as written in a fixture file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CustomerFixture {
    /// Customer name.
    pub name: String,
    /// City name.
    pub city: City,
    /// Orders, oldest first.
    #[serde(default)]
    pub orders: Vec<OrderFixture>,
}

/// An order as written in a fixture file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OrderFixture {
    /// Names of catalogue products; repeat a name to order it twice.
    pub products: Vec<String>,
    /// Whether the order has been delivered.
    #[serde(default)]
    pub delivered: bool,
}

impl ShopFixture {
    /// Resolve product references and build the [`Shop`].
    ///
    /// # Errors
    ///
    /// Returns an error if the catalogue lists a product name twice or an
    /// order names a product that is not in the catalogue.
    pub fn into_shop(self) -> Result<Shop, FixtureError> {
        let mut catalogue: HashMap<&str, &Product> = HashMap::with_capacity(self.products.len());
        for product in &self.products {
            match catalogue.entry(product.name.as_str()) {
                Entry::Occupied(_) => {
                    return Err(FixtureError::DuplicateProduct(product.name.clone()));
                }
                Entry::Vacant(slot) => {
                    slot.insert(product);
                }
            }
        }

        let customers = self
            .customers
            .into_iter()
            .map(|customer| {
                let orders = customer
                    .orders
                    .iter()
                    .map(|order| {
                        let products = order
                            .products
                            .iter()
                            .map(|name| {
                                catalogue.get(name.as_str()).map(|p| (*p).clone()).ok_or_else(
                                    || FixtureError::UnknownProduct {
                                        customer: customer.name.clone(),
                                        product: name.clone(),
                                    },
                                )
                            })
                            .collect::<Result<Vec<_>, _>>()?;
                        Ok(Order::new(products, order.delivered))
                    })
                    .collect::<Result<Vec<_>, FixtureError>>()?;
                Ok(Customer::new(customer.name, customer.city, orders))
            })
            .collect::<Result<Vec<_>, FixtureError>>()?;

        tracing::debug!(
            shop = %self.name,
            products = self.products.len(),
            customers = customers.len(),
            "resolved shop fixture"
        );

        Ok(Shop::new(self.name, customers))
    }
}

impl TryFrom<ShopFixture> for Shop {
    type Error = FixtureError;

    fn try_from(fixture: ShopFixture) -> Result<Self, Self::Error> {
        fixture.into_shop()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::Price;

    const YAML: &str = r#"
name: Demo
products:
  - { name: Rider, price: "139.00" }
  - { name: GoLand, price: 89 }
customers:
  - name: Lucas
    city: Canberra
    orders:
      - { products: [Rider, Rider], delivered: true }
      - { products: [GoLand] }
  - name: Cooper
    city: Vancouver
"#;

    #[test]
    fn test_resolve_yaml_fixture() {
        let fixture: ShopFixture = serde_yaml::from_str(YAML).unwrap();
        let shop = fixture.into_shop().unwrap();

        assert_eq!(shop.name, "Demo");
        assert_eq!(shop.customers.len(), 2);

        let lucas = &shop.customers[0];
        assert_eq!(lucas.city, City::new("Canberra"));
        assert_eq!(lucas.orders.len(), 2);
        assert!(lucas.orders[0].is_delivered);
        assert!(!lucas.orders[1].is_delivered);
        assert_eq!(lucas.orders[0].products.len(), 2);
        assert_eq!(lucas.orders[1].products[0].price, Price::from_cents(8_900));

        assert!(shop.customers[1].orders.is_empty());
    }

    #[test]
    fn test_resolve_json_fixture() {
        let json = r#"{
            "name": "J",
            "products": [{ "name": "A", "price": "1.50" }],
            "customers": [{ "name": "X", "city": "Oslo", "orders": [{ "products": ["A"] }] }]
        }"#;
        let shop: Shop = serde_json::from_str::<ShopFixture>(json)
            .unwrap()
            .try_into()
            .unwrap();
        assert_eq!(shop.customers[0].money_spent(), Price::from_cents(150));
    }

    #[test]
    fn test_unknown_product() {
        let mut fixture: ShopFixture = serde_yaml::from_str(YAML).unwrap();
        fixture.customers[1].orders.push(OrderFixture {
            products: vec!["CLion".to_string()],
            delivered: false,
        });
        assert_eq!(
            fixture.into_shop().unwrap_err(),
            FixtureError::UnknownProduct {
                customer: "Cooper".to_string(),
                product: "CLion".to_string(),
            }
        );
    }

    #[test]
    fn test_duplicate_catalogue_entry() {
        let mut fixture: ShopFixture = serde_yaml::from_str(YAML).unwrap();
        fixture
            .products
            .push(Product::new("Rider", Price::from_cents(1)));
        assert_eq!(
            fixture.into_shop().unwrap_err(),
            FixtureError::DuplicateProduct("Rider".to_string())
        );
    }

    #[test]
    fn test_negative_price_is_rejected() {
        let yaml = "name: Bad\nproducts:\n  - { name: A, price: \"-1\" }\n";
        assert!(serde_yaml::from_str::<ShopFixture>(yaml).is_err());
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let yaml = "name: Typo\ncustomer: []\n";
        assert!(serde_yaml::from_str::<ShopFixture>(yaml).is_err());
    }
}
