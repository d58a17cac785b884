//! Queries over a single customer's orders.

use super::first_max_by_key;
use crate::{Customer, Price, Product};

impl Customer {
    /// Every product the customer ordered, cheapest first.
    ///
    /// Repeats are kept; products with the same price stay in order
    /// placement order.
    #[must_use]
    pub fn ordered_products(&self) -> Vec<&Product> {
        let mut products: Vec<&Product> = self.orders.iter().flat_map(|o| &o.products).collect();
        products.sort_by_key(|p| p.price);
        products
    }

    /// The most expensive product in any of the customer's orders.
    #[must_use]
    pub fn most_expensive_product(&self) -> Option<&Product> {
        first_max_by_key(self.orders.iter().flat_map(|o| &o.products), |p| p.price)
    }

    /// The most expensive product among the customer's delivered orders.
    #[must_use]
    pub fn most_expensive_delivered_product(&self) -> Option<&Product> {
        let delivered = self
            .orders
            .iter()
            .filter(|o| o.is_delivered)
            .flat_map(|o| &o.products);
        first_max_by_key(delivered, |p| p.price)
    }

    /// Total price of everything the customer ordered.
    #[must_use]
    pub fn money_spent(&self) -> Price {
        self.orders
            .iter()
            .flat_map(|o| &o.products)
            .map(|p| p.price)
            .sum()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::Order;
    use crate::queries::test_data::*;

    #[test]
    fn test_ordered_products_sorted_by_price() {
        let shop = shop();
        let nathan = &shop.customers[2];
        let names: Vec<&str> = nathan
            .ordered_products()
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(
            names,
            ["dotTrace", "GoLand", "GoLand", "Rider", "IntelliJ IDEA Ultimate"]
        );
    }

    #[test]
    fn test_most_expensive_product() {
        let shop = shop();
        assert_eq!(shop.customers[3].most_expensive_product(), Some(&idea()));
        assert!(shop.customers[1].most_expensive_product().is_none());
    }

    #[test]
    fn test_most_expensive_product_tie_goes_to_first() {
        let first = product("First", 500);
        let second = product("Second", 500);
        let c = customer(
            "Tie",
            canberra(),
            vec![Order::new(vec![first.clone(), second], true)],
        );
        assert_eq!(c.most_expensive_product(), Some(&first));
    }

    #[test]
    fn test_most_expensive_delivered_product() {
        let shop = shop();
        // Reka's IDEA order is still on its way.
        assert_eq!(
            shop.customers[3].most_expensive_delivered_product(),
            Some(&rider())
        );
        assert_eq!(
            shop.customers[2].most_expensive_delivered_product(),
            Some(&goland())
        );
        assert!(shop.customers[1].most_expensive_delivered_product().is_none());
    }

    #[test]
    fn test_money_spent() {
        let shop = shop();
        assert_eq!(shop.customers[0].money_spent(), Price::from_cents(42_700));
        assert_eq!(shop.customers[1].money_spent(), Price::ZERO);
    }
}
