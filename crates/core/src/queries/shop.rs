//! Queries over a whole shop.

use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};
use std::collections::hash_map::Entry;

use super::{QueryError, first_max_by_key};
use crate::{City, Customer, Product, Shop};

impl Shop {
    /// Distinct customers of the shop.
    #[must_use]
    pub fn set_of_customers(&self) -> HashSet<&Customer> {
        self.customers.iter().collect()
    }

    /// Customers sorted by number of orders, most first.
    ///
    /// The sort is stable: customers with the same number of orders keep
    /// their registration order.
    #[must_use]
    pub fn customers_sorted_by_orders(&self) -> Vec<&Customer> {
        let mut sorted: Vec<&Customer> = self.customers.iter().collect();
        sorted.sort_by_key(|c| Reverse(c.orders.len()));
        sorted
    }

    /// Every city at least one customer lives in.
    #[must_use]
    pub fn customer_cities(&self) -> HashSet<&City> {
        self.customers.iter().map(|c| &c.city).collect()
    }

    /// Customers living in `city`, in registration order.
    #[must_use]
    pub fn customers_from(&self, city: &City) -> Vec<&Customer> {
        self.customers.iter().filter(|c| c.lives_in(city)).collect()
    }

    /// Returns `true` if every customer lives in `city` (vacuously true for
    /// a shop without customers).
    #[must_use]
    pub fn check_all_customers_are_from(&self, city: &City) -> bool {
        self.customers.iter().all(|c| c.lives_in(city))
    }

    /// Returns `true` if at least one customer lives in `city`.
    #[must_use]
    pub fn has_customer_from(&self, city: &City) -> bool {
        self.customers.iter().any(|c| c.lives_in(city))
    }

    /// Number of customers living in `city`.
    #[must_use]
    pub fn count_customers_from(&self, city: &City) -> usize {
        self.customers.iter().filter(|c| c.lives_in(city)).count()
    }

    /// The first customer living in `city`, if any.
    #[must_use]
    pub fn find_customer_from(&self, city: &City) -> Option<&Customer> {
        self.customers.iter().find(|c| c.lives_in(city))
    }

    /// The customer with the most orders; the earliest registered wins ties.
    #[must_use]
    pub fn customer_with_max_orders(&self) -> Option<&Customer> {
        first_max_by_key(&self.customers, |c| c.orders.len())
    }

    /// Map from customer name to customer.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::DuplicateCustomerName`] if two customers share a
    /// name.
    pub fn name_to_customer_map(&self) -> Result<HashMap<&str, &Customer>, QueryError> {
        associate_unique(&self.customers, |c| c)
    }

    /// Map from customer to the city they live in.
    ///
    /// Keys are whole customer values, and equal customers always share a
    /// city, so no entry can be lost.
    #[must_use]
    pub fn customer_to_city_map(&self) -> HashMap<&Customer, &City> {
        self.customers.iter().map(|c| (c, &c.city)).collect()
    }

    /// Map from customer name to the city they live in.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::DuplicateCustomerName`] if two customers share a
    /// name.
    pub fn customer_name_to_city_map(&self) -> Result<HashMap<&str, &City>, QueryError> {
        associate_unique(&self.customers, |c| &c.city)
    }

    /// Customers grouped by city. Each group keeps registration order.
    #[must_use]
    pub fn group_customers_by_city(&self) -> HashMap<&City, Vec<&Customer>> {
        let mut groups: HashMap<&City, Vec<&Customer>> = HashMap::new();
        for customer in &self.customers {
            groups.entry(&customer.city).or_default().push(customer);
        }
        groups
    }

    /// Splits customers into those with more undelivered than delivered
    /// orders, and everyone else (including ties).
    #[must_use]
    pub fn partition_by_undelivered(&self) -> (Vec<&Customer>, Vec<&Customer>) {
        self.customers.iter().partition(|c| {
            let undelivered = c.orders.iter().filter(|o| !o.is_delivered).count();
            undelivered > c.orders.len() - undelivered
        })
    }

    /// Customers with more undelivered than delivered orders.
    #[must_use]
    pub fn customers_with_more_undelivered_orders(&self) -> HashSet<&Customer> {
        self.partition_by_undelivered().0.into_iter().collect()
    }

    /// Every distinct product ordered by at least one customer.
    #[must_use]
    pub fn ordered_products(&self) -> HashSet<&Product> {
        self.customers
            .iter()
            .flat_map(|c| &c.orders)
            .flat_map(|o| &o.products)
            .collect()
    }

    /// Products ordered by every customer.
    ///
    /// With no customers this is every ordered product, i.e. the empty set
    /// of an empty shop.
    #[must_use]
    pub fn products_ordered_by_all(&self) -> HashSet<&Product> {
        self.customers
            .iter()
            .fold(self.ordered_products(), |ordered_by_all, customer| {
                let theirs: HashSet<&Product> = customer.ordered_products().into_iter().collect();
                ordered_by_all.intersection(&theirs).copied().collect()
            })
    }

    /// How many times a product with the same name as `product` was ordered
    /// across all customers, counting repeats within an order.
    #[must_use]
    pub fn number_of_times_product_was_ordered(&self, product: &Product) -> usize {
        self.customers
            .iter()
            .flat_map(|c| &c.orders)
            .flat_map(|o| &o.products)
            .filter(|p| p.name == product.name)
            .count()
    }
}

/// Builds a name-keyed map, rejecting duplicate names.
fn associate_unique<'a, V: ?Sized, F>(
    customers: &'a [Customer],
    value: F,
) -> Result<HashMap<&'a str, &'a V>, QueryError>
where
    F: Fn(&'a Customer) -> &'a V,
{
    let mut map = HashMap::with_capacity(customers.len());
    for customer in customers {
        match map.entry(customer.name.as_str()) {
            Entry::Occupied(_) => {
                tracing::debug!(name = %customer.name, "rejecting duplicate customer name");
                return Err(QueryError::DuplicateCustomerName(customer.name.clone()));
            }
            Entry::Vacant(slot) => {
                slot.insert(value(customer));
            }
        }
    }
    Ok(map)
}
