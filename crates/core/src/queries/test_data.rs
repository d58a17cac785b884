//! Shared fixtures for query tests.

use crate::{City, Customer, Order, Price, Product, Shop};

pub fn product(name: &str, cents: u32) -> Product {
    Product::new(name, Price::from_cents(cents))
}

pub fn idea() -> Product {
    product("IntelliJ IDEA Ultimate", 19_900)
}

pub fn rider() -> Product {
    product("Rider", 13_900)
}

pub fn goland() -> Product {
    product("GoLand", 8_900)
}

pub fn dot_trace() -> Product {
    product("dotTrace", 4_900)
}

pub fn canberra() -> City {
    City::new("Canberra")
}

pub fn vancouver() -> City {
    City::new("Vancouver")
}

pub fn budapest() -> City {
    City::new("Budapest")
}

pub fn customer(name: &str, city: City, orders: Vec<Order>) -> Customer {
    Customer::new(name, city, orders)
}

/// Four customers:
/// - Lucas (Canberra): two orders, both delivered
/// - Cooper (Canberra): no orders
/// - Nathan (Vancouver): three orders, two undelivered
/// - Reka (Budapest): two orders, one undelivered
pub fn shop() -> Shop {
    Shop::new(
        "jb test shop",
        vec![
            customer(
                "Lucas",
                canberra(),
                vec![
                    Order::new(vec![idea(), rider()], true),
                    Order::new(vec![goland()], true),
                ],
            ),
            customer("Cooper", canberra(), vec![]),
            customer(
                "Nathan",
                vancouver(),
                vec![
                    Order::new(vec![rider(), idea()], false),
                    Order::new(vec![dot_trace()], false),
                    Order::new(vec![goland(), goland()], true),
                ],
            ),
            customer(
                "Reka",
                budapest(),
                vec![
                    Order::new(vec![rider()], true),
                    Order::new(vec![idea(), dot_trace()], false),
                ],
            ),
        ],
    )
}
