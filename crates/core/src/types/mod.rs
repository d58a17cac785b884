//! Domain model for the shop.
//!
//! All entities are immutable value containers: a [`Shop`] owns its
//! [`Customer`]s, a customer owns their [`Order`]s, and orders hold
//! [`Product`] values (the same product may appear in many orders).

pub mod city;
pub mod customer;
pub mod order;
pub mod price;
pub mod product;
pub mod shop;

pub use city::City;
pub use customer::Customer;
pub use order::Order;
pub use price::{Price, PriceError};
pub use product::Product;
pub use shop::Shop;
