//! Shop Koans Core - domain model and small language-feature exercises.
//!
//! This crate provides everything the `koans` CLI and the integration tests
//! operate on:
//! - a toy shop domain (customers, orders, products, cities) and the
//!   collection queries computed over it
//! - a comparable calendar date with ranges and interval arithmetic
//! - a handful of stateful property wrappers (counted, lazy, timestamp-backed)
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no file or network
//! I/O. Fixtures are parsed from strings by the caller.
//!
//! # Modules
//!
//! - [`types`] - Domain model and the validated [`Price`] newtype
//! - [`queries`] - Derived views over a [`Shop`] or a [`Customer`]
//! - [`date`] - [`MyDate`], [`DateRange`] and [`TimeInterval`] arithmetic
//! - [`properties`] - Invocation counter and property wrappers
//! - [`fixture`] - Serializable shop description resolved into a [`Shop`]

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod date;
pub mod fixture;
pub mod properties;
pub mod queries;
pub mod types;

pub use date::{DateError, DateRange, MyDate, TimeInterval, TimeIntervalAmount};
pub use fixture::{FixtureError, ShopFixture};
pub use queries::{QueryError, largest_group_by_length};
pub use types::*;
