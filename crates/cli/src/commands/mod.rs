//! Subcommand implementations.

pub mod dates;
pub mod shop;
