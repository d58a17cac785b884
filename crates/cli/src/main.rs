//! Shop Koans CLI - run collection queries over shop fixtures and evaluate
//! date arithmetic.
//!
//! # Usage
//!
//! ```bash
//! # Report every shop query over a fixture
//! koans shop --fixture fixtures/shop.yaml report
//!
//! # Inspect one customer or one city
//! koans shop customer Lucas
//! koans shop city Canberra
//!
//! # Date ranges and interval arithmetic
//! koans dates range 2021-02-26 2021-03-02
//! koans dates shift 2021-06-15 --years 1 --weeks 1
//! ```
//!
//! # Commands
//!
//! - `shop report` - Sorting, filtering, grouping and aggregate queries
//! - `shop customer` - Orders, products and spending of one customer
//! - `shop city` - Customers living in one city
//! - `dates range` - Every date of an inclusive range
//! - `dates shift` - A date advanced by years, weeks and days

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use shop_koans_core::MyDate;

mod commands;
mod config;

use config::{CliConfig, DEFAULT_LOG_FILTER};

#[derive(Parser)]
#[command(name = "koans")]
#[command(author, version, about = "Shop Koans CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Query a shop fixture
    Shop {
        /// Fixture file (YAML, or JSON with a `.json` extension)
        #[arg(short, long)]
        fixture: Option<PathBuf>,

        #[command(subcommand)]
        query: ShopQuery,
    },
    /// Date ranges and interval arithmetic
    Dates {
        #[command(subcommand)]
        action: DatesAction,
    },
}

#[derive(Subcommand)]
enum ShopQuery {
    /// Run every shop-level query
    Report,
    /// Show one customer's orders and spending
    Customer {
        /// Customer name
        name: String,
    },
    /// Show the customers living in a city
    City {
        /// City name (exact, case-sensitive)
        name: String,
    },
}

#[derive(Subcommand)]
enum DatesAction {
    /// List every date from FROM to TO, inclusive
    Range {
        /// First date (`YYYY-MM-DD`)
        from: MyDate,
        /// Last date (`YYYY-MM-DD`)
        to: MyDate,
    },
    /// Advance a date by years, then weeks, then days
    Shift {
        /// Date to shift (`YYYY-MM-DD`, default: `KOANS_TODAY`)
        date: Option<MyDate>,

        /// Years to add
        #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
        years: i32,

        /// Weeks to add
        #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
        weeks: i32,

        /// Days to add
        #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
        days: i32,
    },
}

fn main() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::from_env()?;

    match cli.command {
        Commands::Shop { fixture, query } => {
            let path = commands::shop::resolve_fixture(fixture, config.fixture.as_deref())?;
            let shop = commands::shop::load_fixture(&path)?;
            match query {
                ShopQuery::Report => commands::shop::report(&shop)?,
                ShopQuery::Customer { name } => commands::shop::customer(&shop, &name)?,
                ShopQuery::City { name } => commands::shop::city(&shop, &name),
            }
        }
        Commands::Dates { action } => match action {
            DatesAction::Range { from, to } => {
                commands::dates::range(from, to);
            }
            DatesAction::Shift {
                date,
                years,
                weeks,
                days,
            } => {
                commands::dates::shift(date, config.today, years, weeks, days)?;
            }
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_shift_with_negative_amounts() {
        let cli = Cli::try_parse_from(["koans", "dates", "shift", "2021-06-15", "-d", "-3"]);
        assert!(matches!(
            cli.map(|c| c.command),
            Ok(Commands::Dates {
                action: DatesAction::Shift { days: -3, .. }
            })
        ));
    }

    #[test]
    fn test_parse_rejects_bad_date() {
        assert!(Cli::try_parse_from(["koans", "dates", "range", "2021-13-01", "2021-12-31"]).is_err());
    }
}
