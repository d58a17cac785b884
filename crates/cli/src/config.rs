//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `KOANS_FIXTURE` - Default fixture file for `shop` commands
//! - `KOANS_TODAY` - Default date (`YYYY-MM-DD`) for `dates shift`
//! - `RUST_LOG` - Log filter (default: `shop_koans_cli=info,shop_koans_core=warn`)

use std::path::PathBuf;

use shop_koans_core::MyDate;
use thiserror::Error;

/// Log filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "shop_koans_cli=info,shop_koans_core=warn";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// CLI configuration.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Fixture used when `--fixture` is not given
    pub fixture: Option<PathBuf>,
    /// Date used when `dates shift` is not given one
    pub today: Option<MyDate>,
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let fixture = lookup("KOANS_FIXTURE")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let today = lookup("KOANS_TODAY")
            .filter(|v| !v.trim().is_empty())
            .map(|v| {
                v.parse::<MyDate>()
                    .map_err(|e| ConfigError::InvalidEnvVar("KOANS_TODAY".to_string(), e.to_string()))
            })
            .transpose()?;

        Ok(Self { fixture, today })
    }
}
