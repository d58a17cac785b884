//! City type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A city customers live in.
///
/// Equality, hashing and ordering are by name (exact and case-sensitive), so
/// two `City` values with the same name are the same city.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct City {
    name: String,
}

impl City {
    /// Create a city with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the city name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl From<&str> for City {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_is_case_sensitive() {
        assert_eq!(City::new("Vancouver"), City::from("Vancouver"));
        assert_ne!(City::new("Vancouver"), City::new("vancouver"));
    }

    #[test]
    fn test_serde_is_transparent() {
        let json = serde_json::to_string(&City::new("Tokyo")).unwrap();
        assert_eq!(json, "\"Tokyo\"");
    }
}
