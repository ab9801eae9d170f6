//! Configuration loading and representation.
//!
//! Values come from environment variables read at the edge of the process. Invalid
//! values are reported and replaced by defaults rather than aborting start-up.

use thiserror::Error;

use catalog_core::DEFAULT_PER_PAGE;

/// Environment variable holding the default page size for searches.
pub const DEFAULT_PER_PAGE_ENV: &str = "CATALOG_DEFAULT_PER_PAGE";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be a positive integer, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },
}

/// Search-related settings.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Page size used when a search request does not specify one.
    pub default_per_page: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl SearchConfig {
    /// Load from the process environment, falling back to defaults on bad values.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`SearchConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self::try_from_lookup(lookup).unwrap_or_else(|err| {
            tracing::warn!("{err}; using default search config");
            Self::default()
        })
    }

    /// Strict variant: any present-but-invalid value is an error.
    pub fn try_from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(raw) = lookup(DEFAULT_PER_PAGE_ENV) {
            config.default_per_page = parse_positive(DEFAULT_PER_PAGE_ENV, &raw)?;
        }
        Ok(config)
    }
}

fn parse_positive(key: &'static str, raw: &str) -> Result<u32, ConfigError> {
    match raw.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::InvalidNumber {
            key,
            value: raw.to_string(),
        }),
    }
}
