//! External movie catalog configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Catalog configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// Base URL of the external catalog service
    pub base_url: String,

    /// Optional API key (sent as a bearer token)
    pub api_key: Option<String>,

    /// Fetch timeout in seconds
    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout_secs: u64,

    /// Cache freshness window in days
    #[serde(default = "default_cache_ttl_days")]
    pub cache_ttl_days: i64,
}

impl CatalogConfig {
    /// Get fetch timeout as Duration
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    /// Validate catalog configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.base_url.is_empty() {
            return Err(ValidationError::MissingRequired("CATALOG_BASE_URL"));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidCatalogUrl);
        }
        if self.cache_ttl_days <= 0 {
            return Err(ValidationError::InvalidCacheTtl);
        }
        Ok(())
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            api_key: None,
            fetch_timeout_secs: default_fetch_timeout(),
            cache_ttl_days: default_cache_ttl_days(),
        }
    }
}

fn default_fetch_timeout() -> u64 {
    5
}

fn default_cache_ttl_days() -> i64 {
    30
}
