//! HTTP implementation of MetadataSource for the external movie catalog.
//!
//! # Configuration
//!
//! ```ignore
//! let config = HttpMetadataSourceConfig::new("https://catalog.example.com")
//!     .with_api_key("secret")
//!     .with_timeout(Duration::from_secs(5));
//!
//! let source = HttpMetadataSource::new(config);
//! ```

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::domain::catalog::{CandidateMetadata, FilterKey};
use crate::domain::foundation::CandidateId;
use crate::ports::{MetadataSource, MetadataSourceError};

/// Configuration for the HTTP catalog source.
#[derive(Debug, Clone)]
pub struct HttpMetadataSourceConfig {
    /// Base URL of the catalog service.
    pub base_url: String,
    /// Optional API key sent as a bearer token.
    pub api_key: Option<String>,
    /// Request timeout.
    pub timeout: Duration,
}

impl HttpMetadataSourceConfig {
    /// Creates a new configuration for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
            timeout: Duration::from_secs(5),
        }
    }

    /// Sets the API key.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// HTTP catalog source.
pub struct HttpMetadataSource {
    config: HttpMetadataSourceConfig,
    client: Client,
}

impl HttpMetadataSource {
    /// Creates a new HTTP catalog source with the given configuration.
    pub fn new(config: HttpMetadataSourceConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    fn candidates_url(&self, key: &FilterKey) -> String {
        format!("{}/v1/candidates?filter={}", self.config.base_url, key)
    }
}

/// Wire format of the catalog's candidate listing.
#[derive(Debug, Deserialize)]
struct CatalogResponse {
    results: Vec<CatalogItem>,
}

#[derive(Debug, Deserialize)]
struct CatalogItem {
    id: String,
    title: String,
    #[serde(default)]
    summary: String,
    #[serde(default)]
    artwork_url: Option<String>,
}

impl CatalogItem {
    fn into_metadata(self) -> Result<CandidateMetadata, MetadataSourceError> {
        let id = CandidateId::new(self.id).map_err(|e| {
            MetadataSourceError::MalformedPayload(format!("bad candidate id: {}", e))
        })?;
        Ok(CandidateMetadata::new(
            id,
            self.title,
            self.summary,
            self.artwork_url,
        ))
    }
}

#[async_trait]
impl MetadataSource for HttpMetadataSource {
    async fn fetch(&self, key: &FilterKey) -> Result<Vec<CandidateMetadata>, MetadataSourceError> {
        let mut request = self.client.get(self.candidates_url(key));
        if let Some(key) = &self.config.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                MetadataSourceError::Timeout
            } else {
                MetadataSourceError::Unavailable(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(MetadataSourceError::Unavailable(format!(
                "catalog returned {}",
                status
            )));
        }

        let body: CatalogResponse = response
            .json()
            .await
            .map_err(|e| MetadataSourceError::MalformedPayload(e.to_string()))?;

        if body.results.is_empty() {
            return Err(MetadataSourceError::MalformedPayload(
                "catalog returned an empty candidate list".to_string(),
            ));
        }

        body.results
            .into_iter()
            .map(CatalogItem::into_metadata)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_to_five_second_timeout() {
        let config = HttpMetadataSourceConfig::new("https://catalog.example.com");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert!(config.api_key.is_none());
    }

    #[test]
    fn candidates_url_includes_filter() {
        let source =
            HttpMetadataSource::new(HttpMetadataSourceConfig::new("https://catalog.example.com"));
        let key = FilterKey::new("Popular").unwrap();
        assert_eq!(
            source.candidates_url(&key),
            "https://catalog.example.com/v1/candidates?filter=popular"
        );
    }

    #[test]
    fn item_with_invalid_id_is_malformed() {
        let item = CatalogItem {
            id: "".to_string(),
            title: "Untitled".to_string(),
            summary: String::new(),
            artwork_url: None,
        };
        assert!(matches!(
            item.into_metadata(),
            Err(MetadataSourceError::MalformedPayload(_))
        ));
    }
}
