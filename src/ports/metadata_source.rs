//! MetadataSource port - the external movie catalog.
//!
//! The source is rate-limited and occasionally unavailable; every call
//! must be time-bounded, and a timeout is treated identically to any
//! other fetch failure. The resolver absorbs all of these failures
//! through its fallback chain - they never reach the caller.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::catalog::{CandidateMetadata, FilterKey};

/// Failures fetching from the external catalog.
#[derive(Debug, Clone, Error)]
pub enum MetadataSourceError {
    #[error("catalog fetch timed out")]
    Timeout,

    #[error("catalog unavailable: {0}")]
    Unavailable(String),

    #[error("catalog returned a malformed payload: {0}")]
    MalformedPayload(String),
}

/// Port for fetching candidate metadata from the external catalog.
#[async_trait]
pub trait MetadataSource: Send + Sync {
    /// Fetch the candidate set for a filter key.
    ///
    /// Implementations must bound the call in time; a slow source
    /// surfaces as `Timeout` rather than blocking the resolver.
    async fn fetch(&self, key: &FilterKey)
        -> Result<Vec<CandidateMetadata>, MetadataSourceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Compile-time check that trait is object-safe
    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn MetadataSource) {}

    #[test]
    fn errors_display_their_cause() {
        let err = MetadataSourceError::Unavailable("503".to_string());
        assert!(err.to_string().contains("503"));
        assert!(MetadataSourceError::Timeout.to_string().contains("timed out"));
    }
}
