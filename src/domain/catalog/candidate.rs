//! Candidate metadata value objects.

use crate::domain::foundation::{CandidateId, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Descriptive metadata for a candidate movie.
///
/// Produced by the external catalog source (or the static default set)
/// and consumed by candidate lists and event payloads. Purely
/// descriptive - never part of voting correctness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateMetadata {
    /// Catalog identifier for the movie.
    pub id: CandidateId,

    /// Display title.
    pub title: String,

    /// Short synopsis.
    pub summary: String,

    /// Reference to poster artwork, when the source provides one.
    pub artwork_url: Option<String>,
}

impl CandidateMetadata {
    /// Creates candidate metadata.
    pub fn new(
        id: CandidateId,
        title: impl Into<String>,
        summary: impl Into<String>,
        artwork_url: Option<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            summary: summary.into(),
            artwork_url,
        }
    }
}

/// Cache key identifying a candidate set (e.g. a genre filter).
///
/// Normalized to lowercase so equivalent filters share a cache entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterKey(String);

impl FilterKey {
    /// Creates a filter key, returning error if empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ValidationError> {
        let key = key.into().trim().to_lowercase();
        if key.is_empty() {
            return Err(ValidationError::empty_field("filter_key"));
        }
        Ok(Self(key))
    }

    /// The catch-all key used when the caller supplies no filter.
    pub fn default_set() -> Self {
        Self("popular".to_string())
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_key_normalizes_case_and_whitespace() {
        let key = FilterKey::new("  Sci-Fi ").unwrap();
        assert_eq!(key.as_str(), "sci-fi");
    }

    #[test]
    fn filter_key_rejects_empty() {
        assert!(FilterKey::new("   ").is_err());
    }

    #[test]
    fn equivalent_filters_share_a_key() {
        assert_eq!(
            FilterKey::new("Comedy").unwrap(),
            FilterKey::new("comedy").unwrap()
        );
    }

    #[test]
    fn candidate_metadata_serializes() {
        let meta = CandidateMetadata::new(
            CandidateId::new("tt0133093").unwrap(),
            "The Matrix",
            "A hacker discovers reality is a simulation.",
            None,
        );
        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(json["id"], "tt0133093");
        assert_eq!(json["title"], "The Matrix");
    }
}
