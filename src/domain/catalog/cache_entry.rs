//! Cache entries for resolved candidate sets.
//!
//! Entries are retained past expiry on purpose: a stale payload is the
//! degraded-mode fallback when the external source is unavailable.

use crate::domain::catalog::{CandidateMetadata, FilterKey};
use crate::domain::foundation::Timestamp;
use serde::{Deserialize, Serialize};

/// A cached candidate set with a freshness window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntry {
    /// Resolver-defined cache key.
    pub key: FilterKey,

    /// The cached candidate set.
    pub payload: Vec<CandidateMetadata>,

    /// When the entry was written.
    pub cached_at: Timestamp,

    /// End of the freshness window. The entry outlives this moment.
    pub expires_at: Timestamp,
}

impl CacheEntry {
    /// Creates a cache entry fresh for `ttl_days` from now.
    pub fn new(key: FilterKey, payload: Vec<CandidateMetadata>, ttl_days: i64) -> Self {
        let now = Timestamp::now();
        Self {
            key,
            payload,
            cached_at: now,
            expires_at: now.add_days(ttl_days),
        }
    }

    /// Returns true while the entry is within its freshness window.
    pub fn is_fresh_at(&self, now: &Timestamp) -> bool {
        now.is_before(&self.expires_at)
    }

    /// Returns true if the entry is fresh right now.
    pub fn is_fresh(&self) -> bool {
        self.is_fresh_at(&Timestamp::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::CandidateId;

    fn payload() -> Vec<CandidateMetadata> {
        vec![CandidateMetadata::new(
            CandidateId::new("tt0133093").unwrap(),
            "The Matrix",
            "A hacker discovers reality is a simulation.",
            None,
        )]
    }

    #[test]
    fn new_entry_is_fresh() {
        let entry = CacheEntry::new(FilterKey::default_set(), payload(), 30);
        assert!(entry.is_fresh());
    }

    #[test]
    fn entry_goes_stale_after_expiry() {
        let mut entry = CacheEntry::new(FilterKey::default_set(), payload(), 30);
        entry.expires_at = Timestamp::now().minus_days(1);
        assert!(!entry.is_fresh());
        // Still carries its payload for degraded reads
        assert!(!entry.payload.is_empty());
    }

    #[test]
    fn freshness_is_evaluated_against_a_clock() {
        let entry = CacheEntry::new(FilterKey::default_set(), payload(), 30);
        let future = Timestamp::now().add_days(31);
        assert!(!entry.is_fresh_at(&future));
    }
}
