//! In-memory implementation of CatalogCache.
//!
//! # Panics
//!
//! Methods panic if the internal lock is poisoned. Acceptable for test
//! code; production uses the PostgreSQL adapter.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::catalog::{CacheEntry, FilterKey};
use crate::domain::foundation::DomainError;
use crate::ports::CatalogCache;

/// In-memory candidate-set cache.
#[derive(Default)]
pub struct InMemoryCatalogCache {
    entries: Mutex<HashMap<FilterKey, CacheEntry>>,
}

impl InMemoryCatalogCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of cached entries (for test assertions).
    pub fn entry_count(&self) -> usize {
        self.entries
            .lock()
            .expect("InMemoryCatalogCache: lock poisoned")
            .len()
    }
}

#[async_trait]
impl CatalogCache for InMemoryCatalogCache {
    async fn get(&self, key: &FilterKey) -> Result<Option<CacheEntry>, DomainError> {
        Ok(self
            .entries
            .lock()
            .expect("InMemoryCatalogCache: lock poisoned")
            .get(key)
            .cloned())
    }

    async fn put(&self, entry: &CacheEntry) -> Result<(), DomainError> {
        self.entries
            .lock()
            .expect("InMemoryCatalogCache: lock poisoned")
            .insert(entry.key.clone(), entry.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::CandidateMetadata;
    use crate::domain::foundation::{CandidateId, Timestamp};

    fn entry(key: &FilterKey) -> CacheEntry {
        CacheEntry::new(
            key.clone(),
            vec![CandidateMetadata::new(
                CandidateId::new("tt0133093").unwrap(),
                "The Matrix",
                "A hacker learns the true nature of his reality.",
                None,
            )],
            30,
        )
    }

    #[tokio::test]
    async fn put_and_get_round_trip() {
        let cache = InMemoryCatalogCache::new();
        let key = FilterKey::new("sci-fi").unwrap();

        cache.put(&entry(&key)).await.unwrap();
        let found = cache.get(&key).await.unwrap().unwrap();
        assert_eq!(found.key, key);
    }

    #[tokio::test]
    async fn get_returns_stale_entries_too() {
        let cache = InMemoryCatalogCache::new();
        let key = FilterKey::new("sci-fi").unwrap();

        let mut stale = entry(&key);
        stale.expires_at = Timestamp::now().minus_days(1);
        cache.put(&stale).await.unwrap();

        let found = cache.get(&key).await.unwrap().unwrap();
        assert!(!found.is_fresh());
        assert!(!found.payload.is_empty());
    }

    #[tokio::test]
    async fn put_overwrites_freely() {
        let cache = InMemoryCatalogCache::new();
        let key = FilterKey::new("sci-fi").unwrap();

        cache.put(&entry(&key)).await.unwrap();
        cache.put(&entry(&key)).await.unwrap();
        assert_eq!(cache.entry_count(), 1);
    }
}
