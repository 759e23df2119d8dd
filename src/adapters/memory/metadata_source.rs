//! Static metadata source for tests and local development.
//!
//! Serves a fixed candidate set per filter key, or a configured failure,
//! with no network involved.
//!
//! # Panics
//!
//! Methods panic if the internal lock is poisoned. Acceptable for test
//! code; production uses the HTTP adapter.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use crate::domain::catalog::{CandidateMetadata, FilterKey};
use crate::ports::{MetadataSource, MetadataSourceError};

/// Fixed-response metadata source.
pub struct StaticMetadataSource {
    responses: Mutex<HashMap<FilterKey, Vec<CandidateMetadata>>>,
    failure: Mutex<Option<MetadataSourceError>>,
    fetch_count: AtomicU64,
}

impl StaticMetadataSource {
    /// Creates a source with no configured responses; every fetch
    /// reports the catalog as unavailable.
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(HashMap::new()),
            failure: Mutex::new(None),
            fetch_count: AtomicU64::new(0),
        }
    }

    /// Creates a source that always fails with the given error.
    pub fn failing(error: MetadataSourceError) -> Self {
        let source = Self::new();
        *source.failure.lock().expect("StaticMetadataSource: lock poisoned") = Some(error);
        source
    }

    /// Register the candidate set served for a filter key.
    pub fn set_candidates(&self, key: FilterKey, candidates: Vec<CandidateMetadata>) {
        self.responses
            .lock()
            .expect("StaticMetadataSource: lock poisoned")
            .insert(key, candidates);
    }

    /// Make every subsequent fetch fail with the given error.
    pub fn fail_with(&self, error: MetadataSourceError) {
        *self
            .failure
            .lock()
            .expect("StaticMetadataSource: lock poisoned") = Some(error);
    }

    /// Clear a configured failure.
    pub fn recover(&self) {
        *self
            .failure
            .lock()
            .expect("StaticMetadataSource: lock poisoned") = None;
    }

    /// Number of fetch attempts made (for test assertions).
    pub fn fetch_count(&self) -> u64 {
        self.fetch_count.load(Ordering::SeqCst)
    }
}

impl Default for StaticMetadataSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MetadataSource for StaticMetadataSource {
    async fn fetch(
        &self,
        key: &FilterKey,
    ) -> Result<Vec<CandidateMetadata>, MetadataSourceError> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);

        if let Some(error) = self
            .failure
            .lock()
            .expect("StaticMetadataSource: lock poisoned")
            .clone()
        {
            return Err(error);
        }

        self.responses
            .lock()
            .expect("StaticMetadataSource: lock poisoned")
            .get(key)
            .cloned()
            .ok_or_else(|| {
                MetadataSourceError::Unavailable(format!("no candidates for '{}'", key))
            })
    }
}
