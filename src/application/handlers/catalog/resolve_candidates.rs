//! ResolveCandidatesHandler - layered candidate-set resolution.
//!
//! Resolution order for a filter key:
//!
//! 1. Fresh cache entry
//! 2. Live fetch from the external catalog (result cached best-effort)
//! 3. Stale cache entry
//! 4. Built-in default candidate set
//!
//! The chain is total: every failure mode of the cache and the catalog
//! falls through to the next tier, so resolution always produces a
//! non-empty candidate list. Cache writes never fail a resolution; a
//! failed write is logged and the fetched data is returned anyway.

use std::sync::Arc;
use tracing::{debug, warn};

use crate::domain::catalog::{default_candidates, CacheEntry, CandidateMetadata, FilterKey};
use crate::ports::{CatalogCache, MetadataSource};

/// Which tier of the fallback chain produced the candidate set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionTier {
    /// Served from an unexpired cache entry.
    Fresh,
    /// Fetched live from the external catalog.
    Fetched,
    /// Served from an expired cache entry after a failed fetch.
    Stale,
    /// Served from the built-in default set.
    Default,
}

/// A resolved candidate set, with provenance.
#[derive(Debug, Clone)]
pub struct ResolvedCandidates {
    pub candidates: Vec<CandidateMetadata>,
    pub tier: ResolutionTier,
}

/// Handler resolving candidate sets through the fallback chain.
pub struct ResolveCandidatesHandler {
    cache: Arc<dyn CatalogCache>,
    source: Arc<dyn MetadataSource>,
    cache_ttl_days: i64,
}

impl ResolveCandidatesHandler {
    pub fn new(
        cache: Arc<dyn CatalogCache>,
        source: Arc<dyn MetadataSource>,
        cache_ttl_days: i64,
    ) -> Self {
        Self {
            cache,
            source,
            cache_ttl_days,
        }
    }

    /// Resolve the candidate set for a filter key. Infallible by
    /// construction: the default tier always answers.
    pub async fn handle(&self, key: FilterKey) -> ResolvedCandidates {
        // 1. Fresh cache hit
        let cached = match self.cache.get(&key).await {
            Ok(entry) => entry,
            Err(err) => {
                warn!(key = %key, error = %err, "catalog cache read failed");
                None
            }
        };

        if let Some(entry) = &cached {
            if entry.is_fresh() {
                debug!(key = %key, "candidate set served from fresh cache");
                return ResolvedCandidates {
                    candidates: entry.payload.clone(),
                    tier: ResolutionTier::Fresh,
                };
            }
        }

        // 2. Live fetch, caching the result best-effort
        match self.source.fetch(&key).await {
            Ok(candidates) => {
                let entry = CacheEntry::new(key.clone(), candidates.clone(), self.cache_ttl_days);
                if let Err(err) = self.cache.put(&entry).await {
                    warn!(key = %key, error = %err, "catalog cache write failed");
                }
                return ResolvedCandidates {
                    candidates,
                    tier: ResolutionTier::Fetched,
                };
            }
            Err(err) => {
                warn!(key = %key, error = %err, "catalog fetch failed, falling back");
            }
        }

        // 3. Stale cache entry
        if let Some(entry) = cached {
            debug!(key = %key, "candidate set served from stale cache");
            return ResolvedCandidates {
                candidates: entry.payload,
                tier: ResolutionTier::Stale,
            };
        }

        // 4. Built-in defaults
        debug!(key = %key, "candidate set served from built-in defaults");
        ResolvedCandidates {
            candidates: default_candidates(),
            tier: ResolutionTier::Default,
        }
    }
}
