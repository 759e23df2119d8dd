//! Integration tests for catalog resolution fallback.
//!
//! Verifies the full chain: fresh cache, live fetch with write-back,
//! stale cache under source failure, and the built-in default set when
//! nothing else answers.

use std::sync::Arc;

use reelmatch::adapters::memory::{InMemoryCatalogCache, StaticMetadataSource};
use reelmatch::application::handlers::catalog::{ResolutionTier, ResolveCandidatesHandler};
use reelmatch::domain::catalog::{CacheEntry, CandidateMetadata, FilterKey};
use reelmatch::domain::foundation::{CandidateId, Timestamp};
use reelmatch::ports::{CatalogCache, MetadataSource, MetadataSourceError};

fn key() -> FilterKey {
    FilterKey::new("sci-fi").unwrap()
}

fn catalog_payload() -> Vec<CandidateMetadata> {
    vec![
        CandidateMetadata::new(
            CandidateId::new("tt0133093").unwrap(),
            "The Matrix",
            "A hacker learns the true nature of his reality.",
            Some("https://artwork.example.com/tt0133093.jpg".to_string()),
        ),
        CandidateMetadata::new(
            CandidateId::new("tt0816692").unwrap(),
            "Interstellar",
            "Explorers travel through a wormhole in space.",
            None,
        ),
    ]
}

fn resolver(
    cache: &Arc<InMemoryCatalogCache>,
    source: &Arc<StaticMetadataSource>,
) -> ResolveCandidatesHandler {
    ResolveCandidatesHandler::new(
        Arc::clone(cache) as Arc<dyn CatalogCache>,
        Arc::clone(source) as Arc<dyn MetadataSource>,
        30,
    )
}

#[tokio::test]
async fn fresh_cache_serves_without_touching_the_source() {
    let cache = Arc::new(InMemoryCatalogCache::new());
    let source = Arc::new(StaticMetadataSource::new());
    cache
        .put(&CacheEntry::new(key(), catalog_payload(), 30))
        .await
        .unwrap();

    let resolved = resolver(&cache, &source).handle(key()).await;

    assert_eq!(resolved.tier, ResolutionTier::Fresh);
    assert_eq!(resolved.candidates, catalog_payload());
    assert_eq!(source.fetch_count(), 0);
}

#[tokio::test]
async fn cold_cache_fetches_and_writes_back() {
    let cache = Arc::new(InMemoryCatalogCache::new());
    let source = Arc::new(StaticMetadataSource::new());
    source.set_candidates(key(), catalog_payload());

    let resolved = resolver(&cache, &source).handle(key()).await;

    assert_eq!(resolved.tier, ResolutionTier::Fetched);
    assert_eq!(resolved.candidates, catalog_payload());

    // The fetched set was cached for the next caller
    let entry = cache.get(&key()).await.unwrap().unwrap();
    assert!(entry.is_fresh());
    assert_eq!(entry.payload, catalog_payload());

    let again = resolver(&cache, &source).handle(key()).await;
    assert_eq!(again.tier, ResolutionTier::Fresh);
    assert_eq!(source.fetch_count(), 1);
}

#[tokio::test]
async fn expired_entry_survives_a_source_outage() {
    let cache = Arc::new(InMemoryCatalogCache::new());
    let source = Arc::new(StaticMetadataSource::failing(MetadataSourceError::Timeout));

    let mut entry = CacheEntry::new(key(), catalog_payload(), 30);
    entry.expires_at = Timestamp::now().minus_days(3);
    cache.put(&entry).await.unwrap();

    let resolved = resolver(&cache, &source).handle(key()).await;

    assert_eq!(resolved.tier, ResolutionTier::Stale);
    assert_eq!(resolved.candidates, catalog_payload());
    // The fetch was attempted before falling back
    assert_eq!(source.fetch_count(), 1);
}

#[tokio::test]
async fn empty_cache_and_dead_source_still_produce_candidates() {
    let cache = Arc::new(InMemoryCatalogCache::new());
    let source = Arc::new(StaticMetadataSource::failing(
        MetadataSourceError::Unavailable("connection refused".to_string()),
    ));

    let resolved = resolver(&cache, &source).handle(key()).await;

    assert_eq!(resolved.tier, ResolutionTier::Default);
    assert!(!resolved.candidates.is_empty());
    // A failed resolution never writes to the cache
    assert_eq!(cache.entry_count(), 0);
}

#[tokio::test]
async fn source_recovery_refreshes_a_stale_entry() {
    let cache = Arc::new(InMemoryCatalogCache::new());
    let source = Arc::new(StaticMetadataSource::failing(MetadataSourceError::Timeout));

    let mut entry = CacheEntry::new(key(), catalog_payload(), 30);
    entry.expires_at = Timestamp::now().minus_days(3);
    cache.put(&entry).await.unwrap();

    let handler = resolver(&cache, &source);
    assert_eq!(handler.handle(key()).await.tier, ResolutionTier::Stale);

    source.recover();
    source.set_candidates(key(), catalog_payload());
    assert_eq!(handler.handle(key()).await.tier, ResolutionTier::Fetched);

    // And the refreshed entry is fresh again
    assert_eq!(handler.handle(key()).await.tier, ResolutionTier::Fresh);
}

#[tokio::test]
async fn equivalent_filter_spellings_share_an_entry() {
    let cache = Arc::new(InMemoryCatalogCache::new());
    let source = Arc::new(StaticMetadataSource::new());
    source.set_candidates(key(), catalog_payload());

    let handler = resolver(&cache, &source);
    handler.handle(FilterKey::new("Sci-Fi").unwrap()).await;
    let resolved = handler.handle(FilterKey::new("  SCI-FI ").unwrap()).await;

    assert_eq!(resolved.tier, ResolutionTier::Fresh);
    assert_eq!(source.fetch_count(), 1);
}
