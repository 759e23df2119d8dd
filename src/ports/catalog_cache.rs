//! CatalogCache port - cache entries for resolved candidate sets.
//!
//! The cache is an accelerator, not a source of truth. Reads return
//! entries regardless of expiry (the resolver decides how stale data is
//! used); writes are best-effort from the caller's perspective.

use async_trait::async_trait;

use crate::domain::catalog::{CacheEntry, FilterKey};
use crate::domain::foundation::DomainError;

/// Port for the candidate-set cache.
#[async_trait]
pub trait CatalogCache: Send + Sync {
    /// Read the entry for a key, fresh or stale.
    async fn get(&self, key: &FilterKey) -> Result<Option<CacheEntry>, DomainError>;

    /// Write (or overwrite) the entry for a key.
    ///
    /// Entries are non-authoritative derived data and may be replaced
    /// freely.
    async fn put(&self, entry: &CacheEntry) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Compile-time check that trait is object-safe
    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn CatalogCache) {}
}
