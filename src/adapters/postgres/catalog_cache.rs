//! PostgreSQL implementation of CatalogCache.
//!
//! Entries are stored as JSONB payloads keyed by the normalized filter
//! key. Expired entries are returned as-is; staleness is the caller's
//! concern, since a stale payload is still a usable fallback.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::catalog::{CacheEntry, CandidateMetadata, FilterKey};
use crate::domain::foundation::{DomainError, ErrorCode, Timestamp};
use crate::ports::CatalogCache;

/// PostgreSQL implementation of CatalogCache.
#[derive(Clone)]
pub struct PostgresCatalogCache {
    pool: PgPool,
}

impl PostgresCatalogCache {
    /// Creates a new PostgresCatalogCache.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn store_err(e: sqlx::Error) -> DomainError {
    DomainError::new(
        ErrorCode::CacheError,
        format!("Catalog cache error: {}", e),
    )
}

#[async_trait]
impl CatalogCache for PostgresCatalogCache {
    async fn get(&self, key: &FilterKey) -> Result<Option<CacheEntry>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT filter_key, payload, cached_at, expires_at
            FROM catalog_cache
            WHERE filter_key = $1
            "#,
        )
        .bind(key.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(store_err)?;

        let Some(row) = row else {
            return Ok(None);
        };

        let payload_json: serde_json::Value = row.try_get("payload").map_err(store_err)?;
        let payload: Vec<CandidateMetadata> =
            serde_json::from_value(payload_json).map_err(|e| {
                DomainError::new(
                    ErrorCode::CacheError,
                    format!("Corrupt catalog cache payload: {}", e),
                )
            })?;

        Ok(Some(CacheEntry {
            key: key.clone(),
            payload,
            cached_at: Timestamp::from_datetime(row.try_get("cached_at").map_err(store_err)?),
            expires_at: Timestamp::from_datetime(row.try_get("expires_at").map_err(store_err)?),
        }))
    }

    async fn put(&self, entry: &CacheEntry) -> Result<(), DomainError> {
        let payload = serde_json::to_value(&entry.payload).map_err(|e| {
            DomainError::new(
                ErrorCode::CacheError,
                format!("Failed to serialize catalog cache payload: {}", e),
            )
        })?;

        sqlx::query(
            r#"
            INSERT INTO catalog_cache (filter_key, payload, cached_at, expires_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (filter_key) DO UPDATE
            SET payload = EXCLUDED.payload,
                cached_at = EXCLUDED.cached_at,
                expires_at = EXCLUDED.expires_at
            "#,
        )
        .bind(entry.key.as_str())
        .bind(payload)
        .bind(entry.cached_at.as_datetime())
        .bind(entry.expires_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(store_err)?;

        Ok(())
    }
}
