//! Read-through synonym service

use super::repository::SynonymStore;
use super::types::{CacheInfo, SynonymRecord, SynonymResponse};
use crate::core::cache::{Cache, CacheLookup, CacheProvider};
use crate::utils::error::Result;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Cache key holding the whole record set
pub const SYNONYMS_CACHE_KEY: &str = "synonyms:all";

/// Serves the synonym list through the configured cache
#[derive(Clone)]
pub struct SynonymService {
    cache: Arc<CacheProvider>,
    store: Arc<dyn SynonymStore>,
    ttl_seconds: u64,
}

impl SynonymService {
    pub fn new(cache: Arc<CacheProvider>, store: Arc<dyn SynonymStore>, ttl_seconds: u64) -> Self {
        Self {
            cache,
            store,
            ttl_seconds,
        }
    }

    /// Every record, from the cache when it holds the set and from the
    /// store otherwise
    ///
    /// Cache failures on either side of the store query are logged and
    /// skipped. Store failures are returned.
    pub async fn get_all(&self) -> Result<Vec<SynonymResponse>> {
        let backend = self.cache.resolve()?;
        let descriptor = backend.describe();

        let lookup = CacheLookup::<Vec<SynonymRecord>>::decode(
            backend.get(SYNONYMS_CACHE_KEY).await,
        );
        if let CacheLookup::Error(e) = &lookup {
            warn!("Cache read for {} failed, using store: {}", SYNONYMS_CACHE_KEY, e);
        }

        if let Some(records) = lookup.into_hit() {
            debug!("Cache hit for {} ({} records)", SYNONYMS_CACHE_KEY, records.len());
            return Ok(records
                .into_iter()
                .map(|record| SynonymResponse::cached(record, descriptor.clone()))
                .collect());
        }

        debug!("Cache miss for {}", SYNONYMS_CACHE_KEY);
        let records = self.store.fetch_all().await.map_err(|e| {
            error!("Failed to load synonyms from store: {}", e);
            e
        })?;

        match serde_json::to_value(&records) {
            Ok(payload) => {
                if let Err(e) = backend
                    .set(SYNONYMS_CACHE_KEY, payload, self.ttl_seconds)
                    .await
                {
                    warn!("Failed to populate cache for {}: {}", SYNONYMS_CACHE_KEY, e);
                }
            }
            Err(e) => warn!("Failed to encode synonyms for caching: {}", e),
        }

        Ok(records.into_iter().map(SynonymResponse::fresh).collect())
    }

    /// Configured strategy and TTL
    pub fn info(&self) -> CacheInfo {
        CacheInfo {
            cache_strategy: self.cache.strategy().to_string(),
            cache_ttl_seconds: self.ttl_seconds,
        }
    }

    pub fn cache_provider(&self) -> &Arc<CacheProvider> {
        &self.cache
    }

    pub fn ttl_seconds(&self) -> u64 {
        self.ttl_seconds
    }
}
