//! Cache configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Cache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Backend selection, `memory` or `redis`.
    ///
    /// Kept as a raw string: an unknown value is rejected when the cache
    /// provider first resolves its backend, not while loading.
    #[serde(default = "default_cache_strategy")]
    pub strategy: String,
    /// Cache TTL in seconds
    #[serde(default = "default_cache_ttl")]
    pub ttl: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            strategy: default_cache_strategy(),
            ttl: default_cache_ttl(),
        }
    }
}
