//! Read-through cache backends
//!
//! Two interchangeable backends sit behind the [`Cache`] contract: an
//! in-process TTL map and Redis. [`CacheProvider`] turns the configured
//! strategy into one shared [`CacheBackend`] for the life of the process.

pub mod memory;
pub mod provider;
pub mod redis;
pub mod types;


pub use self::memory::{MemoryCache, TtlMap};
pub use self::provider::CacheProvider;
pub use self::redis::RedisCache;
pub use self::types::{CacheDescriptor, CacheEntry, CacheKind, CacheLookup};

use crate::config::RedisConfig;
use crate::utils::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Contract every cache backend satisfies
#[async_trait]
pub trait Cache: Send + Sync {
    /// Stored value if present and unexpired
    async fn get(&self, key: &str) -> Result<Option<Value>>;

    /// Store `value`, replacing any previous entry, for `ttl_seconds`
    async fn set(&self, key: &str, value: Value, ttl_seconds: u64) -> Result<()>;

    /// Remove `key`; absent keys are not an error
    async fn delete(&self, key: &str) -> Result<()>;

    /// Whether a live entry exists under `key`
    async fn exists(&self, key: &str) -> Result<bool>;

    /// Static metadata about this backend instance
    fn describe(&self) -> CacheDescriptor;
}

/// The configured backend
#[derive(Debug)]
pub enum CacheBackend {
    Memory(MemoryCache),
    Redis(RedisCache),
}

impl CacheBackend {
    /// Build the backend for `kind`
    ///
    /// Redis coordinates are only read for [`CacheKind::Redis`]; no
    /// connection is opened here.
    pub fn new(kind: CacheKind, redis: &RedisConfig) -> Result<Self> {
        match kind {
            CacheKind::Memory => Ok(CacheBackend::Memory(MemoryCache::new())),
            CacheKind::Redis => Ok(CacheBackend::Redis(RedisCache::new(redis)?)),
        }
    }

    pub fn kind(&self) -> CacheKind {
        match self {
            CacheBackend::Memory(_) => CacheKind::Memory,
            CacheBackend::Redis(_) => CacheKind::Redis,
        }
    }

    /// Reachability of the backend
    pub async fn health_check(&self) -> Result<()> {
        match self {
            CacheBackend::Memory(_) => Ok(()),
            CacheBackend::Redis(cache) => cache.pool().health_check().await,
        }
    }
}

#[async_trait]
impl Cache for CacheBackend {
    async fn get(&self, key: &str) -> Result<Option<Value>> {
        match self {
            CacheBackend::Memory(cache) => cache.get(key).await,
            CacheBackend::Redis(cache) => cache.get(key).await,
        }
    }

    async fn set(&self, key: &str, value: Value, ttl_seconds: u64) -> Result<()> {
        match self {
            CacheBackend::Memory(cache) => cache.set(key, value, ttl_seconds).await,
            CacheBackend::Redis(cache) => cache.set(key, value, ttl_seconds).await,
        }
    }

    async fn delete(&self, key: &str) -> Result<()> {
        match self {
            CacheBackend::Memory(cache) => cache.delete(key).await,
            CacheBackend::Redis(cache) => cache.delete(key).await,
        }
    }

    async fn exists(&self, key: &str) -> Result<bool> {
        match self {
            CacheBackend::Memory(cache) => cache.exists(key).await,
            CacheBackend::Redis(cache) => cache.exists(key).await,
        }
    }

    fn describe(&self) -> CacheDescriptor {
        match self {
            CacheBackend::Memory(cache) => cache.describe(),
            CacheBackend::Redis(cache) => cache.describe(),
        }
    }
}
