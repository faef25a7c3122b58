//! Redis cache backend
//!
//! Values are stored as JSON text under `SETEX`. Transport and decode
//! failures are returned to the caller unchanged.

use super::types::CacheDescriptor;
use super::Cache;
use crate::config::RedisConfig;
use crate::storage::redis::RedisPool;
use crate::utils::error::{GatewayError, Result};
use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

/// Cache backend delegating to a Redis server
#[derive(Debug)]
pub struct RedisCache {
    pool: RedisPool,
    descriptor: CacheDescriptor,
}

impl RedisCache {
    /// Build the backend without connecting
    pub fn new(config: &RedisConfig) -> Result<Self> {
        Ok(Self {
            pool: RedisPool::new(config)?,
            descriptor: CacheDescriptor::redis(config),
        })
    }

    /// Underlying connection pool
    pub fn pool(&self) -> &RedisPool {
        &self.pool
    }
}

#[async_trait]
impl Cache for RedisCache {
    async fn get(&self, key: &str) -> Result<Option<Value>> {
        match self.pool.get(key).await? {
            Some(raw) if !raw.is_empty() => serde_json::from_str(&raw)
                .map(Some)
                .map_err(GatewayError::Serialization),
            _ => Ok(None),
        }
    }

    /// Zero TTL is forwarded as is and rejected by the server.
    async fn set(&self, key: &str, value: Value, ttl_seconds: u64) -> Result<()> {
        let payload = serde_json::to_string(&value)?;
        debug!("SETEX {} ({} bytes, ttl {}s)", key, payload.len(), ttl_seconds);
        self.pool.set_ex(key, &payload, ttl_seconds).await
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.pool.delete(key).await
    }

    async fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.pool.exists_count(key).await? > 0)
    }

    fn describe(&self) -> CacheDescriptor {
        self.descriptor.clone()
    }
}
