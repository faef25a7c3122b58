//! Basic Redis key-value operations
//!
//! This module provides the raw string commands the networked cache backend
//! is built on: get, set-with-expiry, delete and exists.

use super::pool::RedisPool;
use crate::utils::error::Result;
use redis::{AsyncCommands, RedisResult};

impl RedisPool {
    /// Get a value from cache
    pub async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut pooled = self.checkout().await?;
        let result: RedisResult<Option<String>> = pooled.conn.get(key).await;
        self.track(pooled.generation, result)
    }

    /// Set a key-value pair with a TTL in seconds (`SETEX`)
    ///
    /// The TTL is passed through untouched; Redis rejects zero.
    pub async fn set_ex(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<()> {
        let mut pooled = self.checkout().await?;
        let result: RedisResult<()> = pooled.conn.set_ex(key, value, ttl_seconds).await;
        self.track(pooled.generation, result)
    }

    /// Delete a key
    pub async fn delete(&self, key: &str) -> Result<()> {
        let mut pooled = self.checkout().await?;
        let result: RedisResult<()> = pooled.conn.del(key).await;
        self.track(pooled.generation, result)
    }

    /// Number of the given keys that exist (`EXISTS`)
    pub async fn exists_count(&self, key: &str) -> Result<i64> {
        let mut pooled = self.checkout().await?;
        let result: RedisResult<i64> = pooled.conn.exists(key).await;
        self.track(pooled.generation, result)
    }
}
