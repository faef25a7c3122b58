//! Test fixtures
//!
//! Stores with controllable behaviour and ready-made configurations.

use async_trait::async_trait;
use sea_orm::DbErr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use synonym_gateway::config::{Config, RedisConfig};
use synonym_gateway::services::{SynonymRecord, SynonymStore};
use synonym_gateway::{GatewayError, Result};

use super::database::test_db_config;

/// `count` records with predictable contents
pub fn sample_records(count: i32) -> Vec<SynonymRecord> {
    (1..=count)
        .map(|id| SynonymRecord {
            id,
            word: format!("word{}", id),
            synonyms: format!("alt{},other{}", id, id),
        })
        .collect()
}

/// Redis coordinates nothing listens on
pub fn unreachable_redis_config() -> RedisConfig {
    RedisConfig {
        host: "127.0.0.1".to_string(),
        port: 1,
        connection_timeout: 1,
        response_timeout: 1,
        ..Default::default()
    }
}

/// Valid configuration over an in-memory database
pub fn test_config(strategy: &str, ttl: u64) -> Config {
    let mut config = Config::default();
    config.gateway.storage.database = test_db_config();
    config.gateway.cache.strategy = strategy.to_string();
    config.gateway.cache.ttl = ttl;
    config
}

/// Store returning a fixed record set
#[derive(Debug, Clone)]
pub struct StaticStore {
    records: Vec<SynonymRecord>,
}

impl StaticStore {
    pub fn new(records: Vec<SynonymRecord>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl SynonymStore for StaticStore {
    async fn fetch_all(&self) -> Result<Vec<SynonymRecord>> {
        Ok(self.records.clone())
    }
}

/// Store that always fails like a lost database connection
#[derive(Debug, Clone, Default)]
pub struct FailingStore;

#[async_trait]
impl SynonymStore for FailingStore {
    async fn fetch_all(&self) -> Result<Vec<SynonymRecord>> {
        Err(GatewayError::Database(DbErr::Custom(
            "connection reset".to_string(),
        )))
    }
}

/// Store wrapper counting how often the source is queried
pub struct CountingStore {
    inner: Arc<dyn SynonymStore>,
    calls: AtomicUsize,
}

impl CountingStore {
    pub fn new(inner: Arc<dyn SynonymStore>) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SynonymStore for CountingStore {
    async fn fetch_all(&self) -> Result<Vec<SynonymRecord>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.fetch_all().await
    }
}
