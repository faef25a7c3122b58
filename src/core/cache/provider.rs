//! Process-wide cache resolution

use super::types::CacheKind;
use super::CacheBackend;
use crate::config::{GatewayConfig, RedisConfig};
use crate::utils::error::Result;
use once_cell::sync::OnceCell;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::info;

/// Resolves the configured strategy into a single shared backend
///
/// The backend is built on the first successful [`resolve`](Self::resolve)
/// and kept until the provider is dropped. Concurrent first calls block
/// on one initializer and all receive the same instance.
#[derive(Debug)]
pub struct CacheProvider {
    strategy: String,
    redis: RedisConfig,
    instance: OnceCell<Arc<CacheBackend>>,
    constructions: AtomicUsize,
}

impl CacheProvider {
    pub fn new(strategy: impl Into<String>, redis: RedisConfig) -> Self {
        Self {
            strategy: strategy.into(),
            redis,
            instance: OnceCell::new(),
            constructions: AtomicUsize::new(0),
        }
    }

    /// Provider for the strategy and Redis coordinates in `config`
    pub fn from_config(config: &GatewayConfig) -> Self {
        Self::new(config.cache.strategy.clone(), config.storage.redis.clone())
    }

    /// Shared backend, built on first call
    ///
    /// An unknown strategy fails here with a configuration error.
    pub fn resolve(&self) -> Result<Arc<CacheBackend>> {
        if let Some(backend) = self.instance.get() {
            return Ok(Arc::clone(backend));
        }

        self.instance
            .get_or_try_init(|| {
                let kind: CacheKind = self.strategy.parse()?;
                self.constructions.fetch_add(1, Ordering::SeqCst);
                let backend = CacheBackend::new(kind, &self.redis)?;
                info!("Cache backend initialized: {}", kind);
                Ok(Arc::new(backend))
            })
            .map(Arc::clone)
    }

    /// Configured strategy string
    pub fn strategy(&self) -> &str {
        &self.strategy
    }

    /// Times the backend constructor ran
    pub fn constructions(&self) -> usize {
        self.constructions.load(Ordering::SeqCst)
    }

    pub fn is_resolved(&self) -> bool {
        self.instance.get().is_some()
    }
}
