//! Redis connection management
//!
//! The pool opens its multiplexed connection lazily on first use and drops it
//! again after an I/O failure, so a Redis outage at startup or mid-flight only
//! fails the commands issued while it lasts.
//!
//! The slot lock is never held across a connect. Concurrent callers that find
//! the slot empty each dial on their own; the first to finish installs its
//! connection and the rest reuse it from then on.

use crate::config::RedisConfig;
use crate::utils::error::{GatewayError, Result};
use parking_lot::Mutex;
use redis::{Client, RedisResult, aio::MultiplexedConnection};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::{debug, info, warn};

/// A connection tagged with the generation it was installed under
#[derive(Clone)]
pub(crate) struct PooledConnection {
    pub(crate) generation: u64,
    pub(crate) conn: MultiplexedConnection,
}

/// Redis connection pool
pub struct RedisPool {
    /// Redis client (no I/O until a connection is requested)
    pub(crate) client: Client,
    /// Cached multiplexed connection, `None` until first use or after a failure
    pub(crate) connection: Mutex<Option<PooledConnection>>,
    /// Source of connection generations
    next_generation: AtomicU64,
    /// Configuration
    pub(crate) config: RedisConfig,
}

impl std::fmt::Debug for RedisPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisPool")
            .field("address", &self.config.address())
            .field("db", &self.config.db)
            .finish()
    }
}

impl RedisPool {
    /// Create a new Redis pool without connecting
    pub fn new(config: &RedisConfig) -> Result<Self> {
        info!("Creating Redis connection pool");
        debug!("Redis address: {} (db {})", config.address(), config.db);

        let client = Client::open(config.connection_info()).map_err(|e| {
            GatewayError::Config(format!(
                "Invalid Redis coordinates {}: {}",
                config.address(),
                e
            ))
        })?;

        Ok(Self {
            client,
            connection: Mutex::new(None),
            next_generation: AtomicU64::new(1),
            config: config.clone(),
        })
    }

    /// Configuration this pool was built from
    pub fn config(&self) -> &RedisConfig {
        &self.config
    }

    /// Cached connection or a freshly dialled one
    pub(crate) async fn checkout(&self) -> Result<PooledConnection> {
        let cached = self.connection.lock().clone();
        if let Some(pooled) = cached {
            return Ok(pooled);
        }

        debug!("Opening Redis connection");
        let conn = self
            .client
            .get_multiplexed_async_connection_with_timeouts(
                Duration::from_secs(self.config.response_timeout),
                Duration::from_secs(self.config.connection_timeout),
            )
            .await
            .map_err(GatewayError::Redis)?;

        let mut slot = self.connection.lock();
        if let Some(existing) = slot.as_ref() {
            return Ok(existing.clone());
        }
        let pooled = PooledConnection {
            generation: self.next_generation.fetch_add(1, Ordering::Relaxed),
            conn,
        };
        *slot = Some(pooled.clone());
        Ok(pooled)
    }

    /// Map a command result, dropping the connection it ran on after a
    /// transport error
    ///
    /// A connection installed by another task since `generation` was handed
    /// out is left alone.
    pub(crate) fn track<T>(&self, generation: u64, result: RedisResult<T>) -> Result<T> {
        match result {
            Ok(value) => Ok(value),
            Err(e) => {
                if e.is_io_error() || e.is_connection_dropped() || e.is_timeout() {
                    warn!("Redis connection lost, will reconnect on next use: {}", e);
                    self.invalidate(generation);
                }
                Err(GatewayError::Redis(e))
            }
        }
    }

    /// Clear the slot if it still holds the given generation
    pub(crate) fn invalidate(&self, generation: u64) {
        let mut slot = self.connection.lock();
        if slot.as_ref().is_some_and(|p| p.generation == generation) {
            *slot = None;
        }
    }

    /// Health check
    pub async fn health_check(&self) -> Result<()> {
        debug!("Performing Redis health check");

        let mut pooled = self.checkout().await?;
        let result: RedisResult<String> = redis::cmd("PING").query_async(&mut pooled.conn).await;
        self.track(pooled.generation, result)?;

        debug!("Redis health check passed");
        Ok(())
    }
}
