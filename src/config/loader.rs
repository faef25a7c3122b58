//! Configuration loading from environment variables
//!
//! Every key is optional; unset variables leave the current value in place so
//! the environment can overlay a file-based configuration.

use super::models::*;
use crate::utils::error::{GatewayError, Result};
use std::env;
use std::str::FromStr;
use tracing::debug;

impl GatewayConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env()?;
        Ok(config)
    }

    /// Overlay values from the process environment
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_env_with(|key| env::var(key).ok())
    }

    /// Overlay values from an arbitrary key lookup
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        debug!("Loading configuration from environment variables");

        // Server configuration
        if let Some(host) = lookup("SERVER_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("SERVER_PORT") {
            self.server.port = parse_var("SERVER_PORT", &port)?;
        }
        if let Some(workers) = lookup("SERVER_WORKERS") {
            self.server.workers = Some(parse_var("SERVER_WORKERS", &workers)?);
        }

        // Database configuration
        if let Some(url) = lookup("DATABASE_URL") {
            self.storage.database.url = url;
        }
        if let Some(max_conn) = lookup("DATABASE_MAX_CONNECTIONS") {
            self.storage.database.max_connections =
                parse_var("DATABASE_MAX_CONNECTIONS", &max_conn)?;
        }
        if let Some(timeout) = lookup("DATABASE_CONNECTION_TIMEOUT") {
            self.storage.database.connection_timeout =
                parse_var("DATABASE_CONNECTION_TIMEOUT", &timeout)?;
        }

        // Redis configuration
        if let Some(host) = lookup("REDIS_HOST") {
            self.storage.redis.host = host;
        }
        if let Some(port) = lookup("REDIS_PORT") {
            self.storage.redis.port = parse_var("REDIS_PORT", &port)?;
        }
        if let Some(db) = lookup("REDIS_DB") {
            self.storage.redis.db = parse_var("REDIS_DB", &db)?;
        }
        if let Some(timeout) = lookup("REDIS_CONNECTION_TIMEOUT") {
            self.storage.redis.connection_timeout =
                parse_var("REDIS_CONNECTION_TIMEOUT", &timeout)?;
        }

        // Cache configuration
        if let Some(strategy) = lookup("CACHE_STRATEGY") {
            self.cache.strategy = strategy;
        }
        if let Some(ttl) = lookup("CACHE_TTL") {
            self.cache.ttl = parse_var("CACHE_TTL", &ttl)?;
        }

        Ok(())
    }
}

fn parse_var<T>(key: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| GatewayError::Config(format!("Invalid {}: {}", key, e)))
}
