//! Storage configuration validators
//!
//! This module provides validation implementations for StorageConfig,
//! DatabaseConfig and RedisConfig.

use super::trait_def::Validate;
use crate::config::models::*;
use tracing::debug;
use url::Url;

const SUPPORTED_DATABASE_SCHEMES: [&str; 3] = ["postgresql", "postgres", "sqlite"];

impl Validate for StorageConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating storage configuration");

        self.database.validate()?;
        self.redis.validate()?;

        Ok(())
    }
}

impl Validate for DatabaseConfig {
    fn validate(&self) -> Result<(), String> {
        if self.url.is_empty() {
            return Err("Database URL cannot be empty".to_string());
        }

        let url = Url::parse(&self.url).map_err(|e| format!("Invalid database URL: {}", e))?;
        if !SUPPORTED_DATABASE_SCHEMES.contains(&url.scheme()) {
            return Err("Only PostgreSQL and SQLite databases are supported".to_string());
        }

        if self.max_connections == 0 {
            return Err("Database max connections must be greater than 0".to_string());
        }

        if self.max_connections > 1000 {
            return Err("Database max connections should not exceed 1000".to_string());
        }

        if self.connection_timeout == 0 {
            return Err("Database connection timeout must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Validate for RedisConfig {
    fn validate(&self) -> Result<(), String> {
        if self.host.is_empty() {
            return Err("Redis host cannot be empty".to_string());
        }

        if self.port == 0 {
            return Err("Redis port must be greater than 0".to_string());
        }

        if self.db < 0 {
            return Err("Redis database index cannot be negative".to_string());
        }

        if self.connection_timeout == 0 {
            return Err("Redis connection timeout must be greater than 0".to_string());
        }

        if self.response_timeout == 0 {
            return Err("Redis response timeout must be greater than 0".to_string());
        }

        Ok(())
    }
}
