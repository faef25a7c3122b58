//! Configuration management for the gateway
//!
//! This module handles loading, validation, and management of all gateway configuration.
//! Configuration is read once at startup and never re-read.

pub mod loader;
pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{GatewayError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the gateway
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Gateway configuration
    pub gateway: GatewayConfig,
}

impl Config {
    /// Load and validate configuration from a file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = Self::read_file(path.as_ref()).await?;
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Parse a YAML file without validating it
    async fn read_file(path: &Path) -> Result<Self> {
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path).await?;
        let gateway: GatewayConfig = serde_yaml::from_str(&content)?;
        Ok(Self { gateway })
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let gateway = GatewayConfig::from_env()?;
        let config = Self { gateway };

        config.validate()?;
        Ok(config)
    }

    /// Load a file (when given) and overlay the environment on top of it
    pub async fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with(path, |key| std::env::var(key).ok()).await
    }

    /// Like [`Config::load`], reading overrides from `lookup`
    ///
    /// Validation runs once, after the overlay.
    pub async fn load_with<F>(path: Option<&Path>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match path {
            Some(path) => Self::read_file(path).await?,
            None => Self::default(),
        };
        config.gateway.apply_env_with(lookup)?;
        config.validate()?;
        Ok(config)
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.gateway.server
    }

    /// Get storage configuration
    pub fn storage(&self) -> &StorageConfig {
        &self.gateway.storage
    }

    /// Get cache configuration
    pub fn cache(&self) -> &CacheConfig {
        &self.gateway.cache
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.gateway
            .server
            .validate()
            .map_err(|e| GatewayError::Config(format!("Server config error: {}", e)))?;

        self.gateway
            .storage
            .validate()
            .map_err(|e| GatewayError::Config(format!("Storage config error: {}", e)))?;

        self.gateway
            .cache
            .validate()
            .map_err(|e| GatewayError::Config(format!("Cache config error: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }
}
