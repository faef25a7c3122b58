//! # Synonym Gateway
//!
//! A read API for word/synonym records with a pluggable read-through cache
//! in front of a relational store.
//!
//! ## Features
//!
//! - **Two cache backends**: an in-process TTL map or Redis, chosen by configuration
//! - **One backend per process**: resolved lazily and shared by every request
//! - **Cache-aside reads**: cache failures degrade to store reads, never to request failures
//! - **Response metadata**: every record says whether it came from the cache and which one
//!
//! ## Gateway Mode
//!
//! ```rust,no_run
//! use synonym_gateway::{Config, Gateway};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let gateway = Gateway::new(config).await?;
//!     gateway.run().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Read path only
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use synonym_gateway::config::RedisConfig;
//! use synonym_gateway::core::cache::CacheProvider;
//! use synonym_gateway::services::{SynonymRepository, SynonymService};
//! use synonym_gateway::storage::database::Database;
//!
//! # async fn run(db: Arc<Database>) -> synonym_gateway::Result<()> {
//! let provider = Arc::new(CacheProvider::new("memory", RedisConfig::default()));
//! let service = SynonymService::new(provider, Arc::new(SynonymRepository::new(db)), 60);
//! for record in service.get_all().await? {
//!     println!("{} -> {}", record.record.word, record.record.synonyms);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod server;
pub mod services;
pub mod storage;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use core::cache::{
    Cache, CacheBackend, CacheDescriptor, CacheKind, CacheLookup, CacheProvider, MemoryCache,
    RedisCache, TtlMap,
};
pub use services::{SynonymRecord, SynonymResponse, SynonymService, SynonymStore};
pub use utils::error::{GatewayError, Result};

use tracing::info;

/// The HTTP gateway with its store and cache wired up
pub struct Gateway {
    config: Config,
    server: server::HttpServer,
}

impl Gateway {
    /// Create a new gateway instance
    pub async fn new(config: Config) -> Result<Self> {
        info!("Creating new gateway instance");

        let server = server::HttpServer::new(&config).await?;

        Ok(Self { config, server })
    }

    /// Run the gateway server
    pub async fn run(self) -> Result<()> {
        info!(
            "Starting synonym gateway (cache: {}, ttl: {}s)",
            self.config.cache().strategy,
            self.config.cache().ttl
        );

        self.server.start().await
    }
}

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Gateway build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build timestamp (seconds since the epoch)
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
    /// Rust version
    pub rust_version: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: env!("BUILD_TIME"),
            git_hash: env!("GIT_HASH"),
            rust_version: env!("RUST_VERSION"),
        }
    }
}

/// Build metadata captured by the build script
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
