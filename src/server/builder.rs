//! Server builder and run_server function
//!
//! This module provides the ServerBuilder for preparing the store before
//! serving, and run_server for the binary.

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::storage::database::DEFAULT_SYNONYMS;
use crate::utils::error::{GatewayError, Result};
use tracing::info;

/// Server builder for easier configuration
#[derive(Default)]
pub struct ServerBuilder {
    config: Option<Config>,
    migrate: bool,
    seed: bool,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Run migrations before serving
    pub fn with_migrations(mut self, migrate: bool) -> Self {
        self.migrate = migrate;
        self
    }

    /// Insert the demo rows into an empty table before serving
    ///
    /// Implies migrations.
    pub fn with_seed(mut self, seed: bool) -> Self {
        self.seed = seed;
        self
    }

    /// Build the HTTP server
    pub async fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| GatewayError::Config("Configuration is required".to_string()))?;

        let server = HttpServer::new(&config).await?;
        let database = &server.state().database;

        if self.migrate || self.seed {
            database.migrate().await?;
        }
        if self.seed {
            database.seed_synonyms(&DEFAULT_SYNONYMS).await?;
        }

        Ok(server)
    }
}

/// Prepare the store and serve until shutdown
pub async fn run_server(config: Config, migrate: bool, seed: bool) -> Result<()> {
    info!("Starting synonym gateway");

    let address = config.server().address();
    let server = ServerBuilder::new()
        .with_config(config)
        .with_migrations(migrate)
        .with_seed(seed)
        .build()
        .await?;

    info!("Server starting at: http://{}", address);
    info!("API Endpoints:");
    info!("   GET  /health - Health check");
    info!("   GET  /api/info - Cache configuration");
    info!("   GET  /api/synonyms - Synonym list");

    server.start().await
}
