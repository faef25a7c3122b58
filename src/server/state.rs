//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::core::cache::CacheProvider;
use crate::services::SynonymService;
use crate::storage::database::Database;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// Cloned into every worker; all fields are shared handles.
#[derive(Clone)]
pub struct AppState {
    /// Gateway configuration (shared read-only)
    pub config: Arc<Config>,
    /// Relational store
    pub database: Arc<Database>,
    /// Read-through synonym service
    pub synonyms: SynonymService,
}

impl AppState {
    pub fn new(config: Config, database: Arc<Database>, synonyms: SynonymService) -> Self {
        Self {
            config: Arc::new(config),
            database,
            synonyms,
        }
    }

    /// Get gateway configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Provider behind the synonym service
    pub fn cache_provider(&self) -> &Arc<CacheProvider> {
        self.synonyms.cache_provider()
    }
}
