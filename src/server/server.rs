//! HTTP server core implementation
//!
//! This module provides the HttpServer struct and its core methods.

use crate::config::{Config, ServerConfig};
use crate::core::cache::{Cache, CacheProvider};
use crate::server::handlers::root;
use crate::server::routes;
use crate::server::state::AppState;
use crate::services::{SynonymRepository, SynonymService};
use crate::storage::database::Database;
use crate::utils::error::{GatewayError, Result};
use actix_web::{App, HttpServer as ActixHttpServer, middleware::DefaultHeaders, web};
use std::sync::Arc;
use tracing::info;
use tracing_actix_web::TracingLogger;

/// HTTP server
pub struct HttpServer {
    /// Server configuration
    config: ServerConfig,
    /// Application state
    state: AppState,
}

impl HttpServer {
    /// Connect the store and resolve the cache backend
    ///
    /// An unknown cache strategy fails here, before any request is served.
    pub async fn new(config: &Config) -> Result<Self> {
        info!("Creating HTTP server");

        let database = Arc::new(Database::new(&config.gateway.storage.database).await?);

        let provider = Arc::new(CacheProvider::from_config(&config.gateway));
        let backend = provider.resolve()?;
        info!(
            "Serving synonyms through {} cache (ttl {}s)",
            backend.describe().kind,
            config.gateway.cache.ttl
        );

        let repository = Arc::new(SynonymRepository::new(Arc::clone(&database)));
        let synonyms = SynonymService::new(provider, repository, config.gateway.cache.ttl);
        let state = AppState::new(config.clone(), database, synonyms);

        Ok(Self {
            config: config.gateway.server.clone(),
            state,
        })
    }

    /// Create the Actix-web application
    pub fn create_app(
        state: web::Data<AppState>,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(state)
            .wrap(TracingLogger::default())
            .wrap(DefaultHeaders::new().add(("Server", "synonym-gateway")))
            .route("/", web::get().to(root))
            .configure(routes::health::configure_routes)
            .configure(routes::synonyms::configure_routes)
    }

    /// Start the HTTP server
    pub async fn start(self) -> Result<()> {
        let bind_addr = self.config.address();
        let port = self.config.port;

        info!("Starting HTTP server on {}", bind_addr);

        let state = web::Data::new(self.state);

        let mut server = ActixHttpServer::new(move || Self::create_app(state.clone()));
        if let Some(workers) = self.config.workers {
            server = server.workers(workers);
        }

        let server = server
            .bind(&bind_addr)
            .map_err(|e| Self::format_bind_error(e, &bind_addr, port))?
            .run();

        info!("HTTP server listening on {}", bind_addr);

        server
            .await
            .map_err(|e| GatewayError::server(format!("Server error: {}", e)))?;

        info!("HTTP server stopped");
        Ok(())
    }

    /// Get server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get application state
    pub fn state(&self) -> &AppState {
        &self.state
    }
}
