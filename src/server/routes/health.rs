//! Health check and status endpoints
//!
//! This module provides health check and build information endpoints.

use crate::core::cache::CacheKind;
use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::storage::StorageHealthStatus;
use crate::storage::database::DatabaseBackendType;
use actix_web::{HttpResponse, Result as ActixResult, web};
use std::borrow::Cow;

use tracing::{debug, warn};

/// Configure health check routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/health")
            .route("", web::get().to(health_check))
            .route("/detailed", web::get().to(detailed_health_check)),
    )
    .route("/version", web::get().to(version_info));
}

/// Basic health check endpoint
///
/// Reports that the process is up without touching any backend.
pub async fn health_check() -> HttpResponse {
    debug!("Health check requested");

    HttpResponse::Ok().json(HealthStatus {
        status: Cow::Borrowed("healthy"),
        timestamp: chrono::Utc::now(),
        version: Cow::Borrowed(env!("CARGO_PKG_VERSION")),
    })
}

/// Detailed health check endpoint
///
/// Probes the database and the cache backend. Failures show up as
/// `degraded`, never as an error status.
async fn detailed_health_check(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    debug!("Detailed health check requested");

    let database = match state.database.health_check().await {
        Ok(()) => true,
        Err(e) => {
            warn!("Database health check failed: {}", e);
            false
        }
    };

    let provider = state.cache_provider();
    let (cache_backend, cache) = match provider.resolve() {
        Ok(backend) => {
            let healthy = match backend.health_check().await {
                Ok(()) => true,
                Err(e) => {
                    warn!("Cache health check failed: {}", e);
                    false
                }
            };
            (Some(backend.kind()), healthy)
        }
        Err(e) => {
            warn!("Cache backend unavailable: {}", e);
            (None, false)
        }
    };

    let storage = StorageHealthStatus::new(database, cache);
    let detailed_status = DetailedHealthStatus {
        status: if storage.overall {
            Cow::Borrowed("healthy")
        } else {
            Cow::Borrowed("degraded")
        },
        timestamp: chrono::Utc::now(),
        version: Cow::Borrowed(env!("CARGO_PKG_VERSION")),
        database_backend: state.database.backend_type(),
        cache_backend,
        storage,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(detailed_status)))
}

/// Version information endpoint
///
/// Returns version and build information.
async fn version_info() -> HttpResponse {
    debug!("Version info requested");

    let version_info = VersionInfo {
        version: Cow::Borrowed(env!("CARGO_PKG_VERSION")),
        build_time: Cow::Borrowed(env!("BUILD_TIME")),
        git_hash: Cow::Borrowed(env!("GIT_HASH")),
        rust_version: Cow::Borrowed(env!("RUST_VERSION")),
        features: get_enabled_features(),
    };

    HttpResponse::Ok().json(ApiResponse::success(version_info))
}

/// Basic health status
#[derive(Debug, Clone, serde::Serialize)]
struct HealthStatus {
    status: Cow<'static, str>,
    timestamp: chrono::DateTime<chrono::Utc>,
    version: Cow<'static, str>,
}

/// Detailed health status
#[derive(Debug, Clone, serde::Serialize)]
struct DetailedHealthStatus {
    status: Cow<'static, str>,
    timestamp: chrono::DateTime<chrono::Utc>,
    version: Cow<'static, str>,
    database_backend: DatabaseBackendType,
    cache_backend: Option<CacheKind>,
    storage: StorageHealthStatus,
}

/// Version information
#[derive(Debug, Clone, serde::Serialize)]
struct VersionInfo {
    version: Cow<'static, str>,
    build_time: Cow<'static, str>,
    git_hash: Cow<'static, str>,
    rust_version: Cow<'static, str>,
    features: Vec<Cow<'static, str>>,
}

/// Compiled database drivers
fn get_enabled_features() -> Vec<Cow<'static, str>> {
    let mut features = Vec::new();

    #[cfg(feature = "sqlite")]
    features.push(Cow::Borrowed("sqlite"));

    #[cfg(feature = "postgres")]
    features.push(Cow::Borrowed("postgres"));

    features
}
