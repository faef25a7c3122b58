//! Synonym read endpoints

use crate::server::state::AppState;
use actix_web::{HttpResponse, Result as ActixResult, web};
use tracing::debug;

/// Configure synonym routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/info", web::get().to(cache_info))
            .route("/synonyms", web::get().to(list_synonyms)),
    );
}

/// Configured cache strategy and TTL
async fn cache_info(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.synonyms.info())
}

/// Every synonym record with its cache metadata
///
/// Store failures map to 503 through `GatewayError`'s response impl.
async fn list_synonyms(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    let responses = state.synonyms.get_all().await?;
    debug!("Returning {} synonym records", responses.len());
    Ok(HttpResponse::Ok().json(responses))
}
