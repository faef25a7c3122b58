//! HTTP route handlers
//!
//! Handlers that sit outside any route group.

use actix_web::HttpResponse;
use serde_json::json;

/// Root liveness probe
pub async fn root() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}
