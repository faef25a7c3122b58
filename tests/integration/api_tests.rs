//! HTTP API integration tests
//!
//! Drives the actix application in-process against an in-memory store.

#[cfg(test)]
mod tests {
    use crate::common::fixtures::{test_config, unreachable_redis_config};
    use crate::common::{FailingStore, TestDatabase};
    use actix_web::{test, web};
    use serde_json::Value;
    use std::sync::Arc;
    use synonym_gateway::server::{AppState, HttpServer};
    use synonym_gateway::services::{SynonymService, SynonymStore};
    use synonym_gateway::utils::error::ErrorResponse;
    use synonym_gateway::{CacheProvider, Config};

    fn state_with(
        config: Config,
        db: &TestDatabase,
        store: Arc<dyn SynonymStore>,
    ) -> web::Data<AppState> {
        let provider = Arc::new(CacheProvider::from_config(&config.gateway));
        provider.resolve().unwrap();
        let service = SynonymService::new(provider, store, config.gateway.cache.ttl);
        web::Data::new(AppState::new(config, db.db_arc(), service))
    }

    async fn seeded_state(strategy: &str) -> web::Data<AppState> {
        let db = TestDatabase::seeded().await;
        let mut config = test_config(strategy, 30);
        config.gateway.storage.redis = unreachable_redis_config();
        state_with(config, &db, db.repository())
    }

    macro_rules! app {
        ($state:expr) => {
            test::init_service(HttpServer::create_app($state)).await
        };
    }

    #[actix_web::test]
    async fn test_root_reports_ok() {
        let app = app!(seeded_state("memory").await);

        let req = test::TestRequest::get().uri("/").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, serde_json::json!({"status": "ok"}));
    }

    #[actix_web::test]
    async fn test_health() {
        let app = app!(seeded_state("memory").await);

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
        assert_eq!(
            resp.headers().get("Server").and_then(|v| v.to_str().ok()),
            Some("synonym-gateway")
        );

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["version"], synonym_gateway::VERSION);
    }

    #[actix_web::test]
    async fn test_detailed_health_with_memory_cache() {
        let app = app!(seeded_state("memory").await);

        let req = test::TestRequest::get().uri("/health/detailed").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["status"], "healthy");
        assert_eq!(body["data"]["cache_backend"], "memory");
        assert_eq!(body["data"]["database_backend"], "sqlite");
        assert_eq!(body["data"]["storage"]["overall"], true);
    }

    #[actix_web::test]
    async fn test_detailed_health_degraded_when_redis_down() {
        let app = app!(seeded_state("redis").await);

        let req = test::TestRequest::get().uri("/health/detailed").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["status"], "degraded");
        assert_eq!(body["data"]["storage"]["database"], true);
        assert_eq!(body["data"]["storage"]["cache"], false);
    }

    #[actix_web::test]
    async fn test_version() {
        let app = app!(seeded_state("memory").await);

        let req = test::TestRequest::get().uri("/version").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["version"], synonym_gateway::VERSION);
        assert!(body["data"]["git_hash"].is_string());
    }

    #[actix_web::test]
    async fn test_info_reports_strategy_and_ttl() {
        let app = app!(seeded_state("redis").await);

        let req = test::TestRequest::get().uri("/api/info").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(
            body,
            serde_json::json!({"cache_strategy": "redis", "cache_ttl_seconds": 30})
        );
    }

    #[actix_web::test]
    async fn test_synonyms_cold_then_warm() {
        let app = app!(seeded_state("memory").await);

        let req = test::TestRequest::get().uri("/api/synonyms").to_request();
        let cold: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(cold.len(), 20);
        for record in &cold {
            assert_eq!(record["cache_metadata"]["from_cache"], false);
            assert!(record["cache_metadata"].get("cache_info").is_none());
        }
        assert_eq!(cold[0]["word"], "happy");

        let req = test::TestRequest::get().uri("/api/synonyms").to_request();
        let warm: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(warm.len(), 20);
        for (hot, fresh) in warm.iter().zip(&cold) {
            assert_eq!(hot["cache_metadata"]["from_cache"], true);
            assert_eq!(
                hot["cache_metadata"]["cache_info"],
                serde_json::json!({"cache_source": "memory"})
            );
            assert_eq!(hot["id"], fresh["id"]);
            assert_eq!(hot["word"], fresh["word"]);
            assert_eq!(hot["synonyms"], fresh["synonyms"]);
        }
    }

    #[actix_web::test]
    async fn test_synonyms_survive_redis_outage() {
        let app = app!(seeded_state("redis").await);

        for _ in 0..2 {
            let req = test::TestRequest::get().uri("/api/synonyms").to_request();
            let resp = test::call_service(&app, req).await;
            assert!(resp.status().is_success());

            let body: Vec<Value> = test::read_body_json(resp).await;
            assert_eq!(body.len(), 20);
            assert!(body.iter().all(|r| r["cache_metadata"]["from_cache"] == false));
        }
    }

    #[actix_web::test]
    async fn test_store_failure_is_service_unavailable() {
        let db = TestDatabase::new().await;
        let state = state_with(test_config("memory", 30), &db, Arc::new(FailingStore));
        let app = app!(state);

        let req = test::TestRequest::get().uri("/api/synonyms").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::SERVICE_UNAVAILABLE);

        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error.code, "DATABASE_ERROR");
        assert_eq!(body.error.message, "Database operation failed");
    }

    #[actix_web::test]
    async fn test_unknown_route() {
        let app = app!(seeded_state("memory").await);

        let req = test::TestRequest::get().uri("/api/unknown").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_server_rejects_unknown_strategy_at_startup() {
        let config = test_config("memcached", 30);
        let result = HttpServer::new(&config).await;
        assert!(matches!(
            result,
            Err(synonym_gateway::GatewayError::Config(ref msg)) if msg.contains("memcached")
        ));
    }

    #[actix_web::test]
    async fn test_server_builds_with_memory_strategy() {
        let config = test_config("memory", 30);
        let server = HttpServer::new(&config).await.unwrap();
        assert!(server.state().cache_provider().is_resolved());
        assert_eq!(server.state().synonyms.ttl_seconds(), 30);
    }
}
