//! Configuration validation integration tests
//!
//! File loading, environment overlay and validation of the full gateway
//! configuration.

#[cfg(test)]
mod tests {
    use crate::common::fixtures::test_config;
    use std::collections::HashMap;
    use std::io::Write;
    use synonym_gateway::config::{GatewayConfig, Validate};
    use synonym_gateway::{CacheProvider, Config, GatewayError};

    fn write_config(yaml: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();
        file
    }

    // ==================== File loading ====================

    /// A full file round-trips into the typed config
    #[tokio::test]
    async fn test_load_full_file() {
        let file = write_config(
            r#"
server:
  host: 127.0.0.1
  port: 8080
  workers: 2
storage:
  database:
    url: "sqlite::memory:"
    max_connections: 1
  redis:
    host: cache
    port: 6380
    db: 3
cache:
  strategy: redis
  ttl: 25
"#,
        );

        let config = Config::from_file(file.path()).await.unwrap();
        assert_eq!(config.server().address(), "127.0.0.1:8080");
        assert_eq!(config.server().workers, Some(2));
        assert_eq!(config.storage().redis.address(), "cache:6380");
        assert_eq!(config.storage().redis.db, 3);
        assert_eq!(config.cache().strategy, "redis");
        assert_eq!(config.cache().ttl, 25);
    }

    /// Missing sections fall back to defaults
    #[tokio::test]
    async fn test_load_partial_file_uses_defaults() {
        let file = write_config("cache:\n  ttl: 10\n");

        let config = Config::from_file(file.path()).await.unwrap();
        assert_eq!(config.cache().ttl, 10);
        assert_eq!(config.cache().strategy, "memory");
        assert_eq!(config.server().port, 8000);
        assert_eq!(config.storage().redis.port, 6379);
    }

    /// Zero TTL in a file is rejected
    #[tokio::test]
    async fn test_load_rejects_zero_ttl() {
        let file = write_config("cache:\n  ttl: 0\n");

        let result = Config::from_file(file.path()).await;
        assert!(matches!(result, Err(GatewayError::Config(ref msg)) if msg.contains("TTL")));
    }

    /// Malformed YAML surfaces the parser error
    #[tokio::test]
    async fn test_load_rejects_malformed_yaml() {
        let file = write_config("cache: [unterminated\n");

        let result = Config::from_file(file.path()).await;
        assert!(matches!(result, Err(GatewayError::Yaml(_))));
    }

    /// A missing file surfaces the I/O error
    #[tokio::test]
    async fn test_load_missing_file() {
        let result = Config::from_file("/nonexistent/gateway.yaml").await;
        assert!(matches!(result, Err(GatewayError::Io(_))));
    }

    // ==================== Environment overlay ====================

    /// Environment values win over file values
    #[tokio::test]
    async fn test_environment_overrides_file() {
        let file = write_config("cache:\n  strategy: memory\n  ttl: 60\n");
        let mut config = Config::from_file(file.path()).await.unwrap();

        let env: HashMap<&str, &str> = [("CACHE_STRATEGY", "redis"), ("CACHE_TTL", "5")]
            .into_iter()
            .collect();
        config
            .gateway
            .apply_env_with(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.cache().strategy, "redis");
        assert_eq!(config.cache().ttl, 5);
        assert!(config.validate().is_ok());
    }

    /// Non-numeric values are reported with their key
    #[test]
    fn test_environment_rejects_bad_numbers() {
        let mut config = GatewayConfig::default();
        let result = config.apply_env_with(|key| (key == "REDIS_PORT").then(|| "abc".to_string()));

        assert!(matches!(result, Err(GatewayError::Config(ref msg)) if msg.contains("REDIS_PORT")));
    }

    // ==================== Validation ====================

    /// The test configuration itself is valid
    #[test]
    fn test_valid_gateway_config() {
        assert!(test_config("memory", 30).gateway.validate().is_ok());
    }

    /// Server port 0 fails validation
    #[test]
    fn test_port_zero() {
        let mut config = test_config("memory", 30);
        config.gateway.server.port = 0;

        let result = config.gateway.validate();
        assert!(result.unwrap_err().contains("port"));
    }

    /// Unsupported database schemes fail validation
    #[test]
    fn test_unsupported_database() {
        let mut config = test_config("memory", 30);
        config.gateway.storage.database.url = "mssql://sa@localhost/synonyms".to_string();

        assert!(config.gateway.validate().is_err());
    }

    /// Redis coordinates are checked even for the memory strategy
    #[test]
    fn test_empty_redis_host() {
        let mut config = test_config("memory", 30);
        config.gateway.storage.redis.host.clear();

        let result = config.gateway.validate();
        assert!(result.unwrap_err().contains("Redis host"));
    }

    /// Unknown strategies pass validation and fail at resolution
    #[test]
    fn test_unknown_strategy_fails_at_resolution() {
        let config = test_config("memcached", 30);
        assert!(config.validate().is_ok());

        let provider = CacheProvider::from_config(&config.gateway);
        assert!(matches!(provider.resolve(), Err(GatewayError::Config(_))));
    }
}
