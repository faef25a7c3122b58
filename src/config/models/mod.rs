//! Configuration data models
//!
//! This module defines all configuration structures used throughout the gateway.

#![allow(missing_docs)]

pub mod cache;
pub mod gateway;
pub mod server;
pub mod storage;

// Re-export all configuration types
pub use cache::*;
pub use gateway::*;
pub use server::*;
pub use storage::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8000
}

pub fn default_cache_strategy() -> String {
    "memory".to_string()
}

pub fn default_cache_ttl() -> u64 {
    60
}

pub fn default_database_url() -> String {
    "sqlite://data/synonyms.db?mode=rwc".to_string()
}

pub fn default_max_connections() -> u32 {
    10
}

pub fn default_connection_timeout() -> u64 {
    5
}

pub fn default_redis_host() -> String {
    "localhost".to_string()
}

pub fn default_redis_port() -> u16 {
    6379
}

pub fn default_redis_response_timeout() -> u64 {
    2
}
