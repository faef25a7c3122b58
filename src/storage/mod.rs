//! Storage layer for the gateway
//!
//! This module provides the relational source of truth and the Redis
//! connection the networked cache backend runs on.

/// Database storage module
pub mod database;
/// Redis connection module
pub mod redis;

use serde::Serialize;

/// Storage health status
#[derive(Debug, Clone, Serialize)]
pub struct StorageHealthStatus {
    /// Database health status
    pub database: bool,
    /// Cache backend health status
    pub cache: bool,
    /// Overall health status
    pub overall: bool,
}

impl StorageHealthStatus {
    /// Combine the per-backend checks
    pub fn new(database: bool, cache: bool) -> Self {
        Self {
            database,
            cache,
            overall: database && cache,
        }
    }
}
