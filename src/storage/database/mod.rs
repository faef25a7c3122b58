//! Database storage implementation using SeaORM
//!
//! This module provides database connectivity and the synonym queries.

/// Database entities module
pub mod entities;
/// Database migration module
pub mod migration;
/// SeaORM database implementation module
pub mod seaorm_db;
/// Demo seed rows
pub mod seed;

// Re-export the main database interface
pub use seaorm_db::SeaOrmDatabase as Database;
pub use seaorm_db::DatabaseBackendType;
pub use seed::DEFAULT_SYNONYMS;
