// Module declarations
mod connection;
mod synonym_ops;
mod types;

// Re-export public types
pub use types::{DatabaseBackendType, SeaOrmDatabase};
