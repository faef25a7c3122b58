//! Common test utilities for synonym-gateway
//!
//! - In-memory SQLite database support
//! - Store and configuration fixtures
//!
//! # Usage
//!
//! ```rust
//! use crate::common::{database, fixtures};
//!
//! #[tokio::test]
//! async fn my_test() {
//!     let db = database::TestDatabase::seeded().await;
//!     let store = fixtures::CountingStore::new(db.repository());
//!     // ...
//! }
//! ```

pub mod fixtures;

// Re-export commonly used items
pub use database::TestDatabase;
pub use fixtures::{CountingStore, FailingStore, StaticStore};

/// Skip test if environment variable is not set
#[macro_export]
macro_rules! skip_without_env {
    ($var:expr) => {
        if std::env::var($var).is_err() {
            eprintln!("Skipping test: {} environment variable not set", $var);
            return;
        }
    };
}
