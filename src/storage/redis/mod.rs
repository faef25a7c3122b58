//! Redis storage implementation
//!
//! ## Module Structure
//!
//! - `pool` - Lazy connection management and health checks
//! - `cache` - Key-value commands (get, setex, del, exists)
//! - `tests` - Module tests

mod cache;
mod pool;

pub use pool::RedisPool;
