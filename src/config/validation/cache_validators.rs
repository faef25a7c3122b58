//! Cache configuration validators

use super::trait_def::Validate;
use crate::config::models::*;

/// Longest accepted cache TTL, one year
pub const MAX_CACHE_TTL_SECONDS: u64 = 365 * 24 * 60 * 60;

impl Validate for CacheConfig {
    fn validate(&self) -> Result<(), String> {
        if self.ttl == 0 {
            return Err("Cache TTL must be greater than 0".to_string());
        }

        if self.ttl > MAX_CACHE_TTL_SECONDS {
            return Err(format!(
                "Cache TTL must not exceed {} seconds",
                MAX_CACHE_TTL_SECONDS
            ));
        }

        if self.strategy.trim().is_empty() {
            return Err("Cache strategy cannot be empty".to_string());
        }

        Ok(())
    }
}
