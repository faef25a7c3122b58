//! Cache type definitions
//!
//! Backend kinds, the descriptor attached to cached responses, stored
//! entries and the three-way lookup outcome.

use crate::config::RedisConfig;
use crate::utils::error::{GatewayError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use tokio::time::Instant;

/// Cache backend selected by configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheKind {
    /// In-process TTL map
    Memory,
    /// Redis over the network
    Redis,
}

impl CacheKind {
    /// Configuration name of this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            CacheKind::Memory => "memory",
            CacheKind::Redis => "redis",
        }
    }
}

impl fmt::Display for CacheKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CacheKind {
    type Err = GatewayError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(CacheKind::Memory),
            "redis" => Ok(CacheKind::Redis),
            _ => Err(GatewayError::Config(format!("Unknown cache strategy: {}", s))),
        }
    }
}

/// Which backend served a response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheDescriptor {
    /// Backend kind
    #[serde(rename = "cache_source")]
    pub kind: CacheKind,
    /// Redis host
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redis_host: Option<String>,
    /// Redis port
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redis_port: Option<u16>,
    /// Redis logical database
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redis_db: Option<i64>,
}

impl CacheDescriptor {
    /// Descriptor for the in-process backend
    pub fn memory() -> Self {
        Self {
            kind: CacheKind::Memory,
            redis_host: None,
            redis_port: None,
            redis_db: None,
        }
    }

    /// Descriptor carrying Redis coordinates
    pub fn redis(config: &RedisConfig) -> Self {
        Self {
            kind: CacheKind::Redis,
            redis_host: Some(config.host.clone()),
            redis_port: Some(config.port),
            redis_db: Some(config.db),
        }
    }
}

/// Stored value with its absolute expiry
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The cached value
    pub value: V,
    /// Last instant at which the entry is still visible
    pub expires_at: Instant,
}

impl<V> CacheEntry<V> {
    /// Create an entry expiring `ttl` after `now`
    ///
    /// Fails with [`GatewayError::Cache`] when the expiry is past what the
    /// clock can represent.
    pub fn new(value: V, ttl: Duration, now: Instant) -> Result<Self> {
        let expires_at = now.checked_add(ttl).ok_or_else(|| {
            GatewayError::cache(format!("TTL of {}s overflows the clock", ttl.as_secs()))
        })?;
        Ok(Self { value, expires_at })
    }

    /// Expired iff `now` is strictly past `expires_at`
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now > self.expires_at
    }
}

/// Outcome of a cache read
#[derive(Debug)]
pub enum CacheLookup<T> {
    /// A value was present and decoded
    Hit(T),
    /// Nothing stored under the key
    Miss,
    /// The backend failed or the payload did not decode
    Error(GatewayError),
}

impl<T: DeserializeOwned> CacheLookup<T> {
    /// Classify a raw backend read
    ///
    /// Presence decides a hit: an empty list stored under the key is still
    /// `Hit(vec![])`. A payload of the wrong shape becomes `Error`.
    pub fn decode(result: Result<Option<Value>>) -> Self {
        match result {
            Ok(Some(value)) => match serde_json::from_value(value) {
                Ok(decoded) => CacheLookup::Hit(decoded),
                Err(e) => CacheLookup::Error(GatewayError::Serialization(e)),
            },
            Ok(None) => CacheLookup::Miss,
            Err(e) => CacheLookup::Error(e),
        }
    }
}

impl<T> CacheLookup<T> {
    /// Fold errors into misses
    pub fn into_hit(self) -> Option<T> {
        match self {
            CacheLookup::Hit(value) => Some(value),
            CacheLookup::Miss | CacheLookup::Error(_) => None,
        }
    }

    pub fn is_hit(&self) -> bool {
        matches!(self, CacheLookup::Hit(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, CacheLookup::Error(_))
    }
}
