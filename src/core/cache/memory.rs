//! In-process cache backend

use super::types::{CacheDescriptor, CacheEntry};
use super::Cache;
use crate::utils::error::Result;
use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

/// Key to value map with per-entry expiry
///
/// Expired entries are dropped when a read finds them; there is no
/// background sweep, so the map grows with the number of distinct keys.
#[derive(Debug)]
pub struct TtlMap<V> {
    entries: HashMap<String, CacheEntry<V>>,
}

impl<V> Default for TtlMap<V> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<V: Clone> TtlMap<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Live value for `key`, removing it if it expired
    pub fn get(&mut self, key: &str, now: Instant) -> Option<V> {
        match self.entries.get(key) {
            Some(entry) if entry.is_expired_at(now) => {
                self.entries.remove(key);
                None
            }
            Some(entry) => Some(entry.value.clone()),
            None => None,
        }
    }

    /// Store an entry, replacing any previous one
    pub fn insert(&mut self, key: impl Into<String>, entry: CacheEntry<V>) {
        self.entries.insert(key.into(), entry);
    }

    /// Remove `key`, returning whether it was stored
    pub fn remove(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    /// Whether a live entry exists, removing it if it expired
    pub fn contains(&mut self, key: &str, now: Instant) -> bool {
        match self.entries.get(key) {
            Some(entry) if entry.is_expired_at(now) => {
                self.entries.remove(key);
                false
            }
            Some(_) => true,
            None => false,
        }
    }

    /// Stored entries, live or not yet reclaimed
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Cache backend over a locked [`TtlMap`]
///
/// A TTL of zero expires the entry immediately: `set` removes the key.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: Mutex<TtlMap<Value>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries currently held, including expired ones not yet reclaimed
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

#[async_trait]
impl Cache for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<Value>> {
        let now = Instant::now();
        Ok(self.entries.lock().get(key, now))
    }

    async fn set(&self, key: &str, value: Value, ttl_seconds: u64) -> Result<()> {
        if ttl_seconds == 0 {
            debug!("Zero TTL for key {}, dropping entry", key);
            self.entries.lock().remove(key);
            return Ok(());
        }

        let entry = CacheEntry::new(value, Duration::from_secs(ttl_seconds), Instant::now())?;
        self.entries.lock().insert(key, entry);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.entries.lock().remove(key);
        Ok(())
    }

    async fn exists(&self, key: &str) -> Result<bool> {
        let now = Instant::now();
        Ok(self.entries.lock().contains(key, now))
    }

    fn describe(&self) -> CacheDescriptor {
        CacheDescriptor::memory()
    }
}
