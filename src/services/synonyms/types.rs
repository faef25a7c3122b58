//! Synonym service types

use crate::core::cache::CacheDescriptor;
use crate::storage::database::entities::synonym;
use serde::{Deserialize, Serialize};

/// A word and its synonyms as served and cached
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynonymRecord {
    /// Store-assigned identifier
    pub id: i32,
    pub word: String,
    /// Comma-delimited synonym list
    pub synonyms: String,
}

impl From<synonym::Model> for SynonymRecord {
    fn from(model: synonym::Model) -> Self {
        Self {
            id: model.word_id,
            word: model.word,
            synonyms: model.synonyms,
        }
    }
}

/// How a record reached the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheMetadata {
    #[serde(rename = "from_cache")]
    pub served_from_cache: bool,
    /// Present only for records served from the cache
    #[serde(
        rename = "cache_info",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub cache_descriptor: Option<CacheDescriptor>,
}

/// Record plus cache metadata, flattened on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynonymResponse {
    #[serde(flatten)]
    pub record: SynonymRecord,
    pub cache_metadata: CacheMetadata,
}

impl SynonymResponse {
    /// Envelope for a record read from the cache
    pub fn cached(record: SynonymRecord, descriptor: CacheDescriptor) -> Self {
        Self {
            record,
            cache_metadata: CacheMetadata {
                served_from_cache: true,
                cache_descriptor: Some(descriptor),
            },
        }
    }

    /// Envelope for a record read from the store
    pub fn fresh(record: SynonymRecord) -> Self {
        Self {
            record,
            cache_metadata: CacheMetadata {
                served_from_cache: false,
                cache_descriptor: None,
            },
        }
    }

    pub fn from_cache(&self) -> bool {
        self.cache_metadata.served_from_cache
    }
}

/// Configured cache strategy and TTL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheInfo {
    pub cache_strategy: String,
    pub cache_ttl_seconds: u64,
}
