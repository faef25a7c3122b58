//! Services module
//!
//! This module contains business logic and service implementations

pub mod synonyms;

pub use synonyms::{
    CacheInfo, CacheMetadata, SYNONYMS_CACHE_KEY, SynonymRecord, SynonymRepository,
    SynonymResponse, SynonymService, SynonymStore,
};
