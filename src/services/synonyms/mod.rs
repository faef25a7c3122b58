//! Synonym read path
//!
//! ## Module Structure
//!
//! - `types` - Records and response envelopes
//! - `repository` - Store contract and its database implementation
//! - `service` - Cache-aside read of the full record set
//! - `tests` - Read-through tests against a mocked store

mod repository;
mod service;
mod types;


pub use repository::{SynonymRepository, SynonymStore};
pub use service::{SYNONYMS_CACHE_KEY, SynonymService};
pub use types::{CacheInfo, CacheMetadata, SynonymRecord, SynonymResponse};
