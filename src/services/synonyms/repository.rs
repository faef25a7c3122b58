//! Source of truth for synonym records

use super::types::SynonymRecord;
use crate::storage::database::Database;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Read access to every synonym record
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SynonymStore: Send + Sync {
    /// All records, ordered by id
    async fn fetch_all(&self) -> Result<Vec<SynonymRecord>>;
}

/// [`SynonymStore`] backed by the synonyms table
#[derive(Debug, Clone)]
pub struct SynonymRepository {
    db: Arc<Database>,
}

impl SynonymRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SynonymStore for SynonymRepository {
    async fn fetch_all(&self) -> Result<Vec<SynonymRecord>> {
        let rows = self.db.list_synonyms().await?;
        Ok(rows.into_iter().map(SynonymRecord::from).collect())
    }
}
