use crate::utils::error::{GatewayError, Result};
use sea_orm::*;
use tracing::{debug, info};

use super::super::entities::{self, synonym};
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    /// Every synonym row, ordered by id
    pub async fn list_synonyms(&self) -> Result<Vec<synonym::Model>> {
        debug!("Listing all synonyms");

        entities::Synonym::find()
            .order_by_asc(synonym::Column::WordId)
            .all(&self.db)
            .await
            .map_err(GatewayError::Database)
    }

    /// Number of rows in the synonyms table
    pub async fn count_synonyms(&self) -> Result<u64> {
        entities::Synonym::find()
            .count(&self.db)
            .await
            .map_err(GatewayError::Database)
    }

    /// Insert rows, letting the database assign ids
    pub async fn insert_synonyms(&self, rows: &[(&str, &str)]) -> Result<()> {
        if rows.is_empty() {
            return Ok(());
        }

        let models = rows.iter().map(|(word, synonyms)| synonym::ActiveModel {
            word_id: NotSet,
            word: Set((*word).to_string()),
            synonyms: Set((*synonyms).to_string()),
        });

        entities::Synonym::insert_many(models)
            .exec(&self.db)
            .await
            .map_err(GatewayError::Database)?;

        debug!("Inserted {} synonym rows", rows.len());
        Ok(())
    }

    /// Insert the given rows only when the table is empty
    ///
    /// Returns whether anything was written.
    pub async fn seed_synonyms(&self, rows: &[(&str, &str)]) -> Result<bool> {
        if self.count_synonyms().await? > 0 {
            debug!("Synonyms table already populated, skipping seed");
            return Ok(false);
        }

        self.insert_synonyms(rows).await?;
        info!("Seeded synonyms table with {} rows", rows.len());
        Ok(true)
    }
}
