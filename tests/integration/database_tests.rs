//! Database integration tests
//!
//! Tests database operations using real in-memory SQLite database.

#[cfg(test)]
mod tests {
    use crate::common::TestDatabase;
    use crate::common::database::test_db_config;
    use synonym_gateway::services::SynonymStore;
    use synonym_gateway::storage::database::{DEFAULT_SYNONYMS, Database, DatabaseBackendType};

    /// Test basic database connection and health check
    #[tokio::test]
    async fn test_database_health_check() {
        let db = Database::new(&test_db_config()).await;
        assert!(db.is_ok(), "Failed to create database: {:?}", db.err());

        let db = db.unwrap();
        assert_eq!(db.backend_type(), DatabaseBackendType::SQLite);

        let migrate_result = db.migrate().await;
        assert!(
            migrate_result.is_ok(),
            "Migration failed: {:?}",
            migrate_result.err()
        );

        let health = db.health_check().await;
        assert!(health.is_ok(), "Health check failed: {:?}", health.err());
    }

    /// Health check fails before the table exists
    #[tokio::test]
    async fn test_health_check_requires_migration() {
        let db = Database::new(&test_db_config()).await.unwrap();
        assert!(db.health_check().await.is_err());
    }

    /// Migrations can run repeatedly
    #[tokio::test]
    async fn test_database_migration_is_idempotent() {
        let db = TestDatabase::new().await;
        assert!(db.db().migrate().await.is_ok());
        assert_eq!(db.db().count_synonyms().await.unwrap(), 0);
    }

    /// Seeding only fills an empty table
    #[tokio::test]
    async fn test_seed_only_when_empty() {
        let db = TestDatabase::new().await;

        assert!(db.db().seed_synonyms(&DEFAULT_SYNONYMS).await.unwrap());
        assert!(!db.db().seed_synonyms(&DEFAULT_SYNONYMS).await.unwrap());
        assert_eq!(db.db().count_synonyms().await.unwrap(), 20);
    }

    /// Rows come back ordered by their assigned id
    #[tokio::test]
    async fn test_list_synonyms_ordered_by_id() {
        let db = TestDatabase::seeded().await;

        let rows = db.db().list_synonyms().await.unwrap();
        assert_eq!(rows.len(), 20);
        assert!(rows.windows(2).all(|w| w[0].word_id < w[1].word_id));
        assert_eq!(rows[0].word, DEFAULT_SYNONYMS[0].0);
        assert_eq!(rows[0].synonyms, DEFAULT_SYNONYMS[0].1);
    }

    /// Empty inserts are a no-op
    #[tokio::test]
    async fn test_insert_nothing() {
        let db = TestDatabase::new().await;
        db.db().insert_synonyms(&[]).await.unwrap();
        assert_eq!(db.db().count_synonyms().await.unwrap(), 0);
    }

    /// The repository exposes rows as records with `id`
    #[tokio::test]
    async fn test_repository_fetch_all() {
        let db = TestDatabase::seeded().await;
        let rows = db.db().list_synonyms().await.unwrap();

        let records = db.repository().fetch_all().await.unwrap();
        assert_eq!(records.len(), rows.len());
        for (record, row) in records.iter().zip(&rows) {
            assert_eq!(record.id, row.word_id);
            assert_eq!(record.word, row.word);
            assert_eq!(record.synonyms, row.synonyms);
        }
    }

    /// An empty table is an empty record set
    #[tokio::test]
    async fn test_repository_empty_table() {
        let db = TestDatabase::new().await;
        assert!(db.repository().fetch_all().await.unwrap().is_empty());
    }
}
