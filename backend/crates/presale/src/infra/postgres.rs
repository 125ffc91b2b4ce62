//! PostgreSQL Document Store
//!
//! Each document is one row of the `documents` table: the collection name,
//! the JSONB body and a database-generated UUID. Rows come back in insertion
//! order (`seq`).
//!
//! The schema migrations run before the first operation that reaches the
//! database. A failed run is retried by the next operation.

use sqlx::PgPool;
use sqlx::migrate::Migrator;
use sqlx::types::Json;
use std::sync::Arc;
use tokio::sync::OnceCell;
use uuid::Uuid;

use crate::domain::document::{Collection, Document, StoredDocument};
use crate::domain::repository::DocumentRepository;
use crate::error::{PresaleError, PresaleResult};

static MIGRATOR: Migrator = sqlx::migrate!("../../../database/migrations");

/// PostgreSQL-backed document store
#[derive(Clone)]
pub struct PgDocumentStore {
    pool: PgPool,
    migrated: Arc<OnceCell<()>>,
}

impl PgDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            migrated: Arc::new(OnceCell::new()),
        }
    }

    /// Apply pending migrations once; after a failure the next call tries again
    pub async fn migrate(&self) -> PresaleResult<()> {
        self.migrated
            .get_or_try_init(|| async {
                MIGRATOR.run(&self.pool).await?;
                tracing::info!("Migrations completed");
                Ok::<_, PresaleError>(())
            })
            .await?;
        Ok(())
    }

    pub fn is_migrated(&self) -> bool {
        self.migrated.initialized()
    }
}

impl DocumentRepository for PgDocumentStore {
    async fn insert_one(&self, collection: Collection, document: &Document) -> PresaleResult<Uuid> {
        self.migrate().await?;

        let document_id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO documents (collection, body)
            VALUES ($1, $2)
            RETURNING document_id
            "#,
        )
        .bind(collection.to_string())
        .bind(Json(document))
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(
            document_id = %document_id,
            collection = %collection,
            "Document inserted"
        );

        Ok(document_id)
    }

    async fn find_all(&self, collection: Collection) -> PresaleResult<Vec<StoredDocument>> {
        self.migrate().await?;

        let rows = sqlx::query_as::<_, DocumentRow>(
            r#"
            SELECT document_id, body
            FROM documents
            WHERE collection = $1
            ORDER BY seq
            "#,
        )
        .bind(collection.to_string())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(DocumentRow::into_stored).collect())
    }

    async fn list_collection_names(&self) -> PresaleResult<Vec<String>> {
        self.migrate().await?;

        let names = sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT collection FROM documents ORDER BY collection",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(names)
    }
}

// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct DocumentRow {
    document_id: Uuid,
    body: Json<Document>,
}

impl DocumentRow {
    fn into_stored(self) -> StoredDocument {
        StoredDocument::new(self.document_id, self.body.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::postgres::PgPoolOptions;
    use std::time::Duration;

    fn unreachable_store() -> PgDocumentStore {
        let pool = PgPoolOptions::new()
            .acquire_timeout(Duration::from_millis(200))
            .connect_lazy("postgres://presale@127.0.0.1:1/presale")
            .unwrap();
        PgDocumentStore::new(pool)
    }

    #[tokio::test]
    async fn test_failed_migration_is_retried() {
        let store = unreachable_store();

        let err = store.find_all(Collection::Presale).await.unwrap_err();
        assert!(matches!(err, PresaleError::Migration(_)));
        assert!(!store.is_migrated());

        // Nothing was cached, so the next call attempts the migration again
        let err = store
            .insert_one(Collection::Presale, &Document::new())
            .await
            .unwrap_err();
        assert!(matches!(err, PresaleError::Migration(_)));
        assert!(!store.is_migrated());
    }
}
