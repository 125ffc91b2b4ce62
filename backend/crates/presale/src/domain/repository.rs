//! Repository Traits
//!
//! The document store contract. Implementations live in the infra layer.

use uuid::Uuid;

use crate::domain::document::{Collection, Document, StoredDocument};
use crate::error::{PresaleError, PresaleResult};

/// Document store repository trait
#[trait_variant::make(DocumentRepository: Send)]
pub trait LocalDocumentRepository {
    /// Insert a single document; returns the identifier the store assigned
    async fn insert_one(&self, collection: Collection, document: &Document) -> PresaleResult<Uuid>;

    /// Every document in the collection, in store order
    async fn find_all(&self, collection: Collection) -> PresaleResult<Vec<StoredDocument>>;

    /// Names of the collections currently holding documents
    async fn list_collection_names(&self) -> PresaleResult<Vec<String>>;
}

/// An unconfigured store: every call fails with [`PresaleError::StorageUnavailable`]
impl<R> DocumentRepository for Option<R>
where
    R: DocumentRepository + Sync,
{
    async fn insert_one(&self, collection: Collection, document: &Document) -> PresaleResult<Uuid> {
        match self {
            Some(repo) => repo.insert_one(collection, document).await,
            None => Err(PresaleError::StorageUnavailable),
        }
    }

    async fn find_all(&self, collection: Collection) -> PresaleResult<Vec<StoredDocument>> {
        match self {
            Some(repo) => repo.find_all(collection).await,
            None => Err(PresaleError::StorageUnavailable),
        }
    }

    async fn list_collection_names(&self) -> PresaleResult<Vec<String>> {
        match self {
            Some(repo) => repo.list_collection_names().await,
            None => Err(PresaleError::StorageUnavailable),
        }
    }
}
