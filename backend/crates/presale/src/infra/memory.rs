//! In-memory Document Store
//!
//! Same contract as the PostgreSQL store, kept in process memory. Ids are
//! random UUIDs; documents come back in insertion order.

use std::collections::BTreeSet;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::document::{Collection, Document, StoredDocument};
use crate::domain::repository::DocumentRepository;
use crate::error::{PresaleError, PresaleResult};

#[derive(Clone, Default)]
pub struct MemoryDocumentStore {
    documents: Arc<RwLock<Vec<(Collection, StoredDocument)>>>,
    /// When set, every operation fails with this message
    failure: Option<Arc<str>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every operation fails, as an unreachable server would
    pub fn failing(message: impl Into<Arc<str>>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::default()
        }
    }

    /// Number of documents in a collection
    pub async fn count(&self, collection: Collection) -> usize {
        self.documents
            .read()
            .await
            .iter()
            .filter(|(c, _)| *c == collection)
            .count()
    }

    fn check_available(&self) -> PresaleResult<()> {
        match &self.failure {
            Some(message) => Err(PresaleError::Storage(message.to_string())),
            None => Ok(()),
        }
    }
}

impl DocumentRepository for MemoryDocumentStore {
    async fn insert_one(&self, collection: Collection, document: &Document) -> PresaleResult<Uuid> {
        self.check_available()?;

        let id = Uuid::new_v4();
        self.documents
            .write()
            .await
            .push((collection, StoredDocument::new(id, document.clone())));

        Ok(id)
    }

    async fn find_all(&self, collection: Collection) -> PresaleResult<Vec<StoredDocument>> {
        self.check_available()?;

        Ok(self
            .documents
            .read()
            .await
            .iter()
            .filter(|(c, _)| *c == collection)
            .map(|(_, doc)| doc.clone())
            .collect())
    }

    async fn list_collection_names(&self) -> PresaleResult<Vec<String>> {
        self.check_available()?;

        let names: BTreeSet<String> = self
            .documents
            .read()
            .await
            .iter()
            .map(|(c, _)| c.to_string())
            .collect();

        Ok(names.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: serde_json::Value) -> Document {
        value.as_object().cloned().unwrap_or_default()
    }

    #[tokio::test]
    async fn test_insert_then_find_in_order() {
        let store = MemoryDocumentStore::new();
        let first = store
            .insert_one(Collection::Presale, &doc(json!({ "name": "A" })))
            .await
            .unwrap();
        let second = store
            .insert_one(Collection::Presale, &doc(json!({ "name": "B" })))
            .await
            .unwrap();
        store
            .insert_one(Collection::WhitelistEntry, &doc(json!({ "email": "a@b.com" })))
            .await
            .unwrap();

        let found = store.find_all(Collection::Presale).await.unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].id, first);
        assert_eq!(found[1].id, second);
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_empty_collection_is_empty_list() {
        let store = MemoryDocumentStore::new();
        assert!(store.find_all(Collection::Presale).await.unwrap().is_empty());
        assert!(store.list_collection_names().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_collection_names_distinct_sorted() {
        let store = MemoryDocumentStore::new();
        for collection in [Collection::WhitelistEntry, Collection::Presale, Collection::Presale] {
            store.insert_one(collection, &Document::new()).await.unwrap();
        }
        assert_eq!(
            store.list_collection_names().await.unwrap(),
            vec!["presale", "whitelistentry"]
        );
    }

    #[tokio::test]
    async fn test_failing_store() {
        let store = MemoryDocumentStore::failing("connection refused");
        let err = store
            .insert_one(Collection::Presale, &Document::new())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "connection refused");
        assert!(store.find_all(Collection::Presale).await.is_err());
    }
}
