//! Documents and Collections
//!
//! The store keeps schemaless JSON objects grouped into named collections.
//! Identifiers are assigned by the store on insert.

use derive_more::Display;
use serde_json::{Map, Value};
use uuid::Uuid;

/// A JSON object as written to or read from the store
pub type Document = Map<String, Value>;

/// Named grouping of documents
///
/// The stored name is the `Display` form: the lower-cased record kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Collection {
    #[display("presale")]
    Presale,
    #[display("whitelistentry")]
    WhitelistEntry,
}

/// A document read back from the store together with its identifier
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    pub id: Uuid,
    pub body: Document,
}

impl StoredDocument {
    pub fn new(id: Uuid, body: Document) -> Self {
        Self { id, body }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.body.get(field)
    }
}
