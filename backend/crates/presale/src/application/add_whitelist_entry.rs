//! Add Whitelist Entry Use Case

use kernel::id::WhitelistEntryId;
use serde_json::Value;
use std::sync::Arc;

use crate::domain::document::Collection;
use crate::domain::entity::WhitelistEntry;
use crate::domain::repository::DocumentRepository;
use crate::error::PresaleResult;

pub struct AddWhitelistEntryUseCase<R>
where
    R: DocumentRepository,
{
    repo: Arc<R>,
}

impl<R> AddWhitelistEntryUseCase<R>
where
    R: DocumentRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, body: &Value) -> PresaleResult<WhitelistEntryId> {
        let entry = WhitelistEntry::from_payload(body)?;

        let id = self
            .repo
            .insert_one(Collection::WhitelistEntry, &entry.to_document())
            .await?;
        let entry_id = WhitelistEntryId::from_uuid(id);

        tracing::info!(
            whitelist_entry_id = %entry_id,
            network = entry.network.as_deref().unwrap_or("-"),
            "Whitelist entry added"
        );

        Ok(entry_id)
    }
}
