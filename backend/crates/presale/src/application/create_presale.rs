//! Create Presale Use Case

use kernel::id::PresaleId;
use serde_json::Value;
use std::sync::Arc;

use crate::domain::document::Collection;
use crate::domain::entity::Presale;
use crate::domain::repository::DocumentRepository;
use crate::error::PresaleResult;

/// Create Presale Use Case
pub struct CreatePresaleUseCase<R>
where
    R: DocumentRepository,
{
    repo: Arc<R>,
}

impl<R> CreatePresaleUseCase<R>
where
    R: DocumentRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Validate the body, then store it. Nothing is written when validation fails.
    pub async fn execute(&self, body: &Value) -> PresaleResult<PresaleId> {
        let presale = Presale::from_payload(body)?;

        let id = self
            .repo
            .insert_one(Collection::Presale, &presale.to_document())
            .await?;
        let presale_id = PresaleId::from_uuid(id);

        tracing::info!(
            presale_id = %presale_id,
            symbol = %presale.symbol,
            "Presale created"
        );

        Ok(presale_id)
    }
}
