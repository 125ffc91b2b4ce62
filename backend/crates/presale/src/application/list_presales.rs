//! List Presales Use Case

use std::sync::Arc;

use crate::domain::document::Collection;
use crate::domain::repository::DocumentRepository;
use crate::domain::shaping::PresaleView;
use crate::error::PresaleResult;

/// List Presales Use Case
///
/// Returns the whole collection; there is no paging.
pub struct ListPresalesUseCase<R>
where
    R: DocumentRepository,
{
    repo: Arc<R>,
}

impl<R> ListPresalesUseCase<R>
where
    R: DocumentRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> PresaleResult<Vec<PresaleView>> {
        let documents = self.repo.find_all(Collection::Presale).await?;

        let presales = documents
            .iter()
            .map(PresaleView::from_document)
            .collect::<PresaleResult<Vec<_>>>()?;

        tracing::debug!(count = presales.len(), "Listed presales");

        Ok(presales)
    }
}
