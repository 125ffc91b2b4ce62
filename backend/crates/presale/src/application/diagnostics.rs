//! Diagnostics Use Case
//!
//! Checks the store and reports what it finds. Never fails: every fault ends
//! up as a status string in the report.

use std::sync::Arc;

use crate::application::config::PresaleConfig;
use crate::domain::repository::DocumentRepository;
use crate::error::PresaleError;

pub const BACKEND_RUNNING: &str = "✅ Running";
pub const DATABASE_NOT_AVAILABLE: &str = "❌ Not Available";
pub const DATABASE_WORKING: &str = "✅ Connected & Working";
pub const CONNECTED: &str = "Connected";
pub const NOT_CONNECTED: &str = "Not Connected";
pub const SETTING_PRESENT: &str = "✅ Set";
pub const SETTING_ABSENT: &str = "❌ Not Set";

/// Result of probing the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticsReport {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

pub struct DiagnosticsUseCase<R>
where
    R: DocumentRepository,
{
    repo: Arc<R>,
    config: Arc<PresaleConfig>,
}

impl<R> DiagnosticsUseCase<R>
where
    R: DocumentRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<PresaleConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self) -> DiagnosticsReport {
        let mut report = DiagnosticsReport {
            backend: BACKEND_RUNNING.to_string(),
            database: DATABASE_NOT_AVAILABLE.to_string(),
            database_url: setting(self.config.database_url_set),
            database_name: setting(self.config.database_name_set),
            connection_status: NOT_CONNECTED.to_string(),
            collections: Vec::new(),
        };

        match self.repo.list_collection_names().await {
            Ok(names) => {
                report.database = DATABASE_WORKING.to_string();
                report.connection_status = CONNECTED.to_string();
                report.collections = names
                    .into_iter()
                    .take(self.config.collection_preview_limit)
                    .collect();
            }
            Err(PresaleError::StorageUnavailable) => {}
            Err(e) => {
                tracing::warn!(error = %e, "Diagnostics store check failed");
                let message: String = e
                    .to_string()
                    .chars()
                    .take(self.config.error_preview_chars)
                    .collect();
                report.database = format!("⚠️  Connected but Error: {message}");
                report.connection_status = CONNECTED.to_string();
            }
        }

        report
    }
}

fn setting(present: bool) -> String {
    if present { SETTING_PRESENT } else { SETTING_ABSENT }.to_string()
}
