//! Presale Error Types
//!
//! Presale-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use kernel::validation::ValidationError;
use thiserror::Error;
use uuid::Uuid;

/// Presale-specific result type alias
pub type PresaleResult<T> = Result<T, PresaleError>;

/// Presale-specific error variants
///
/// Client mistakes (`Validation`, `MalformedBody`) map to 4xx. Everything the
/// store causes maps to 500 and carries the underlying message.
#[derive(Debug, Error)]
pub enum PresaleError {
    /// Payload failed schema validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Body is not parseable JSON
    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    /// No store configured
    #[error("Database not available")]
    StorageUnavailable,

    /// Store rejected the operation or is unreachable
    #[error("{0}")]
    Database(#[from] sqlx::Error),

    /// Schema migrations could not be applied
    #[error("{0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Non-SQL store failure
    #[error("{0}")]
    Storage(String),

    /// Stored document cannot be coerced into the output schema
    #[error("Document {id} has an unreadable `{field}`: {reason}")]
    Shaping {
        id: Uuid,
        field: &'static str,
        reason: String,
    },
}

impl PresaleError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            PresaleError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            PresaleError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            PresaleError::StorageUnavailable
            | PresaleError::Database(_)
            | PresaleError::Migration(_)
            | PresaleError::Storage(_)
            | PresaleError::Shaping { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            PresaleError::Validation(_) => ErrorKind::UnprocessableEntity,
            PresaleError::MalformedBody(_) => ErrorKind::BadRequest,
            PresaleError::StorageUnavailable
            | PresaleError::Database(_)
            | PresaleError::Migration(_)
            | PresaleError::Storage(_)
            | PresaleError::Shaping { .. } => ErrorKind::InternalServerError,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            PresaleError::Database(e) => {
                tracing::error!(error = %e, "Presale database error");
            }
            PresaleError::Migration(e) => {
                tracing::error!(error = %e, "Presale schema migration failed");
            }
            PresaleError::Storage(msg) => {
                tracing::error!(message = %msg, "Presale storage error");
            }
            PresaleError::StorageUnavailable => {
                tracing::error!("Presale store not configured");
            }
            PresaleError::Shaping { id, field, reason } => {
                tracing::error!(
                    document_id = %id,
                    field = *field,
                    reason = %reason,
                    "Unreadable stored document"
                );
            }
            PresaleError::Validation(e) => {
                tracing::debug!(error = %e, "Presale payload rejected");
            }
            PresaleError::MalformedBody(msg) => {
                tracing::debug!(message = %msg, "Malformed request body");
            }
        }
    }
}

impl From<PresaleError> for AppError {
    fn from(err: PresaleError) -> Self {
        match err {
            PresaleError::Validation(e) => e.into(),
            PresaleError::MalformedBody(msg) => {
                AppError::bad_request(format!("Malformed request body: {msg}"))
                    .with_action("Send a JSON object")
            }
            other => {
                let kind = other.kind();
                let message = other.to_string();
                AppError::new(kind, message).with_source(other)
            }
        }
    }
}

impl IntoResponse for PresaleError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}
