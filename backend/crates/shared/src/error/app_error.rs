//! Application Error
//!
//! [`AppError`] is what leaves a handler. Domain crates keep their own error
//! enums and convert at the HTTP boundary; the conversion decides the kind,
//! the client-facing detail and, for validation failures, the field list.

use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use super::kind::ErrorKind;
use crate::validation::{FieldViolation, ValidationError};

/// Error rendered as a problem document
///
/// ```rust
/// use kernel::error::app_error::AppError;
///
/// let err = AppError::bad_request("Body is not valid JSON").with_action("Send a JSON object");
/// assert_eq!(err.status_code(), 400);
/// ```
pub struct AppError {
    kind: ErrorKind,
    detail: Cow<'static, str>,
    action: Option<Cow<'static, str>>,
    violations: Vec<FieldViolation>,
    /// Kept for logs, never rendered
    source: Option<Box<dyn Error + Send + Sync + 'static>>,
}

impl AppError {
    pub fn new(kind: ErrorKind, detail: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            detail: detail.into(),
            action: None,
            violations: Vec::new(),
            source: None,
        }
    }

    pub fn bad_request(detail: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::BadRequest, detail)
    }

    pub fn internal(detail: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::InternalServerError, detail)
    }

    /// Hint telling the client what to do next
    pub fn with_action(mut self, action: impl Into<Cow<'static, str>>) -> Self {
        self.action = Some(action.into());
        self
    }

    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }

    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }
}

/// 422 carrying every violated field
impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        let mut app = AppError::new(ErrorKind::UnprocessableEntity, err.to_string())
            .with_action("Correct the listed fields and resend");
        app.violations = err.into_violations();
        app
    }
}

impl fmt::Debug for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppError")
            .field("kind", &self.kind)
            .field("detail", &self.detail)
            .field("violations", &self.violations)
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.detail)
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn Error + 'static))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let err = AppError::internal("Database not available");
        assert_eq!(err.kind(), ErrorKind::InternalServerError);
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.detail(), "Database not available");
        assert!(err.action().is_none());
        assert!(err.violations().is_empty());

        assert_eq!(AppError::bad_request("bad").status_code(), 400);
    }

    #[test]
    fn test_from_validation_error() {
        let err: AppError = ValidationError::single("email", "invalid email address").into();
        assert_eq!(err.status_code(), 422);
        assert_eq!(err.violations().len(), 1);
        assert_eq!(err.violations()[0].field, "email");
        assert!(err.detail().contains("email"));
        assert!(err.action().is_some());
    }

    #[test]
    fn test_source_is_kept() {
        let io_err = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = AppError::internal("refused").with_source(io_err);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_display() {
        let err = AppError::internal("Database not available");
        assert_eq!(err.to_string(), "[Internal Server Error] Database not available");
    }
}
