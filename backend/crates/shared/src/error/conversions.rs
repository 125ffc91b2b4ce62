//! Error conversions - HTTP rendering of [`AppError`]
//!
//! Every error leaves the service as an RFC 7807 problem document.

use super::app_error::AppError;

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = problem_details(&self);

        (status, Json(body)).into_response()
    }
}

/// RFC 7807 Problem Details body, plus `errors` for field violations
pub fn problem_details(err: &AppError) -> serde_json::Value {
    let mut body = serde_json::json!({
        "type": format!("https://httpstatuses.io/{}", err.status_code()),
        "title": err.kind().title(),
        "status": err.status_code(),
        "detail": err.detail(),
        "action": err.action(),
    });
    if !err.violations().is_empty() {
        body["errors"] = serde_json::json!(err.violations());
    }
    body
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationError;

    #[test]
    fn test_problem_details_plain() {
        let body = problem_details(&AppError::internal("connection refused"));
        assert_eq!(body["status"], 500);
        assert_eq!(body["title"], "Internal Server Error");
        assert_eq!(body["detail"], "connection refused");
        assert!(body.get("errors").is_none());
    }

    #[test]
    fn test_problem_details_with_violations() {
        let err: AppError = ValidationError::single("liquidity_percent", "out of range").into();
        let body = problem_details(&err);
        assert_eq!(body["status"], 422);
        assert_eq!(body["errors"][0]["field"], "liquidity_percent");
        assert_eq!(body["errors"][0]["reason"], "out of range");
    }

    #[cfg(feature = "axum")]
    #[test]
    fn test_into_response_status() {
        use axum::response::IntoResponse;

        let response = AppError::bad_request("Malformed JSON").into_response();
        assert_eq!(response.status(), axum::http::StatusCode::BAD_REQUEST);
    }
}
