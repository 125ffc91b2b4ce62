//! HTTP Handlers

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, header};
use serde_json::Value;
use std::sync::Arc;

use crate::application::config::PresaleConfig;
use crate::application::{
    AddWhitelistEntryUseCase, CreatePresaleUseCase, DiagnosticsUseCase, ListPresalesUseCase,
};
use crate::domain::repository::DocumentRepository;
use crate::error::{PresaleError, PresaleResult};
use crate::presentation::dto::{
    CreatedResponse, DiagnosticsResponse, PresaleResponse, ROOT_MESSAGE, RootResponse,
};

/// Shared state for presale handlers
#[derive(Clone)]
pub struct PresaleAppState<R>
where
    R: DocumentRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<PresaleConfig>,
}

/// GET /
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: ROOT_MESSAGE,
    })
}

/// GET /test
pub async fn diagnostics<R>(State(state): State<PresaleAppState<R>>) -> Json<DiagnosticsResponse>
where
    R: DocumentRepository + Clone + Send + Sync + 'static,
{
    let use_case = DiagnosticsUseCase::new(state.repo.clone(), state.config.clone());

    Json(use_case.execute().await.into())
}

/// POST /api/presales
pub async fn create_presale<R>(
    State(state): State<PresaleAppState<R>>,
    headers: HeaderMap,
    body: Bytes,
) -> PresaleResult<Json<CreatedResponse>>
where
    R: DocumentRepository + Clone + Send + Sync + 'static,
{
    let body = json_body(&headers, &body)?;

    let use_case = CreatePresaleUseCase::new(state.repo.clone());
    let id = use_case.execute(&body).await?;

    Ok(Json(CreatedResponse { id: id.to_string() }))
}

/// GET /api/presales
pub async fn list_presales<R>(
    State(state): State<PresaleAppState<R>>,
) -> PresaleResult<Json<Vec<PresaleResponse>>>
where
    R: DocumentRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListPresalesUseCase::new(state.repo.clone());
    let presales = use_case.execute().await?;

    Ok(Json(presales.into_iter().map(PresaleResponse::from).collect()))
}

/// POST /api/whitelist
pub async fn add_whitelist_entry<R>(
    State(state): State<PresaleAppState<R>>,
    headers: HeaderMap,
    body: Bytes,
) -> PresaleResult<Json<CreatedResponse>>
where
    R: DocumentRepository + Clone + Send + Sync + 'static,
{
    let body = json_body(&headers, &body)?;

    let use_case = AddWhitelistEntryUseCase::new(state.repo.clone());
    let id = use_case.execute(&body).await?;

    Ok(Json(CreatedResponse { id: id.to_string() }))
}

/// Bodies without a `Content-Type` are read as JSON; an empty body reads as `null`
fn json_body(headers: &HeaderMap, body: &Bytes) -> PresaleResult<Value> {
    let declared_other = headers
        .get(header::CONTENT_TYPE)
        .is_some_and(|value| !is_json(value.to_str().unwrap_or_default()));
    if declared_other {
        return Err(PresaleError::MalformedBody(
            "Expected request with `Content-Type: application/json`".to_string(),
        ));
    }

    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }

    serde_json::from_slice(body).map_err(|e| PresaleError::MalformedBody(e.to_string()))
}

fn is_json(content_type: &str) -> bool {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}
