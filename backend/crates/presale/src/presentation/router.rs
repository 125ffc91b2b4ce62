//! Presale Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::PresaleConfig;
use crate::domain::repository::DocumentRepository;
use crate::infra::postgres::PgDocumentStore;
use crate::presentation::handlers::{self, PresaleAppState};

/// Create the presale router backed by PostgreSQL
///
/// `None` serves every route, but storage calls fail with "Database not available".
pub fn presale_router(store: Option<PgDocumentStore>, config: PresaleConfig) -> Router {
    presale_router_generic(store, config)
}

/// Create a presale router for any repository implementation
pub fn presale_router_generic<R>(repo: R, config: PresaleConfig) -> Router
where
    R: DocumentRepository + Clone + Send + Sync + 'static,
{
    let state = PresaleAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route("/", get(handlers::root))
        .route("/test", get(handlers::diagnostics::<R>))
        .route(
            "/api/presales",
            get(handlers::list_presales::<R>).post(handlers::create_presale::<R>),
        )
        .route("/api/whitelist", post(handlers::add_whitelist_entry::<R>))
        .with_state(state)
}
