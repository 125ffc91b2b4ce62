//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but request-level
//! errors go through `presale::PresaleError`.

mod config;

use axum::Router;
use presale::{PgDocumentStore, PresaleConfig, presale_router};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,presale=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;

    let store = match &config.database_url {
        Some(url) => Some(connect_store(url, config.max_connections).await?),
        None => {
            tracing::warn!("DATABASE_URL not set, serving without a database");
            None
        }
    };

    let presale_config = PresaleConfig::with_connection_settings(
        config.database_url.is_some(),
        config.database_name.is_some(),
    );

    // Any origin, method and header
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    let app = Router::new()
        .merge(presale_router(store, presale_config))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// The pool connects on first use, so an unreachable server does not stop startup.
/// A failed migration here is retried by the store on the next request.
async fn connect_store(url: &str, max_connections: u32) -> anyhow::Result<PgDocumentStore> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect_lazy(url)?;
    let store = PgDocumentStore::new(pool);

    if let Err(e) = store.migrate().await {
        tracing::warn!(error = %e, "Migrations failed, retrying on first request");
    }

    Ok(store)
}
