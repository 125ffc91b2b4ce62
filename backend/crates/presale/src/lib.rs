//! Presale Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Schemas, entities, document shaping, repository traits
//! - `application/` - Use cases
//! - `infra/` - Document store implementations (PostgreSQL, in-memory)
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Routes
//! - `GET /` - liveness message
//! - `GET /test` - store diagnostics, always 200
//! - `POST /api/presales`, `GET /api/presales`
//! - `POST /api/whitelist`
//!
//! Records are validated on the way in and shaped on the way out; the store
//! itself holds schemaless JSON documents.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::PresaleConfig;
pub use error::{PresaleError, PresaleResult};
pub use infra::memory::MemoryDocumentStore;
pub use infra::postgres::PgDocumentStore;
pub use presentation::router::{presale_router, presale_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{app_error::AppError, kind::ErrorKind};
