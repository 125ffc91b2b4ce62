//! Infrastructure Layer - Document store implementations
//!
//! - `postgres` - JSONB documents in PostgreSQL (production)
//! - `memory` - process-local store for tests and embedding

pub mod memory;
pub mod postgres;
