//! Domain Layer - Schemas, entities and repository traits
//!
//! This layer contains:
//! - Documents and collections (the store's vocabulary)
//! - Schema readers (strict payload validation, lenient stored-document shaping)
//! - Entities (Presale, WhitelistEntry, and the User / Product example schemas)
//! - Value objects (Email, Networks, timestamps)
//! - Repository traits (interfaces)

pub mod document;
pub mod entity;
pub mod repository;
pub mod schema;
pub mod shaping;
pub mod value_object;
