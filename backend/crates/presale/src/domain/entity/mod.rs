//! Domain Entities
//!
//! Validated records. Each is built from an untyped payload and written to
//! the store as a document.

pub mod catalog;
pub mod presale;
pub mod whitelist_entry;

pub use presale::Presale;
pub use whitelist_entry::WhitelistEntry;
