//! Application Layer - Use Cases
//!
//! Orchestrates schema validation, the document store and output shaping.

pub mod add_whitelist_entry;
pub mod config;
pub mod create_presale;
pub mod diagnostics;
pub mod list_presales;

pub use add_whitelist_entry::AddWhitelistEntryUseCase;
pub use create_presale::CreatePresaleUseCase;
pub use diagnostics::{DiagnosticsReport, DiagnosticsUseCase};
pub use list_presales::ListPresalesUseCase;
