//! Application Configuration
//!
//! Configuration for the presale application layer.

/// Presale application configuration
#[derive(Debug, Clone)]
pub struct PresaleConfig {
    /// How many collection names the diagnostics report lists
    pub collection_preview_limit: usize,
    /// Store error messages in the diagnostics report are cut to this many chars
    pub error_preview_chars: usize,
    /// Whether `DATABASE_URL` was present at startup
    pub database_url_set: bool,
    /// Whether `DATABASE_NAME` was present at startup
    pub database_name_set: bool,
}

impl Default for PresaleConfig {
    fn default() -> Self {
        Self {
            collection_preview_limit: 10,
            error_preview_chars: 50,
            database_url_set: false,
            database_name_set: false,
        }
    }
}

impl PresaleConfig {
    /// Config reporting which connection settings the environment provided
    pub fn with_connection_settings(database_url_set: bool, database_name_set: bool) -> Self {
        Self {
            database_url_set,
            database_name_set,
            ..Self::default()
        }
    }
}
