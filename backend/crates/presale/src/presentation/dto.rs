//! API DTOs (Data Transfer Objects)
//!
//! Field names on the wire are snake_case.
//!
//! Only responses are typed here. Request bodies stay `serde_json::Value` and
//! are read by `domain::schema::Payload`, which reports every failing field.

use serde::Serialize;

use crate::application::DiagnosticsReport;
use crate::domain::shaping::PresaleView;

pub const ROOT_MESSAGE: &str = "Crypto Presale Backend Running";

/// Response for GET /
#[derive(Debug, Clone, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
}

/// Response for POST /api/presales and POST /api/whitelist
#[derive(Debug, Clone, Serialize)]
pub struct CreatedResponse {
    pub id: String,
}

/// One element of GET /api/presales
#[derive(Debug, Clone, Serialize)]
pub struct PresaleResponse {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub price_usd: f64,
    pub soft_cap_usd: f64,
    pub hard_cap_usd: f64,
    pub token_supply: u64,
    pub liquidity_percent: f64,
    pub networks: Vec<String>,
    pub start_at: Option<String>,
    pub end_at: Option<String>,
    pub vesting: Option<String>,
}

impl From<PresaleView> for PresaleResponse {
    fn from(view: PresaleView) -> Self {
        Self {
            id: view.id,
            name: view.name,
            symbol: view.symbol,
            price_usd: view.price_usd,
            soft_cap_usd: view.soft_cap_usd,
            hard_cap_usd: view.hard_cap_usd,
            token_supply: view.token_supply,
            liquidity_percent: view.liquidity_percent,
            networks: view.networks,
            start_at: view.start_at,
            end_at: view.end_at,
            vesting: view.vesting,
        }
    }
}

/// Response for GET /test
#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticsResponse {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

impl From<DiagnosticsReport> for DiagnosticsResponse {
    fn from(report: DiagnosticsReport) -> Self {
        Self {
            backend: report.backend,
            database: report.database,
            database_url: report.database_url,
            database_name: report.database_name,
            connection_status: report.connection_status,
            collections: report.collections,
        }
    }
}
