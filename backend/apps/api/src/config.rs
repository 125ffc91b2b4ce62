//! Server configuration loaded from the environment

use anyhow::Context;
use std::env;
use std::fmt::Display;
use std::str::FromStr;

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    /// Absent means the server runs without a store
    pub database_url: Option<String>,
    /// Only reported by the diagnostics endpoint; the URL selects the database
    pub database_name: Option<String>,
    pub max_connections: u32,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        Ok(Self {
            port: try_load(&lookup, "PORT", DEFAULT_PORT)?,
            database_url: non_empty(lookup("DATABASE_URL")),
            database_name: non_empty(lookup("DATABASE_NAME")),
            max_connections: try_load(
                &lookup,
                "DATABASE_MAX_CONNECTIONS",
                DEFAULT_MAX_CONNECTIONS,
            )?,
        })
    }
}

fn try_load<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr + Display,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("Invalid {key} value: {raw:?}")),
        None => {
            tracing::info!("{key} not set, using default: {default}");
            Ok(default)
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
