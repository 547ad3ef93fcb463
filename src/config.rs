use anyhow::{bail, Result};
use dotenvy::dotenv;
use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
}

impl Config {
    /// Load configuration from the environment, reading `.env` if present
    pub fn from_env() -> Result<Self> {
        let _ = dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build and validate configuration from any key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let Some(database_url) = lookup("DB_CONNECTION") else {
            bail!("DB_CONNECTION must be set");
        };

        let database_url = database_url.trim().to_string();
        if database_url.is_empty() {
            bail!("DB_CONNECTION must not be empty");
        }
        if !database_url.starts_with("postgres://") && !database_url.starts_with("postgresql://") {
            bail!("DB_CONNECTION must be a postgres:// connection string");
        }

        Ok(Self { database_url })
    }
}
