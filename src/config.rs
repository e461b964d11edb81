use anyhow::{Context, Result};

/// Application configuration, loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    // ── Server ──────────────────────────────────────────────────────────
    pub host: String,
    pub port: u16,
    /// Base URL of this service, used when building redirect targets.
    pub base_url: String,
    /// Public site URL, shown in the embed documentation section.
    pub site_url: String,

    // ── Database (PostgreSQL options store) ─────────────────────────────
    pub database_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Config {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8430".into())
                .parse()
                .context("Invalid PORT")?,
            base_url: std::env::var("BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8430".into()),
            site_url: std::env::var("SITE_URL")
                .unwrap_or_else(|_| "http://localhost".into()),

            database_url: std::env::var("DATABASE_URL")
                .context("DATABASE_URL is required (PostgreSQL connection string)")?,
        })
    }

    /// Absolute URL of the settings page.
    pub fn settings_url(&self) -> String {
        format!("{}{}", self.base_url, crate::admin::SETTINGS_PATH)
    }
}
