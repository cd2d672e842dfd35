use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables once at
/// process start and passed by reference into the components that need it.
/// Credentials are never hard-coded and never re-read after startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// API key for the Text Generation Service.
    pub anthropic_api_key: String,
    /// Browsing identity used to authenticate the profile session.
    pub linkedin_username: String,
    pub linkedin_password: String,
    /// Timeout for each Text Generation call.
    pub llm_timeout: Duration,
    /// Timeout for each search request and profile page fetch.
    pub http_timeout: Duration,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            linkedin_username: require_env("LINKEDIN_USERNAME")?,
            linkedin_password: require_env("LINKEDIN_PASSWORD")?,
            llm_timeout: duration_env("LLM_TIMEOUT_SECS", 120)?,
            http_timeout: duration_env("HTTP_TIMEOUT_SECS", 30)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn duration_env(key: &str, default_secs: u64) -> Result<Duration> {
    let secs = match std::env::var(key) {
        Ok(v) => v
            .parse::<u64>()
            .with_context(|| format!("{key} must be a number of seconds"))?,
        Err(_) => default_secs,
    };
    Ok(Duration::from_secs(secs))
}
