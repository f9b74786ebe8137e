use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Client configuration loaded from environment variables, with CLI overrides
/// applied on top by `main`.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    /// `None` disables the per-request timeout.
    pub request_timeout: Option<Duration>,
    pub rust_log: String,
}

impl Config {
    /// `api_url_override` lets `--api-url` stand in for a missing `INTERVIEW_API_URL`.
    pub fn from_env(api_url_override: Option<String>) -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let api_base_url = match api_url_override {
            Some(url) => url,
            None => require_env("INTERVIEW_API_URL")?,
        };

        let timeout_secs = match std::env::var("REQUEST_TIMEOUT_SECS") {
            Ok(raw) => parse_timeout(&raw)?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Config {
            api_base_url: normalize_base_url(&api_base_url),
            request_timeout: timeout_from_secs(timeout_secs),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout = timeout_from_secs(secs);
        self
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_timeout(raw: &str) -> Result<u64> {
    raw.trim()
        .parse::<u64>()
        .context("REQUEST_TIMEOUT_SECS must be a whole number of seconds")
}

fn timeout_from_secs(secs: u64) -> Option<Duration> {
    (secs > 0).then(|| Duration::from_secs(secs))
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_url_strips_trailing_slashes() {
        assert_eq!(
            normalize_base_url("http://localhost:5000//"),
            "http://localhost:5000"
        );
        assert_eq!(normalize_base_url(" http://api "), "http://api");
    }

    #[test]
    fn test_zero_timeout_disables_it() {
        assert_eq!(timeout_from_secs(0), None);
        assert_eq!(timeout_from_secs(30), Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_parse_timeout_rejects_garbage() {
        assert!(parse_timeout("ten").is_err());
        assert_eq!(parse_timeout(" 45 ").unwrap(), 45);
    }

    #[test]
    fn test_with_timeout_secs_overrides() {
        let config = Config {
            api_base_url: "http://api".to_string(),
            request_timeout: None,
            rust_log: "info".to_string(),
        }
        .with_timeout_secs(5);
        assert_eq!(config.request_timeout, Some(Duration::from_secs(5)));
    }
}
