//! Runtime configuration for the client.
//!
//! Values come from the process environment. Desktop builds load a `.env`
//! file first; every build falls back to the bundled `assets/config.env`.
//! A variable that is already set is never overridden.

use anyhow::{Context, Result};
use std::time::Duration;

/// Bundled config for web and mobile builds
const BUNDLED_CONFIG: &str = include_str!("../assets/config.env");

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
pub const DEFAULT_CHAT_URL: &str = "http://localhost:8080";
pub const DEFAULT_MAX_UPLOAD_MB: u64 = 100;
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_MODEL_NAME: &str = "phi3:mini";
pub const DEFAULT_EMBEDDING_MODEL: &str = "sentence-transformers/all-MiniLM-L6-v2";

#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    pub backend_url: String,
    pub chat_url: String,
    pub max_upload_mb: u64,
    pub request_timeout: Duration,
    pub model_name: String,
    pub embedding_model: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            chat_url: DEFAULT_CHAT_URL.to_string(),
            max_upload_mb: DEFAULT_MAX_UPLOAD_MB,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            model_name: DEFAULT_MODEL_NAME.to_string(),
            embedding_model: DEFAULT_EMBEDDING_MODEL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();
        let text = |key: &str, fallback: String| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .unwrap_or(fallback)
        };

        let max_upload_mb = match lookup("PDFCHAT_MAX_UPLOAD_MB") {
            Some(raw) => parse_positive(&raw).context("PDFCHAT_MAX_UPLOAD_MB")?,
            None => defaults.max_upload_mb,
        };
        let request_timeout = match lookup("PDFCHAT_TIMEOUT_SECS") {
            Some(raw) => Duration::from_secs(parse_positive(&raw).context("PDFCHAT_TIMEOUT_SECS")?),
            None => defaults.request_timeout,
        };

        Ok(Self {
            backend_url: text("PDFCHAT_BACKEND_URL", defaults.backend_url)
                .trim_end_matches('/')
                .to_string(),
            chat_url: text("PDFCHAT_CHAT_URL", defaults.chat_url),
            max_upload_mb,
            request_timeout,
            model_name: text("PDFCHAT_MODEL_NAME", defaults.model_name),
            embedding_model: text("PDFCHAT_EMBEDDING_MODEL", defaults.embedding_model),
        })
    }

    pub fn upload_url(&self) -> String {
        format!("{}/upload", self.backend_url)
    }

    pub fn chat_endpoint(&self) -> String {
        format!("{}/chat", self.backend_url)
    }
}

fn parse_positive(raw: &str) -> Result<u64> {
    let value: u64 = raw
        .trim()
        .parse()
        .with_context(|| format!("expected a positive integer, got {raw:?}"))?;
    if value == 0 {
        anyhow::bail!("value must be greater than zero");
    }
    Ok(value)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_environment() {
    // First try to load from .env file (desktop dev)
    if dotenvy::dotenv().is_ok() {
        return;
    }

    // Fall back to bundled config (mobile builds)
    load_bundled_config();
}

#[cfg(target_arch = "wasm32")]
pub fn load_environment() {
    load_bundled_config();
}

fn load_bundled_config() {
    for (key, value) in parse_env_lines(BUNDLED_CONFIG) {
        // Only set if not already set (allow env override)
        if std::env::var(key).is_err() {
            // SAFETY: We're setting env vars at startup before any threads are spawned
            unsafe {
                std::env::set_var(key, value);
            }
        }
    }
}

/// Parse `KEY=VALUE` lines, skipping comments and blanks
pub fn parse_env_lines(source: &str) -> Vec<(&str, &str)> {
    source
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim(), value.trim()))
        .filter(|(key, _)| !key.is_empty())
        .collect()
}
