/// Configuration management for Forum Service
///
/// Loads configuration from environment variables.
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application settings
    pub app: AppConfig,
    /// Translation provider configuration
    pub translation: TranslationConfig,
}

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment (dev, staging, prod)
    pub env: String,
    /// Log output format
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => anyhow::bail!("unknown log format: {}", other),
        }
    }
}

/// Translation provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationConfig {
    /// Base URL of the LibreTranslate-compatible endpoint
    pub base_url: String,
    /// API key, when the provider requires one
    pub api_key: Option<String>,
    /// Source language sent with every request ("auto" lets the provider detect it)
    #[serde(default = "default_source_language")]
    pub source_language: String,
    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

// Default values
fn default_source_language() -> String {
    "auto".to_string()
}

fn default_timeout_ms() -> u64 {
    5000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let log_format = match std::env::var("LOG_FORMAT") {
            Ok(value) => value.parse().context("Invalid LOG_FORMAT")?,
            Err(_) => LogFormat::Pretty,
        };

        let app = AppConfig {
            env: std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
            log_format,
        };

        let timeout_ms = match std::env::var("TRANSLATION_TIMEOUT_MS") {
            Ok(value) => value
                .parse()
                .with_context(|| format!("Invalid TRANSLATION_TIMEOUT_MS: {}", value))?,
            Err(_) => default_timeout_ms(),
        };

        let translation = TranslationConfig {
            base_url: std::env::var("TRANSLATION_API_URL")
                .unwrap_or_else(|_| "http://localhost:5000".to_string()),
            api_key: std::env::var("TRANSLATION_API_KEY")
                .ok()
                .filter(|key| !key.is_empty()),
            source_language: std::env::var("TRANSLATION_SOURCE_LANG")
                .unwrap_or_else(|_| default_source_language()),
            timeout_ms,
        };

        Ok(Config { app, translation })
    }
}
