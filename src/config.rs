use crate::i18n::{parse_locale, Locale};
use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    // Content store
    pub content_base_url: String,
    pub content_extension: String,
    pub content_max_attempts: u32,

    // Locale
    pub default_locale: Locale,

    // Preferences (None keeps them in memory only)
    pub preferences_file: Option<PathBuf>,
}

impl Config {
    /// Load `.env` if present, then read the environment.
    pub fn load() -> Result<Self> {
        // Missing .env is fine; real deployments set variables directly
        let _ = dotenvy::dotenv();
        Self::from_env()
    }

    pub fn from_env() -> Result<Self> {
        let content_base_url = std::env::var("CONTENT_BASE_URL")
            .context("CONTENT_BASE_URL not set")?
            .trim()
            .trim_end_matches('/')
            .to_string();

        if content_base_url.is_empty() {
            anyhow::bail!("CONTENT_BASE_URL is empty");
        }

        Ok(Self {
            content_base_url,
            content_extension: std::env::var("CONTENT_EXTENSION")
                .ok()
                .map(|v| v.trim().trim_start_matches('.').to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| "mdx".to_string()),
            content_max_attempts: std::env::var("CONTENT_MAX_ATTEMPTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|&n: &u32| n >= 1)
                .unwrap_or(3),

            // Unsupported values fall back like any other locale input
            default_locale: parse_locale(std::env::var("DEFAULT_LOCALE").ok()),

            preferences_file: std::env::var("PREFERENCES_FILE")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
        })
    }
}
