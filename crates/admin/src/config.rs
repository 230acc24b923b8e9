//! Backoffice configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `BACKOFFICE_STORE_PATH` - Store file for native front ends (default: backoffice-store.json)
//! - `BACKOFFICE_PAGE_SIZE` - Rows per list page (default: 10, must be > 0)
//! - `BACKOFFICE_LOG_FORMAT` - `text` or `json` (default: text)
//!
//! `RUST_LOG` is read by the front end's tracing subscriber, not here.

use std::path::PathBuf;

use thiserror::Error;

use crate::components::pagination::DEFAULT_PAGE_SIZE;

const DEFAULT_STORE_PATH: &str = "backoffice-store.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Log output format for front ends that install a subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "pretty" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("expected `text` or `json`, got `{other}`")),
        }
    }
}

/// Dashboard configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackofficeConfig {
    /// Path of the JSON store file.
    pub store_path: PathBuf,
    /// Rows per list page.
    pub page_size: usize,
    /// Log output format.
    pub log_format: LogFormat,
}

impl Default for BackofficeConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
            page_size: DEFAULT_PAGE_SIZE,
            log_format: LogFormat::Text,
        }
    }
}

impl BackofficeConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let store_path = lookup("BACKOFFICE_STORE_PATH")
            .filter(|path| !path.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_STORE_PATH), PathBuf::from);

        let page_size = match lookup("BACKOFFICE_PAGE_SIZE") {
            Some(raw) => parse_page_size(&raw)?,
            None => DEFAULT_PAGE_SIZE,
        };

        let log_format = match lookup("BACKOFFICE_LOG_FORMAT") {
            Some(raw) => raw.parse::<LogFormat>().map_err(|e| {
                ConfigError::InvalidEnvVar("BACKOFFICE_LOG_FORMAT".to_string(), e)
            })?,
            None => LogFormat::Text,
        };

        Ok(Self {
            store_path,
            page_size,
            log_format,
        })
    }

    /// Replace the page size, rejecting zero.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` for a zero page size.
    pub fn with_page_size(mut self, page_size: usize) -> Result<Self, ConfigError> {
        if page_size == 0 {
            return Err(zero_page_size());
        }
        self.page_size = page_size;
        Ok(self)
    }
}

fn parse_page_size(raw: &str) -> Result<usize, ConfigError> {
    let size = raw.trim().parse::<usize>().map_err(|e| {
        ConfigError::InvalidEnvVar("BACKOFFICE_PAGE_SIZE".to_string(), e.to_string())
    })?;
    if size == 0 {
        return Err(zero_page_size());
    }
    Ok(size)
}

fn zero_page_size() -> ConfigError {
    ConfigError::InvalidEnvVar(
        "BACKOFFICE_PAGE_SIZE".to_string(),
        "must be greater than 0".to_string(),
    )
}
