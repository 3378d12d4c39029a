//! Catalog configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `PARTSHUB_API_URL` - Base URL of the parts API (default: `http://localhost:3000/api`)
//! - `PARTSHUB_PAGE_SIZE` - Page size for the internal bulk fetch, 1-100 (default: 100)
//! - `PARTSHUB_ITEMS_PER_PAGE` - Catalog view page size (default: 9)

use thiserror::Error;
use url::Url;

use crate::state::DEFAULT_ITEMS_PER_PAGE;

const DEFAULT_API_URL: &str = "http://localhost:3000/api";

/// Maximum `limit` the listing endpoint accepts per request.
pub const MAX_FETCH_PAGE_SIZE: u32 = 100;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Catalog client configuration.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Base URL of the parts API (e.g., `http://localhost:3000/api`).
    pub api_base_url: Url,
    /// Page size used by the internal bulk fetch loop.
    pub fetch_page_size: u32,
    /// Page size of the catalog view, fixed per session.
    pub items_per_page: usize,
}

impl Default for CatalogConfig {
    // DEFAULT_API_URL is a valid URL; parsing cannot fail.
    #[allow(clippy::unwrap_used)]
    fn default() -> Self {
        Self {
            api_base_url: Url::parse(DEFAULT_API_URL).unwrap(),
            fetch_page_size: MAX_FETCH_PAGE_SIZE,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
        }
    }
}

impl CatalogConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but fails to parse
    /// or validate.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_values(
            &get_env_or_default("PARTSHUB_API_URL", DEFAULT_API_URL),
            &get_env_or_default("PARTSHUB_PAGE_SIZE", "100"),
            &get_env_or_default("PARTSHUB_ITEMS_PER_PAGE", "9"),
        )
    }

    fn from_values(
        api_base_url: &str,
        fetch_page_size: &str,
        items_per_page: &str,
    ) -> Result<Self, ConfigError> {
        let api_base_url = Url::parse(api_base_url).map_err(|e| {
            ConfigError::InvalidEnvVar("PARTSHUB_API_URL".to_string(), e.to_string())
        })?;

        let fetch_page_size = fetch_page_size.parse::<u32>().map_err(|e| {
            ConfigError::InvalidEnvVar("PARTSHUB_PAGE_SIZE".to_string(), e.to_string())
        })?;
        if fetch_page_size == 0 || fetch_page_size > MAX_FETCH_PAGE_SIZE {
            return Err(ConfigError::InvalidEnvVar(
                "PARTSHUB_PAGE_SIZE".to_string(),
                format!("must be between 1 and {MAX_FETCH_PAGE_SIZE} (got {fetch_page_size})"),
            ));
        }

        let items_per_page = items_per_page.parse::<usize>().map_err(|e| {
            ConfigError::InvalidEnvVar("PARTSHUB_ITEMS_PER_PAGE".to_string(), e.to_string())
        })?;
        if items_per_page == 0 {
            return Err(ConfigError::InvalidEnvVar(
                "PARTSHUB_ITEMS_PER_PAGE".to_string(),
                "must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            api_base_url,
            fetch_page_size,
            items_per_page,
        })
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
