//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required (for remote calls)
//! - `JOLLIBEE_API_BASE_URL` - Backend base URL, including any path prefix
//!   (e.g. `https://ordering.example.com/api`)
//!
//! ## Optional
//! - `JOLLIBEE_STORE_PATH` - Local store file (default: `jollibee-store.json`)

use std::path::PathBuf;

use thiserror::Error;
use url::Url;

const API_BASE_URL_VAR: &str = "JOLLIBEE_API_BASE_URL";
const STORE_PATH_VAR: &str = "JOLLIBEE_STORE_PATH";
const DEFAULT_STORE_PATH: &str = "jollibee-store.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend base URL. Only remote commands need it.
    pub api_base_url: Option<Url>,
    /// Local store file.
    pub store_path: PathBuf,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is honored.
    ///
    /// # Errors
    ///
    /// Returns error if a variable is set but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns error if a variable is set but invalid.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base_url = lookup(API_BASE_URL_VAR)
            .filter(|value| !value.trim().is_empty())
            .map(|value| {
                Url::parse(value.trim()).map_err(|e| {
                    ConfigError::InvalidEnvVar(API_BASE_URL_VAR.to_string(), e.to_string())
                })
            })
            .transpose()?;

        let store_path = lookup(STORE_PATH_VAR)
            .filter(|value| !value.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_STORE_PATH), PathBuf::from);

        Ok(Self {
            api_base_url,
            store_path,
        })
    }

    /// The backend base URL, required for any remote call.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] if it was not configured.
    pub fn require_api_base_url(&self) -> Result<&Url, ConfigError> {
        self.api_base_url
            .as_ref()
            .ok_or_else(|| ConfigError::MissingEnvVar(API_BASE_URL_VAR.to_string()))
    }
}
