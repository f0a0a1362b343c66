//! Subcommand implementations.

pub mod accounts;
pub mod menu;
pub mod orders;
pub mod seed;

use jollibee_client::{ApiError, ClientConfig, ConfigError, JollibeeClient, StoreError};
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Configuration is missing or invalid.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The backend call failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The local store could not be read or written.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// An input file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// An input file or output value is not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Build a backend client from the configured base URL.
fn remote_client(config: &ClientConfig) -> Result<JollibeeClient, CommandError> {
    let base_url = config.require_api_base_url()?;
    Ok(JollibeeClient::new(base_url.as_str())?)
}

#[allow(clippy::print_stdout)]
fn print_json(value: &Value) -> Result<(), CommandError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
