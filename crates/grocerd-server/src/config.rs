// ABOUTME: Configuration loading and validation for the grocerd server.
// ABOUTME: Reads environment variables with defaults and loads the optional Basic auth credentials file.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use grocerd_core::Credentials;
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("GROCERD_BIND is not a valid socket address: {0}")]
    InvalidBind(String),

    #[error("failed to read credentials file {path}: {source}")]
    CredentialsRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("credentials file {path} is not valid JSON: {source}")]
    CredentialsParse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct GrocerdConfig {
    pub bind: SocketAddr,
    pub data_path: PathBuf,
    pub credentials_path: Option<PathBuf>,
}

impl GrocerdConfig {
    /// Load configuration from environment variables with sensible defaults.
    ///
    /// Environment variables:
    /// - GROCERD_BIND: socket address to bind (default: 127.0.0.1:3333)
    /// - GROCERD_DATA: grocery list JSON file (default: ./grocery.json)
    /// - GROCERD_CREDENTIALS: Basic auth credentials file (optional; auth is
    ///   disabled when unset)
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_str =
            std::env::var("GROCERD_BIND").unwrap_or_else(|_| "127.0.0.1:3333".to_string());
        let bind: SocketAddr = bind_str
            .parse()
            .map_err(|_| ConfigError::InvalidBind(bind_str))?;

        let data_path = std::env::var("GROCERD_DATA")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./grocery.json"));

        let credentials_path = std::env::var("GROCERD_CREDENTIALS")
            .ok()
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            bind,
            data_path,
            credentials_path,
        })
    }
}

/// Load the expected Basic auth credentials from a JSON side file.
/// A missing or malformed file is an error: a server configured for auth
/// must not start without the credentials it is supposed to enforce.
pub fn load_credentials(path: &Path) -> Result<Credentials, ConfigError> {
    let contents =
        std::fs::read_to_string(path).map_err(|source| ConfigError::CredentialsRead {
            path: path.to_path_buf(),
            source,
        })?;
    let credentials =
        serde_json::from_str(&contents).map_err(|source| ConfigError::CredentialsParse {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(credentials)
}
