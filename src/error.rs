//! Error types for the directory client and configuration

use thiserror::Error;

/// Failure while talking to the directory service
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("invalid base URL '{0}'")]
    InvalidBaseUrl(String),

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl DirectoryError {
    /// Short human-readable description for logs
    pub fn describe(&self) -> String {
        match self {
            DirectoryError::Request(e) if e.is_timeout() => "Request timed out".to_string(),
            DirectoryError::Request(e) if e.is_connect() => format!("Connection failed: {}", e),
            other => other.to_string(),
        }
    }
}

/// Failure while loading the configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse config: {0}")]
    Parse(#[from] serde_yaml::Error),
}
