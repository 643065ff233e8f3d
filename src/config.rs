//! User configuration, read from `~/.hospital-search/config.yaml`

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_API_BASE_URL, DEFAULT_LOG_FILE,
    DEFAULT_REQUEST_TIMEOUT_SECS,
};
use crate::error::ConfigError;

/// Runtime configuration; every field is optional in the file
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the directory service
    pub api_base_url: String,
    /// HTTP timeout for directory requests
    pub request_timeout_secs: u64,
    /// Where tracing output goes
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: String::from(DEFAULT_API_BASE_URL),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl Config {
    /// Default location of the config file
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Load from the default location
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::default_path())
    }

    /// Load from `path`; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(&content)?)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
