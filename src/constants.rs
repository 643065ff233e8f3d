//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Default base URL of the directory service
pub const DEFAULT_API_BASE_URL: &str = "https://meddata-backend.onrender.com";

/// Default HTTP timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default log file, relative to the working directory
pub const DEFAULT_LOG_FILE: &str = "hospital-search.log";

/// Directory under $HOME holding the config file
pub const CONFIG_DIR_NAME: &str = ".hospital-search";

/// Config file name inside `CONFIG_DIR_NAME`
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Route path of the results view
pub const SEARCH_PATH: &str = "/search";

/// Placeholder shown by an empty state picker
pub const STATE_PLACEHOLDER: &str = "State";

/// Placeholder shown by an empty city picker
pub const CITY_PLACEHOLDER: &str = "City";

/// Terminal width from which the form lays out in a single row
pub const WIDE_LAYOUT_MIN_WIDTH: u16 = 100;

/// Application name
pub const APP_NAME: &str = "Hospital Search";
