//! Application-wide constants

use std::path::PathBuf;

/// Event poll timeout in milliseconds
pub const EVENT_POLL_TIMEOUT_MS: u64 = 100;

/// Spinner animation interval in milliseconds
pub const SPINNER_TICK_MS: u128 = 100;

/// Channel buffer size for command messages
pub const COMMAND_CHANNEL_SIZE: usize = 100;

/// Maximum length for user text input (prevents memory exhaustion)
pub const MAX_INPUT_LENGTH: usize = 100;

/// Minimum accepted password length for the new account
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Delay between the final progress event and the switch to the complete step
pub const COMPLETION_DELAY_MS: u64 = 2000;

/// Default installer service address (the backend listens on port 3000)
pub const DEFAULT_SERVICE_URL: &str = "http://127.0.0.1:3000";

/// Timeout for short-lived API requests (seconds)
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Timeout for establishing a connection to the service (seconds)
pub const CONNECT_TIMEOUT_SECS: u64 = 5;

/// User agent sent with every API request
pub const USER_AGENT: &str = "twina-installer";

// =============================================================================
// Paths
// =============================================================================

/// Application directory name under the platform data/config directories
const APP_DIR: &str = "twina-installer";

/// Fallback data directory when no home is available (live sessions as root)
const FALLBACK_DATA_DIR: &str = "/tmp/twina-installer";

/// Diagnostic log filename (rolled daily by tracing-appender)
pub const DIAGNOSTIC_LOG_FILE: &str = "twina-installer.log";

/// Installation log mirror filename
pub const INSTALL_LOG_FILE: &str = "install.log";

/// Configuration filename
pub const CONFIG_FILE: &str = "installer.toml";

/// Get the data directory used for logs
pub fn data_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join(APP_DIR))
        .unwrap_or_else(|| PathBuf::from(FALLBACK_DATA_DIR))
}

/// Get the default configuration file path
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join(APP_DIR).join(CONFIG_FILE))
        .unwrap_or_else(|| PathBuf::from(FALLBACK_DATA_DIR).join(CONFIG_FILE))
}
