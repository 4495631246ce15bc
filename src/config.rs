//! Configuration file support
//!
//! Loads configuration from a TOML file (by default
//! `~/.config/twina-installer/installer.toml`).
//! Falls back to defaults if the file doesn't exist or can't be parsed.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::constants;

/// Installer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Installer service connection settings
    pub service: ServiceConfig,

    /// Wizard behaviour
    pub wizard: WizardConfig,

    /// Languages offered on the locale step
    pub languages: Vec<SelectOption>,

    /// Timezones offered on the locale step
    pub timezones: Vec<SelectOption>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service: ServiceConfig::default(),
            wizard: WizardConfig::default(),
            languages: default_languages(),
            timezones: default_timezones(),
        }
    }
}

/// Service connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Base URL of the installer service
    pub base_url: String,

    /// Timeout for disk listing, health and reboot requests (seconds).
    /// The install request and the progress stream are never timed out.
    pub request_timeout_secs: u64,

    /// Timeout for establishing connections (seconds)
    pub connect_timeout_secs: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: constants::DEFAULT_SERVICE_URL.to_string(),
            request_timeout_secs: constants::REQUEST_TIMEOUT_SECS,
            connect_timeout_secs: constants::CONNECT_TIMEOUT_SECS,
        }
    }
}

impl ServiceConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

/// Wizard configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WizardConfig {
    /// Pause after the final progress event before showing the complete step (milliseconds)
    pub completion_delay_ms: u64,

    /// Language value preselected on the locale step
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_language: Option<String>,

    /// Timezone value preselected on the locale step
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_timezone: Option<String>,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            completion_delay_ms: constants::COMPLETION_DELAY_MS,
            default_language: None,
            default_timezone: None,
        }
    }
}

impl WizardConfig {
    pub fn completion_delay(&self) -> Duration {
        Duration::from_millis(self.completion_delay_ms)
    }
}

/// One entry of a selection list: the submitted value and its display label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

fn default_languages() -> Vec<SelectOption> {
    vec![
        SelectOption::new("en_US.UTF-8", "English (United States)"),
        SelectOption::new("en_GB.UTF-8", "English (United Kingdom)"),
        SelectOption::new("de_DE.UTF-8", "Deutsch"),
        SelectOption::new("fr_FR.UTF-8", "Français"),
        SelectOption::new("es_ES.UTF-8", "Español"),
        SelectOption::new("nl_NL.UTF-8", "Nederlands"),
    ]
}

fn default_timezones() -> Vec<SelectOption> {
    vec![
        SelectOption::new("UTC", "UTC"),
        SelectOption::new("America/New_York", "Eastern Time (New York)"),
        SelectOption::new("America/Los_Angeles", "Pacific Time (Los Angeles)"),
        SelectOption::new("Europe/London", "London"),
        SelectOption::new("Europe/Berlin", "Berlin"),
        SelectOption::new("Europe/Amsterdam", "Amsterdam"),
        SelectOption::new("Asia/Tokyo", "Tokyo"),
    ]
}

/// Find the display label for a value, falling back to the value itself
pub fn label_for<'a>(options: &'a [SelectOption], value: &'a str) -> &'a str {
    options
        .iter()
        .find(|o| o.value == value)
        .map(|o| o.label.as_str())
        .unwrap_or(value)
}

impl Config {
    /// Load configuration from a file, or return defaults if not found
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("Failed to parse config file: {}, using defaults", e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config file: {}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Generate example configuration content
    pub fn example_toml() -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(&Self::default())?)
    }
}
