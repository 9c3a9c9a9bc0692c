//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};

/// Main application configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
    pub features: FeaturesConfig,
}

/// Storage backend configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StorageConfig {
    /// "memory" or "file"
    pub backend: String,
    /// Data directory for the file backend
    pub data_dir: String,
    /// Key under which the event collection is stored
    pub events_key: String,
    /// Key under which the registration collection is stored
    pub registrations_key: String,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// Directory for daily-rolling log files; stdout only when absent
    pub file_dir: Option<String>,
}

/// Feature flags configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FeaturesConfig {
    /// Seed the three sample events into an empty store on first query
    pub seed_sample_data: bool,
    /// Reject registrations into events already at capacity
    pub enforce_capacity: bool,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("EVENTPULSE").separator("__"))
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::EventPulseError> {
        super::validation::validate_settings(self)
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: "memory".to_string(),
            data_dir: "./data".to_string(),
            events_key: "events".to_string(),
            registrations_key: "registrations".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_dir: None,
        }
    }
}

impl Default for FeaturesConfig {
    fn default() -> Self {
        Self {
            seed_sample_data: true,
            enforce_capacity: false,
        }
    }
}
