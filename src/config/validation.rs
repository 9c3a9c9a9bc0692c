//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use super::Settings;
use crate::utils::errors::{EventPulseError, Result};

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_storage_config(&settings.storage)?;
    validate_logging_config(&settings.logging)?;
    Ok(())
}

/// Validate storage configuration
fn validate_storage_config(config: &super::StorageConfig) -> Result<()> {
    let valid_backends = ["memory", "file"];
    if !valid_backends.contains(&config.backend.as_str()) {
        return Err(EventPulseError::Config(format!(
            "Invalid storage backend: {}. Valid backends: {:?}",
            config.backend, valid_backends
        )));
    }

    if config.backend == "file" && config.data_dir.is_empty() {
        return Err(EventPulseError::Config(
            "Data directory is required for the file backend".to_string(),
        ));
    }

    if config.events_key.is_empty() || config.registrations_key.is_empty() {
        return Err(EventPulseError::Config(
            "Storage keys must not be empty".to_string(),
        ));
    }

    if config.events_key == config.registrations_key {
        return Err(EventPulseError::Config(
            "Event and registration collections must use distinct keys".to_string(),
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(EventPulseError::Config("Log level is required".to_string()));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(EventPulseError::Config(format!(
            "Invalid log level: {}. Valid levels: {:?}",
            config.level, valid_levels
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    #[test]
    fn test_rejects_unknown_backend() {
        let mut settings = Settings::default();
        settings.storage.backend = "postgres".to_string();
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn test_rejects_missing_data_dir_for_file_backend() {
        let mut settings = Settings::default();
        settings.storage.backend = "file".to_string();
        settings.storage.data_dir = String::new();
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn test_rejects_colliding_keys() {
        let mut settings = Settings::default();
        settings.storage.registrations_key = settings.storage.events_key.clone();
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn test_rejects_invalid_log_level() {
        let mut settings = Settings::default();
        settings.logging.level = "verbose".to_string();
        assert!(validate_settings(&settings).is_err());
    }
}
