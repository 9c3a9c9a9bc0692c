//! Configuration module
//!
//! This module handles application configuration loading and validation

pub mod settings;
pub mod validation;

// Re-export configuration types
pub use settings::{FeaturesConfig, LoggingConfig, Settings, StorageConfig};
