//! Utilities module
//!
//! This module contains error handling and logging utilities

pub mod errors;
pub mod logging;

// Re-export commonly used types
pub use errors::{EventPulseError, Outcome, Result};
