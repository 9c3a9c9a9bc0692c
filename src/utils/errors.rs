//! Error handling for EventPulse
//!
//! This module defines the main error type used throughout the crate and the
//! `Outcome` result object surfaced to the view layer. Internally operations
//! use `Result` and `?`; at the public boundary every failure is converted to
//! an `Outcome` (or the store's shared error state) so nothing propagates to
//! the caller as an unhandled error.

use serde::Serialize;
use thiserror::Error;

/// Main error type for EventPulse operations
#[derive(Error, Debug)]
pub enum EventPulseError {
    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("Event not found")]
    EventNotFound,

    #[error("Already registered for this event")]
    AlreadyRegistered,

    #[error("Event is at capacity")]
    EventFull,

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for EventPulse operations
pub type Result<T> = std::result::Result<T, EventPulseError>;

impl EventPulseError {
    /// Check if the error is recoverable by retrying the operation
    pub fn is_recoverable(&self) -> bool {
        match self {
            EventPulseError::NotAuthenticated => false,
            EventPulseError::EventNotFound => false,
            EventPulseError::AlreadyRegistered => false,
            EventPulseError::EventFull => false,
            EventPulseError::Storage(_) => true,
            EventPulseError::Serialization(_) => false,
            EventPulseError::Io(_) => true,
            EventPulseError::Config(_) => false,
            EventPulseError::InvalidInput(_) => false,
        }
    }
}

/// Structured success/failure value returned by mutating store operations.
///
/// Used instead of propagating errors: `success` tells the caller which of
/// `data` and `error` is populated.
#[derive(Debug, Clone, Serialize)]
pub struct Outcome<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> Outcome<T> {
    /// Successful outcome carrying a payload
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Failed outcome carrying a human-readable error string
    pub fn failed(error: impl std::fmt::Display) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.to_string()),
        }
    }
}

impl Outcome<()> {
    /// Successful outcome with no payload
    pub fn done() -> Self {
        Self {
            success: true,
            data: None,
            error: None,
        }
    }
}

impl<T> From<Result<T>> for Outcome<T> {
    fn from(result: Result<T>) -> Self {
        match result {
            Ok(data) => Outcome::ok(data),
            Err(e) => Outcome::failed(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_strings() {
        assert_eq!(EventPulseError::EventNotFound.to_string(), "Event not found");
        assert_eq!(
            EventPulseError::AlreadyRegistered.to_string(),
            "Already registered for this event"
        );
        assert_eq!(
            EventPulseError::NotAuthenticated.to_string(),
            "Not authenticated"
        );
        assert_eq!(EventPulseError::EventFull.to_string(), "Event is at capacity");
    }

    #[test]
    fn test_outcome_from_result() {
        let ok: Outcome<i32> = Outcome::from(Ok(7));
        assert!(ok.success);
        assert_eq!(ok.data, Some(7));
        assert!(ok.error.is_none());

        let failed: Outcome<i32> = Outcome::from(Err(EventPulseError::EventNotFound));
        assert!(!failed.success);
        assert!(failed.data.is_none());
        assert_eq!(failed.error.as_deref(), Some("Event not found"));
    }

    #[test]
    fn test_recoverable_classification() {
        assert!(EventPulseError::Storage("quota exceeded".to_string()).is_recoverable());
        assert!(!EventPulseError::EventNotFound.is_recoverable());
        assert!(!EventPulseError::NotAuthenticated.is_recoverable());
    }
}
