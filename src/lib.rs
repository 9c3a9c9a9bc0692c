//! EventPulse
//!
//! A local-first data store for community event management. The crate owns
//! the canonical event and registration collections, persisted as JSON
//! documents behind a pluggable key/value storage port, and exposes the CRUD
//! and register-interest operations a view layer consumes, along with the
//! transient view state (cached result set, loading flag, last error).

pub mod config;
pub mod models;
pub mod repositories;
pub mod services;
pub mod storage;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{EventPulseError, Outcome, Result};

// Re-export main components for easy access
pub use models::{
    CurrentUser, Event, EventCategory, EventDraft, EventFilter, EventPatch, EventStatus,
    EventVisibility, Registration, RegistrationDetails,
};
pub use services::{AuthProvider, EventStore, StaticAuthProvider, StoreState};
pub use storage::{FileStorage, MemoryStorage, StoragePort};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
