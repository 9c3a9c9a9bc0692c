//! Storage port trait
//!
//! The store depends on this abstraction rather than a concrete device store,
//! so tests run against an in-memory fake and a real networked backend can be
//! slotted in later without changing any operation contract. Values are JSON
//! documents addressed by fixed string keys.

use async_trait::async_trait;

use crate::utils::errors::Result;

/// Key under which the event collection is persisted
pub const EVENTS_KEY: &str = "events";

/// Key under which the registration collection is persisted
pub const REGISTRATIONS_KEY: &str = "registrations";

/// Key/value persistence seam. Implementations must be safe to share across
/// tasks; the store never holds partial state in the port itself.
#[async_trait]
pub trait StoragePort: Send + Sync {
    /// Read the raw document stored under `key`, if any
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write the raw document stored under `key`, replacing any previous value
    async fn set(&self, key: &str, value: &str) -> Result<()>;
}
