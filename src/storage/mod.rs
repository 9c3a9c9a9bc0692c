//! Storage module
//!
//! This module contains the key/value storage port and its backends

pub mod file;
pub mod memory;
pub mod port;

// Re-export storage types
pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use port::{StoragePort, EVENTS_KEY, REGISTRATIONS_KEY};
