//! Services module
//!
//! This module contains the business logic layer

pub mod auth;
pub mod store;

// Re-export services
pub use auth::{AuthProvider, StaticAuthProvider};
pub use store::{EventStore, StoreState};
