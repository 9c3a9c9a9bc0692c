//! Repositories module
//!
//! This module contains the per-record data access layer over the storage port

pub mod event;
pub mod registration;
pub(crate) mod seed;

// Re-export repositories
pub use event::EventRepository;
pub use registration::RegistrationRepository;
