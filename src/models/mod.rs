//! Data models module
//!
//! This module contains the serde types shared across the crate

pub mod event;
pub mod registration;
pub mod user;

// Re-export models
pub use event::{
    Event, EventCategory, EventDraft, EventFilter, EventPatch, EventStatus, EventVisibility,
    OrganizerProfile, OrganizerRole,
};
pub use registration::{Registration, RegistrationDetails, RegistrationStatus};
pub use user::CurrentUser;
