//! Shared helpers for integration tests

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use eventpulse::models::event::{EventCategory, EventDraft, EventStatus, EventVisibility};
use eventpulse::models::user::CurrentUser;
use eventpulse::services::{EventStore, StaticAuthProvider};
use eventpulse::storage::{MemoryStorage, StoragePort};
use eventpulse::utils::errors::{EventPulseError, Result};
use eventpulse::Settings;

/// Storage double whose every call fails, for exercising error paths
pub struct FailingStorage;

#[async_trait]
impl StoragePort for FailingStorage {
    async fn get(&self, _key: &str) -> Result<Option<String>> {
        Err(EventPulseError::Storage(
            "device storage unavailable".to_string(),
        ))
    }

    async fn set(&self, _key: &str, _value: &str) -> Result<()> {
        Err(EventPulseError::Storage(
            "device storage unavailable".to_string(),
        ))
    }
}

pub fn test_user() -> CurrentUser {
    CurrentUser::new("u1", "test@example.com")
}

/// Store over fresh memory storage with sample-data seeding on and the test
/// user signed in. Also returns the storage so tests can inspect raw keys.
pub fn seeded_store() -> (EventStore, Arc<MemoryStorage>) {
    let storage = Arc::new(MemoryStorage::new());
    let auth = Arc::new(StaticAuthProvider::signed_in(test_user()));
    let store = EventStore::from_settings(storage.clone(), auth, &Settings::default());
    (store, storage)
}

/// Store over fresh memory storage with seeding disabled
pub fn empty_store() -> (EventStore, Arc<MemoryStorage>) {
    let storage = Arc::new(MemoryStorage::new());
    let auth = Arc::new(StaticAuthProvider::signed_in(test_user()));
    let mut settings = Settings::default();
    settings.features.seed_sample_data = false;
    let store = EventStore::from_settings(storage.clone(), auth, &settings);
    (store, storage)
}

/// Store over the given storage with no actor signed in
pub fn anonymous_store(storage: Arc<dyn StoragePort>) -> EventStore {
    let auth = Arc::new(StaticAuthProvider::new());
    EventStore::from_settings(storage, auth, &Settings::default())
}

pub fn published_draft(title: &str) -> EventDraft {
    draft(title, EventCategory::Workshop, EventVisibility::Public)
}

pub fn draft(title: &str, category: EventCategory, visibility: EventVisibility) -> EventDraft {
    EventDraft {
        title: title.to_string(),
        description: "Test event".to_string(),
        start_at: Utc.with_ymd_and_hms(2025, 9, 1, 10, 0, 0).unwrap(),
        end_at: Utc.with_ymd_and_hms(2025, 9, 1, 12, 0, 0).unwrap(),
        location_name: "Community Hall".to_string(),
        location_address: "7 Main Square".to_string(),
        capacity: 10,
        category,
        tags: vec!["test".to_string()],
        visibility,
        price: 0.0,
        cover_image: None,
        requirements: vec![],
        target_audience: vec![],
        learning_objectives: vec![],
        amenities: vec![],
        budget_total: 50.0,
        budget_spent: 0.0,
        status: EventStatus::Published,
    }
}
