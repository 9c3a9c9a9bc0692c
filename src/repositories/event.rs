//! Event repository implementation
//!
//! Per-record operations over the event collection. The persisted shape is a
//! single JSON array under a fixed key; every mutation reads the whole
//! collection, changes it in memory and writes the whole collection back.
//! Concurrent writers therefore race as last-writer-wins; there is no
//! row-level update primitive.

use std::sync::Arc;

use tracing::{debug, error, info};

use crate::models::event::Event;
use crate::repositories::seed;
use crate::storage::port::StoragePort;
use crate::utils::errors::Result;

#[derive(Clone)]
pub struct EventRepository {
    storage: Arc<dyn StoragePort>,
    key: String,
    seed_on_first_use: bool,
}

impl EventRepository {
    pub fn new(storage: Arc<dyn StoragePort>, key: impl Into<String>, seed_on_first_use: bool) -> Self {
        Self {
            storage,
            key: key.into(),
            seed_on_first_use,
        }
    }

    /// Load the full collection, seeding it on first use when the key is
    /// absent. The seed is persisted before this returns, so a second load
    /// sees the same records without reseeding.
    pub async fn load_all(&self) -> Result<Vec<Event>> {
        match self.storage.get(&self.key).await? {
            Some(raw) => {
                let events: Vec<Event> = serde_json::from_str(&raw).map_err(|e| {
                    error!(key = %self.key, error = %e, "Failed to parse event collection");
                    e
                })?;
                debug!(key = %self.key, count = events.len(), "Loaded event collection");
                Ok(events)
            }
            None => {
                let seeded = if self.seed_on_first_use {
                    seed::sample_events()
                } else {
                    Vec::new()
                };
                self.save_all(&seeded).await?;
                info!(key = %self.key, count = seeded.len(), "Seeded empty event collection");
                Ok(seeded)
            }
        }
    }

    /// Persist the full collection, replacing whatever was stored before
    pub async fn save_all(&self, events: &[Event]) -> Result<()> {
        let raw = serde_json::to_string(events)?;
        self.storage.set(&self.key, &raw).await
    }

    /// Find an event by identifier
    pub async fn get_by_id(&self, id: &str) -> Result<Option<Event>> {
        let events = self.load_all().await?;
        Ok(events.into_iter().find(|e| e.id == id))
    }

    /// Replace the record with a matching id in place, or prepend it when no
    /// record matches (so default ordering stays newest-created-first).
    /// Returns the persisted collection.
    pub async fn upsert(&self, event: Event) -> Result<Vec<Event>> {
        let mut events = self.load_all().await?;
        match events.iter().position(|e| e.id == event.id) {
            Some(index) => events[index] = event,
            None => events.insert(0, event),
        }
        self.save_all(&events).await?;
        Ok(events)
    }

    /// Remove the record with a matching id. Returns whether anything was
    /// removed; a missing id leaves the collection untouched.
    pub async fn remove_by_id(&self, id: &str) -> Result<bool> {
        let mut events = self.load_all().await?;
        let before = events.len();
        events.retain(|e| e.id != id);
        if events.len() == before {
            return Ok(false);
        }
        self.save_all(&events).await?;
        Ok(true)
    }

    /// Count persisted events
    pub async fn count(&self) -> Result<usize> {
        Ok(self.load_all().await?.len())
    }
}
