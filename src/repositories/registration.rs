//! Registration repository implementation
//!
//! Same whole-collection read-modify-write contract as the event repository,
//! over the "registrations" key. Registrations are append-only within this
//! crate; they are never updated or deleted.

use std::sync::Arc;

use tracing::{debug, error};

use crate::models::registration::Registration;
use crate::storage::port::StoragePort;
use crate::utils::errors::Result;

#[derive(Clone)]
pub struct RegistrationRepository {
    storage: Arc<dyn StoragePort>,
    key: String,
}

impl RegistrationRepository {
    pub fn new(storage: Arc<dyn StoragePort>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// Load the full collection; an absent key is an empty collection
    pub async fn load_all(&self) -> Result<Vec<Registration>> {
        match self.storage.get(&self.key).await? {
            Some(raw) => {
                let registrations: Vec<Registration> =
                    serde_json::from_str(&raw).map_err(|e| {
                        error!(key = %self.key, error = %e, "Failed to parse registration collection");
                        e
                    })?;
                Ok(registrations)
            }
            None => Ok(Vec::new()),
        }
    }

    /// Persist the full collection
    pub async fn save_all(&self, registrations: &[Registration]) -> Result<()> {
        let raw = serde_json::to_string(registrations)?;
        self.storage.set(&self.key, &raw).await
    }

    /// Check whether a registration exists for the (event, user) pair
    pub async fn exists(&self, event_id: &str, user_id: &str) -> Result<bool> {
        let registrations = self.load_all().await?;
        Ok(registrations
            .iter()
            .any(|r| r.event_id == event_id && r.user_id == user_id))
    }

    /// Append a registration and persist the collection
    pub async fn insert(&self, registration: Registration) -> Result<()> {
        let mut registrations = self.load_all().await?;
        debug!(
            event_id = %registration.event_id,
            user_id = %registration.user_id,
            "Appending registration"
        );
        registrations.push(registration);
        self.save_all(&registrations).await
    }
}
