//! Event store service
//!
//! The canonical owner of the event and registration collections. Exposes the
//! five operations consumed by a view layer (query, create, update, delete,
//! register interest) plus refetch, and tracks the transient view state
//! (cached result set, loading flag, last error). Mutations return `Outcome`
//! values; query failures surface only through the shared error state.

use std::sync::{Arc, RwLock};

use chrono::Utc;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::config::Settings;
use crate::models::event::{Event, EventDraft, EventFilter, EventPatch, OrganizerProfile};
use crate::models::registration::{Registration, RegistrationDetails, RegistrationStatus};
use crate::repositories::{EventRepository, RegistrationRepository};
use crate::services::auth::AuthProvider;
use crate::storage::port::StoragePort;
use crate::utils::errors::{EventPulseError, Outcome, Result};
use crate::utils::logging::log_event_action;

/// Transient view state observed by the consuming layer. Refreshed by
/// operations, never mutated directly by callers.
#[derive(Debug, Clone, Default)]
pub struct StoreState {
    pub events: Vec<Event>,
    pub loading: bool,
    pub error: Option<String>,
}

pub struct EventStore {
    events: EventRepository,
    registrations: RegistrationRepository,
    auth: Arc<dyn AuthProvider>,
    enforce_capacity: bool,
    state: RwLock<StoreState>,
    last_filters: RwLock<EventFilter>,
}

impl EventStore {
    /// Create a new EventStore over prepared repositories
    pub fn new(
        events: EventRepository,
        registrations: RegistrationRepository,
        auth: Arc<dyn AuthProvider>,
    ) -> Self {
        Self {
            events,
            registrations,
            auth,
            enforce_capacity: false,
            state: RwLock::new(StoreState::default()),
            last_filters: RwLock::new(EventFilter::default()),
        }
    }

    /// Wire repositories from settings over a shared storage port
    pub fn from_settings(
        storage: Arc<dyn StoragePort>,
        auth: Arc<dyn AuthProvider>,
        settings: &Settings,
    ) -> Self {
        let events = EventRepository::new(
            storage.clone(),
            settings.storage.events_key.clone(),
            settings.features.seed_sample_data,
        );
        let registrations =
            RegistrationRepository::new(storage, settings.storage.registrations_key.clone());
        Self::new(events, registrations, auth).with_capacity_enforcement(settings.features.enforce_capacity)
    }

    /// Toggle the registered-count-versus-capacity policy
    pub fn with_capacity_enforcement(mut self, enforce: bool) -> Self {
        self.enforce_capacity = enforce;
        self
    }

    /// Snapshot of the current view state
    pub fn state(&self) -> StoreState {
        self.state
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    /// Query the event collection, seeding it on first use. Filters combine
    /// as a logical AND; ordering is the persisted order (newest-created
    /// first). Failures are recorded in the shared error state and yield an
    /// empty result instead of propagating.
    pub async fn query(&self, filters: &EventFilter) -> Vec<Event> {
        debug!(filters = ?filters, "Querying events");
        self.with_state(|s| {
            s.loading = true;
            s.error = None;
        });
        if let Ok(mut last) = self.last_filters.write() {
            *last = filters.clone();
        }

        match self.events.load_all().await {
            Ok(events) => {
                let matched: Vec<Event> = events
                    .into_iter()
                    .filter(|e| filters.matches(e))
                    .collect();
                debug!(count = matched.len(), "Query completed");
                self.with_state(|s| {
                    s.events = matched.clone();
                    s.loading = false;
                });
                matched
            }
            Err(e) => {
                if e.is_recoverable() {
                    warn!(error = %e, "Query failed; storage may recover");
                } else {
                    error!(error = %e, "Query failed");
                }
                self.with_state(|s| {
                    s.events = Vec::new();
                    s.error = Some(e.to_string());
                    s.loading = false;
                });
                Vec::new()
            }
        }
    }

    /// Re-run the last query with its filters
    pub async fn refetch(&self) -> Vec<Event> {
        let filters = self
            .last_filters
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_default();
        self.query(&filters).await
    }

    /// Create a new event owned by the authenticated actor
    pub async fn create(&self, draft: EventDraft) -> Outcome<Event> {
        self.set_loading(true);
        let outcome = match self.try_create(draft).await {
            Ok((event, all)) => {
                self.with_state(|s| s.events = all);
                log_event_action(&event.id, "create", &event.organizer_id);
                Outcome::ok(event)
            }
            Err(e) => {
                warn!(error = %e, "Event creation failed");
                Outcome::failed(e)
            }
        };
        self.set_loading(false);
        outcome
    }

    /// Apply a typed patch to an existing event
    pub async fn update(&self, id: &str, patch: EventPatch) -> Outcome<Event> {
        self.set_loading(true);
        let outcome = match self.try_update(id, patch).await {
            Ok(event) => {
                // Only the matching cached entry is replaced; unrelated
                // entries keep whatever the last query produced.
                self.with_state(|s| {
                    if let Some(entry) = s.events.iter_mut().find(|e| e.id == id) {
                        *entry = event.clone();
                    }
                });
                log_event_action(id, "update", &event.organizer_id);
                Outcome::ok(event)
            }
            Err(e) => {
                warn!(event_id = %id, error = %e, "Event update failed");
                Outcome::failed(e)
            }
        };
        self.set_loading(false);
        outcome
    }

    /// Delete an event. Idempotent: a missing identifier is still success.
    pub async fn delete(&self, id: &str) -> Outcome<()> {
        self.set_loading(true);
        let outcome = match self.events.remove_by_id(id).await {
            Ok(removed) => {
                self.with_state(|s| s.events.retain(|e| e.id != id));
                if removed {
                    info!(event_id = %id, "Event deleted");
                } else {
                    debug!(event_id = %id, "Delete found nothing to remove");
                }
                Outcome::done()
            }
            Err(e) => {
                warn!(event_id = %id, error = %e, "Event deletion failed");
                Outcome::failed(e)
            }
        };
        self.set_loading(false);
        outcome
    }

    /// Register the authenticated actor's interest in an event
    pub async fn register_interest(
        &self,
        event_id: &str,
        details: Option<RegistrationDetails>,
    ) -> Outcome<()> {
        self.set_loading(true);
        let outcome = match self.try_register(event_id, details).await {
            Ok(all) => {
                self.with_state(|s| s.events = all);
                info!(event_id = %event_id, "Interest registered");
                Outcome::done()
            }
            Err(e) => {
                warn!(event_id = %event_id, error = %e, "Registration failed");
                Outcome::failed(e)
            }
        };
        self.set_loading(false);
        outcome
    }

    async fn try_create(&self, draft: EventDraft) -> Result<(Event, Vec<Event>)> {
        let user = self
            .auth
            .current_user()
            .ok_or(EventPulseError::NotAuthenticated)?;
        let now = Utc::now();

        let event = Event {
            id: Uuid::new_v4().to_string(),
            title: draft.title,
            description: draft.description,
            start_at: draft.start_at,
            end_at: draft.end_at,
            location_name: draft.location_name,
            location_address: draft.location_address,
            capacity: draft.capacity,
            registered_count: 0,
            category: draft.category,
            tags: draft.tags,
            visibility: draft.visibility,
            price: draft.price,
            cover_image: draft.cover_image,
            requirements: draft.requirements,
            target_audience: draft.target_audience,
            learning_objectives: draft.learning_objectives,
            amenities: draft.amenities,
            budget_total: draft.budget_total,
            budget_spent: draft.budget_spent,
            status: draft.status,
            organizer_id: user.id.clone(),
            organizer: OrganizerProfile::from_user(&user),
            created_at: now,
            updated_at: now,
        };
        event.validate()?;

        let all = self.events.upsert(event.clone()).await?;
        Ok((event, all))
    }

    async fn try_update(&self, id: &str, patch: EventPatch) -> Result<Event> {
        let mut event = self
            .events
            .get_by_id(id)
            .await?
            .ok_or(EventPulseError::EventNotFound)?;

        patch.apply(&mut event);
        event.updated_at = Utc::now();
        event.validate()?;

        self.events.upsert(event.clone()).await?;
        Ok(event)
    }

    async fn try_register(
        &self,
        event_id: &str,
        details: Option<RegistrationDetails>,
    ) -> Result<Vec<Event>> {
        let user = self
            .auth
            .current_user()
            .ok_or(EventPulseError::NotAuthenticated)?;
        let mut event = self
            .events
            .get_by_id(event_id)
            .await?
            .ok_or(EventPulseError::EventNotFound)?;

        if self.registrations.exists(event_id, &user.id).await? {
            return Err(EventPulseError::AlreadyRegistered);
        }
        if self.enforce_capacity && event.registered_count >= event.capacity {
            return Err(EventPulseError::EventFull);
        }

        let details = details.unwrap_or_default();
        let registration = Registration {
            id: Uuid::new_v4().to_string(),
            event_id: event_id.to_string(),
            user_id: user.id.clone(),
            status: RegistrationStatus::Pending,
            registered_at: Utc::now(),
            role: details.role,
            motivation: details.motivation,
            dietary_restrictions: details.dietary_restrictions,
            accessibility_needs: details.accessibility_needs,
            emergency_contact: details.emergency_contact,
        };

        // Two separate writes under two keys: a failure after the first
        // leaves the counter one behind the registration collection.
        self.registrations.insert(registration).await?;
        event.registered_count += 1;
        let all = self.events.upsert(event).await?;

        log_event_action(event_id, "register_interest", &user.id);
        Ok(all)
    }

    fn set_loading(&self, loading: bool) {
        self.with_state(|s| s.loading = loading);
    }

    fn with_state(&self, f: impl FnOnce(&mut StoreState)) {
        if let Ok(mut guard) = self.state.write() {
            f(&mut guard);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::event::{EventCategory, EventStatus, EventVisibility};
    use crate::models::user::CurrentUser;
    use crate::services::auth::StaticAuthProvider;
    use crate::storage::MemoryStorage;
    use chrono::TimeZone;

    fn store(auth: Arc<dyn AuthProvider>) -> EventStore {
        EventStore::from_settings(Arc::new(MemoryStorage::new()), auth, &Settings::default())
    }

    fn draft() -> EventDraft {
        EventDraft {
            title: "Neighborhood repair cafe".to_string(),
            description: "Bring broken things".to_string(),
            start_at: Utc.with_ymd_and_hms(2025, 8, 2, 10, 0, 0).unwrap(),
            end_at: Utc.with_ymd_and_hms(2025, 8, 2, 13, 0, 0).unwrap(),
            location_name: "Library".to_string(),
            location_address: "9 Book Street".to_string(),
            capacity: 25,
            category: EventCategory::Social,
            tags: vec![],
            visibility: EventVisibility::Public,
            price: 0.0,
            cover_image: None,
            requirements: vec![],
            target_audience: vec![],
            learning_objectives: vec![],
            amenities: vec![],
            budget_total: 0.0,
            budget_spent: 0.0,
            status: EventStatus::Published,
        }
    }

    #[tokio::test]
    async fn test_create_requires_actor() {
        let store = store(Arc::new(StaticAuthProvider::new()));
        let outcome = store.create(draft()).await;
        assert!(!outcome.success);
        assert_eq!(outcome.error.as_deref(), Some("Not authenticated"));
    }

    #[tokio::test]
    async fn test_register_requires_actor() {
        let store = store(Arc::new(StaticAuthProvider::new()));
        let outcome = store.register_interest("1", None).await;
        assert!(!outcome.success);
        assert_eq!(outcome.error.as_deref(), Some("Not authenticated"));
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_schedule() {
        let auth = StaticAuthProvider::signed_in(CurrentUser::new("u1", "u1@example.com"));
        let store = store(Arc::new(auth));

        let mut bad = draft();
        bad.end_at = bad.start_at;
        let outcome = store.create(bad).await;

        assert!(!outcome.success);
        assert!(outcome.error.unwrap().contains("Start time"));
    }

    #[tokio::test]
    async fn test_organizer_snapshot_uses_metadata_fallbacks() {
        let auth = StaticAuthProvider::signed_in(CurrentUser::new("u1", "pat@example.com"));
        let store = store(Arc::new(auth));

        let outcome = store.create(draft()).await;
        let event = outcome.data.unwrap();

        assert_eq!(event.organizer_id, "u1");
        assert_eq!(event.organizer.name, "pat");
        assert_eq!(
            event.organizer.role,
            crate::models::event::OrganizerRole::Volunteer
        );
        assert_eq!(event.organizer.experience_points, 0);
    }

    #[tokio::test]
    async fn test_capacity_enforcement_rejects_full_event() {
        let auth = StaticAuthProvider::signed_in(CurrentUser::new("u9", "u9@example.com"));
        let store = store(Arc::new(auth)).with_capacity_enforcement(true);

        // Seed event "2" is at capacity (15/15).
        let outcome = store.register_interest("2", None).await;

        assert!(!outcome.success);
        assert_eq!(outcome.error.as_deref(), Some("Event is at capacity"));
        let events = store.query(&EventFilter::default()).await;
        let full = events.iter().find(|e| e.id == "2").unwrap();
        assert_eq!(full.registered_count, 15);
    }

    #[tokio::test]
    async fn test_loading_flag_is_false_after_operations() {
        let store = store(Arc::new(StaticAuthProvider::new()));

        store.query(&EventFilter::default()).await;
        assert!(!store.state().loading);

        store.create(draft()).await;
        assert!(!store.state().loading);
    }
}
