//! Event model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::user::CurrentUser;
use crate::utils::errors::{EventPulseError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
    pub location_name: String,
    pub location_address: String,
    pub capacity: u32,
    pub registered_count: u32,
    pub category: EventCategory,
    pub tags: Vec<String>,
    pub visibility: EventVisibility,
    pub price: f64,
    pub cover_image: Option<String>,
    pub requirements: Vec<String>,
    pub target_audience: Vec<String>,
    pub learning_objectives: Vec<String>,
    pub amenities: Vec<String>,
    pub budget_total: f64,
    pub budget_spent: f64,
    pub status: EventStatus,
    pub organizer_id: String,
    pub organizer: OrganizerProfile,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Event {
    /// Validate record-level constraints. Called after building a record from
    /// a draft and after merging a patch, before anything is persisted.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(EventPulseError::InvalidInput(
                "Title must not be empty".to_string(),
            ));
        }
        if self.start_at >= self.end_at {
            return Err(EventPulseError::InvalidInput(
                "Start time must be before end time".to_string(),
            ));
        }
        if self.capacity == 0 {
            return Err(EventPulseError::InvalidInput(
                "Capacity must be at least 1".to_string(),
            ));
        }
        if self.price < 0.0 {
            return Err(EventPulseError::InvalidInput(
                "Price must not be negative".to_string(),
            ));
        }
        if self.budget_total < 0.0 || self.budget_spent < 0.0 {
            return Err(EventPulseError::InvalidInput(
                "Budget amounts must not be negative".to_string(),
            ));
        }
        Ok(())
    }
}

/// Denormalized snapshot of the owning user, embedded in each event.
/// The gamification counters are carried but never mutated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganizerProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar_url: Option<String>,
    pub role: OrganizerRole,
    pub experience_points: u32,
    pub level: u32,
    pub streak_days: u32,
    pub volunteer_hours: u32,
    pub impact_score: u32,
}

impl OrganizerProfile {
    /// Build a snapshot from the acting user's profile, falling back to
    /// defaults for absent metadata fields.
    pub fn from_user(user: &CurrentUser) -> Self {
        Self {
            id: user.id.clone(),
            name: user.display_name(),
            email: user.email.clone(),
            avatar_url: user.avatar_url(),
            role: user
                .role_hint()
                .and_then(|r| r.parse().ok())
                .unwrap_or(OrganizerRole::Volunteer),
            experience_points: 0,
            level: 0,
            streak_days: 0,
            volunteer_hours: 0,
            impact_score: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrganizerRole {
    Admin,
    Organizer,
    Volunteer,
}

impl std::str::FromStr for OrganizerRole {
    type Err = EventPulseError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "admin" => Ok(OrganizerRole::Admin),
            "organizer" => Ok(OrganizerRole::Organizer),
            "volunteer" => Ok(OrganizerRole::Volunteer),
            other => Err(EventPulseError::InvalidInput(format!(
                "Unknown organizer role: {}",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    Workshop,
    Cleanup,
    Fundraiser,
    Social,
    Education,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventVisibility {
    Public,
    Private,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Draft,
    Published,
    Ongoing,
    Completed,
    Cancelled,
}

/// Author-supplied fields for a new event. Identifier, organizer fields,
/// registered count and timestamps are assigned by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
    pub location_name: String,
    pub location_address: String,
    pub capacity: u32,
    pub category: EventCategory,
    #[serde(default)]
    pub tags: Vec<String>,
    pub visibility: EventVisibility,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub target_audience: Vec<String>,
    #[serde(default)]
    pub learning_objectives: Vec<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub budget_total: f64,
    #[serde(default)]
    pub budget_spent: f64,
    pub status: EventStatus,
}

/// Typed partial update for an event. Set fields replace the stored value,
/// unset fields are retained; unknown fields are rejected at the serde
/// boundary rather than silently merged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EventPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub start_at: Option<DateTime<Utc>>,
    pub end_at: Option<DateTime<Utc>>,
    pub location_name: Option<String>,
    pub location_address: Option<String>,
    pub capacity: Option<u32>,
    pub category: Option<EventCategory>,
    pub tags: Option<Vec<String>>,
    pub visibility: Option<EventVisibility>,
    pub price: Option<f64>,
    pub cover_image: Option<Option<String>>,
    pub requirements: Option<Vec<String>>,
    pub target_audience: Option<Vec<String>>,
    pub learning_objectives: Option<Vec<String>>,
    pub amenities: Option<Vec<String>>,
    pub budget_total: Option<f64>,
    pub budget_spent: Option<f64>,
    pub status: Option<EventStatus>,
}

impl EventPatch {
    /// Merge the patch over an existing record, field by field.
    pub fn apply(&self, event: &mut Event) {
        if let Some(title) = &self.title {
            event.title = title.clone();
        }
        if let Some(description) = &self.description {
            event.description = description.clone();
        }
        if let Some(start_at) = self.start_at {
            event.start_at = start_at;
        }
        if let Some(end_at) = self.end_at {
            event.end_at = end_at;
        }
        if let Some(location_name) = &self.location_name {
            event.location_name = location_name.clone();
        }
        if let Some(location_address) = &self.location_address {
            event.location_address = location_address.clone();
        }
        if let Some(capacity) = self.capacity {
            event.capacity = capacity;
        }
        if let Some(category) = self.category {
            event.category = category;
        }
        if let Some(tags) = &self.tags {
            event.tags = tags.clone();
        }
        if let Some(visibility) = self.visibility {
            event.visibility = visibility;
        }
        if let Some(price) = self.price {
            event.price = price;
        }
        if let Some(cover_image) = &self.cover_image {
            event.cover_image = cover_image.clone();
        }
        if let Some(requirements) = &self.requirements {
            event.requirements = requirements.clone();
        }
        if let Some(target_audience) = &self.target_audience {
            event.target_audience = target_audience.clone();
        }
        if let Some(learning_objectives) = &self.learning_objectives {
            event.learning_objectives = learning_objectives.clone();
        }
        if let Some(amenities) = &self.amenities {
            event.amenities = amenities.clone();
        }
        if let Some(budget_total) = self.budget_total {
            event.budget_total = budget_total;
        }
        if let Some(budget_spent) = self.budget_spent {
            event.budget_spent = budget_spent;
        }
        if let Some(status) = self.status {
            event.status = status;
        }
    }
}

/// Query predicates, combined as a logical AND. Absent fields are no-ops.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventFilter {
    pub visibility: Option<EventVisibility>,
    pub category: Option<EventCategory>,
    pub status: Option<EventStatus>,
    pub organizer_id: Option<String>,
}

impl EventFilter {
    pub fn matches(&self, event: &Event) -> bool {
        if let Some(visibility) = self.visibility {
            if event.visibility != visibility {
                return false;
            }
        }
        if let Some(category) = self.category {
            if event.category != category {
                return false;
            }
        }
        if let Some(status) = self.status {
            if event.status != status {
                return false;
            }
        }
        if let Some(organizer_id) = &self.organizer_id {
            if &event.organizer_id != organizer_id {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_event() -> Event {
        Event {
            id: "e1".to_string(),
            title: "Park cleanup".to_string(),
            description: "Morning cleanup".to_string(),
            start_at: Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap(),
            end_at: Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
            location_name: "Riverside Park".to_string(),
            location_address: "1 Park Lane".to_string(),
            capacity: 20,
            registered_count: 0,
            category: EventCategory::Cleanup,
            tags: vec!["outdoors".to_string()],
            visibility: EventVisibility::Public,
            price: 0.0,
            cover_image: None,
            requirements: vec![],
            target_audience: vec![],
            learning_objectives: vec![],
            amenities: vec![],
            budget_total: 100.0,
            budget_spent: 0.0,
            status: EventStatus::Published,
            organizer_id: "u1".to_string(),
            organizer: OrganizerProfile {
                id: "u1".to_string(),
                name: "Sam".to_string(),
                email: "sam@example.com".to_string(),
                avatar_url: None,
                role: OrganizerRole::Volunteer,
                experience_points: 0,
                level: 0,
                streak_days: 0,
                volunteer_hours: 0,
                impact_score: 0,
            },
            created_at: Utc.with_ymd_and_hms(2025, 5, 1, 0, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2025, 5, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_patch_merges_only_set_fields() {
        let mut event = sample_event();
        let patch = EventPatch {
            title: Some("Beach cleanup".to_string()),
            capacity: Some(30),
            ..Default::default()
        };

        patch.apply(&mut event);

        assert_eq!(event.title, "Beach cleanup");
        assert_eq!(event.capacity, 30);
        assert_eq!(event.description, "Morning cleanup");
        assert_eq!(event.status, EventStatus::Published);
    }

    #[test]
    fn test_patch_can_clear_optional_field() {
        let mut event = sample_event();
        event.cover_image = Some("https://img.example/cover.png".to_string());

        let patch = EventPatch {
            cover_image: Some(None),
            ..Default::default()
        };
        patch.apply(&mut event);

        assert!(event.cover_image.is_none());
    }

    #[test]
    fn test_patch_rejects_unknown_fields() {
        let raw = serde_json::json!({ "title": "x", "not_a_field": 1 });
        let parsed: std::result::Result<EventPatch, _> = serde_json::from_value(raw);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_filter_predicates_compose_as_and() {
        let event = sample_event();

        let matching = EventFilter {
            visibility: Some(EventVisibility::Public),
            category: Some(EventCategory::Cleanup),
            ..Default::default()
        };
        assert!(matching.matches(&event));

        let wrong_category = EventFilter {
            visibility: Some(EventVisibility::Public),
            category: Some(EventCategory::Workshop),
            ..Default::default()
        };
        assert!(!wrong_category.matches(&event));

        assert!(EventFilter::default().matches(&event));
    }

    #[test]
    fn test_validate_rejects_inverted_schedule() {
        let mut event = sample_event();
        event.end_at = event.start_at - chrono::Duration::hours(1);
        assert!(event.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_capacity() {
        let mut event = sample_event();
        event.capacity = 0;
        assert!(event.validate().is_err());
    }
}
