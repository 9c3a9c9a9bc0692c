//! Sample events seeded into an empty store
//!
//! The first query against an absent "events" key persists these three
//! records before returning, so a fresh install has something to show.

use chrono::{TimeZone, Utc};

use crate::models::event::{
    Event, EventCategory, EventStatus, EventVisibility, OrganizerProfile, OrganizerRole,
};

pub(crate) fn sample_events() -> Vec<Event> {
    vec![
        Event {
            id: "1".to_string(),
            title: "Riverside Park Cleanup".to_string(),
            description: "Join neighbors for a morning of litter picking and \
                          light trail maintenance along the river."
                .to_string(),
            start_at: Utc.with_ymd_and_hms(2025, 6, 14, 9, 0, 0).unwrap(),
            end_at: Utc.with_ymd_and_hms(2025, 6, 14, 12, 0, 0).unwrap(),
            location_name: "Riverside Park".to_string(),
            location_address: "1 River Road".to_string(),
            capacity: 40,
            registered_count: 12,
            category: EventCategory::Cleanup,
            tags: vec!["outdoors".to_string(), "environment".to_string()],
            visibility: EventVisibility::Public,
            price: 0.0,
            cover_image: Some("https://images.example.com/park-cleanup.jpg".to_string()),
            requirements: vec!["Closed shoes".to_string()],
            target_audience: vec!["All ages".to_string()],
            learning_objectives: vec![],
            amenities: vec!["Gloves provided".to_string(), "Water station".to_string()],
            budget_total: 250.0,
            budget_spent: 80.0,
            status: EventStatus::Published,
            organizer_id: "seed-org-1".to_string(),
            organizer: OrganizerProfile {
                id: "seed-org-1".to_string(),
                name: "Maria Lopez".to_string(),
                email: "maria@example.com".to_string(),
                avatar_url: None,
                role: OrganizerRole::Organizer,
                experience_points: 1200,
                level: 4,
                streak_days: 9,
                volunteer_hours: 86,
                impact_score: 310,
            },
            created_at: Utc.with_ymd_and_hms(2025, 5, 1, 10, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2025, 5, 1, 10, 0, 0).unwrap(),
        },
        Event {
            id: "2".to_string(),
            title: "Intro to Community Gardening".to_string(),
            description: "Hands-on workshop covering soil preparation, \
                          planting schedules and shared plot etiquette."
                .to_string(),
            start_at: Utc.with_ymd_and_hms(2025, 6, 21, 14, 0, 0).unwrap(),
            end_at: Utc.with_ymd_and_hms(2025, 6, 21, 17, 0, 0).unwrap(),
            location_name: "Greenhouse Annex".to_string(),
            location_address: "42 Garden Street".to_string(),
            capacity: 15,
            registered_count: 15,
            category: EventCategory::Workshop,
            tags: vec!["gardening".to_string(), "beginner".to_string()],
            visibility: EventVisibility::Public,
            price: 5.0,
            cover_image: None,
            requirements: vec![],
            target_audience: vec!["Beginners".to_string()],
            learning_objectives: vec![
                "Prepare a raised bed".to_string(),
                "Plan a seasonal planting rotation".to_string(),
            ],
            amenities: vec!["Tools provided".to_string()],
            budget_total: 120.0,
            budget_spent: 45.0,
            status: EventStatus::Published,
            organizer_id: "seed-org-2".to_string(),
            organizer: OrganizerProfile {
                id: "seed-org-2".to_string(),
                name: "Devon Clark".to_string(),
                email: "devon@example.com".to_string(),
                avatar_url: Some("https://images.example.com/devon.png".to_string()),
                role: OrganizerRole::Volunteer,
                experience_points: 430,
                level: 2,
                streak_days: 3,
                volunteer_hours: 24,
                impact_score: 95,
            },
            created_at: Utc.with_ymd_and_hms(2025, 5, 8, 9, 30, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2025, 5, 8, 9, 30, 0).unwrap(),
        },
        Event {
            id: "3".to_string(),
            title: "Food Bank Fundraiser Dinner".to_string(),
            description: "Ticketed dinner supporting the downtown food bank; \
                          private guest list managed by the organizing team."
                .to_string(),
            start_at: Utc.with_ymd_and_hms(2025, 7, 5, 18, 30, 0).unwrap(),
            end_at: Utc.with_ymd_and_hms(2025, 7, 5, 22, 0, 0).unwrap(),
            location_name: "Community Hall".to_string(),
            location_address: "7 Main Square".to_string(),
            capacity: 80,
            registered_count: 34,
            category: EventCategory::Fundraiser,
            tags: vec!["charity".to_string()],
            visibility: EventVisibility::Private,
            price: 35.0,
            cover_image: Some("https://images.example.com/fundraiser.jpg".to_string()),
            requirements: vec!["Invitation".to_string()],
            target_audience: vec!["Donors".to_string(), "Partners".to_string()],
            learning_objectives: vec![],
            amenities: vec!["Dinner".to_string(), "Live music".to_string()],
            budget_total: 3000.0,
            budget_spent: 1100.0,
            status: EventStatus::Draft,
            organizer_id: "seed-org-1".to_string(),
            organizer: OrganizerProfile {
                id: "seed-org-1".to_string(),
                name: "Maria Lopez".to_string(),
                email: "maria@example.com".to_string(),
                avatar_url: None,
                role: OrganizerRole::Organizer,
                experience_points: 1200,
                level: 4,
                streak_days: 9,
                volunteer_hours: 86,
                impact_score: 310,
            },
            created_at: Utc.with_ymd_and_hms(2025, 5, 20, 16, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2025, 5, 20, 16, 0, 0).unwrap(),
        },
    ]
}
