//! EventPulse demo binary
//!
//! Wires the store from configuration, signs in a demo organizer and runs a
//! seeded query so a fresh checkout has something to show.

use std::sync::Arc;

use dotenv::dotenv;
use serde_json::json;
use tracing::info;

use eventpulse::{
    config::Settings,
    models::event::{EventFilter, EventVisibility},
    models::user::CurrentUser,
    services::{EventStore, StaticAuthProvider},
    storage::{FileStorage, MemoryStorage, StoragePort},
    utils::logging,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging; the guard must outlive main for the file layer
    let _guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}", eventpulse::info());

    let storage: Arc<dyn StoragePort> = match settings.storage.backend.as_str() {
        "file" => Arc::new(FileStorage::new(&settings.storage.data_dir)),
        _ => Arc::new(MemoryStorage::new()),
    };

    let auth = Arc::new(StaticAuthProvider::signed_in(
        CurrentUser::new("demo-user", "demo@example.com").with_metadata(json!({
            "name": "Demo Organizer",
            "role": "organizer",
        })),
    ));

    let store = EventStore::from_settings(storage, auth, &settings);

    let filters = EventFilter {
        visibility: Some(EventVisibility::Public),
        ..Default::default()
    };
    let events = store.query(&filters).await;

    let state = store.state();
    if let Some(error) = state.error {
        info!(error = %error, "Query finished with an error state");
    } else {
        info!(count = events.len(), "Public events available");
        for event in &events {
            info!(
                event_id = %event.id,
                title = %event.title,
                registered = event.registered_count,
                capacity = event.capacity,
                "Event"
            );
        }
    }

    Ok(())
}
