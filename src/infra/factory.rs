use std::sync::Arc;

use chrono::Local;
use tokio::sync::RwLock;
use tracing::info;

use crate::config::Config;
use crate::domain::ports::AvailabilityStore;
use crate::domain::services::booking::BookingService;
use crate::infra::repositories::{
    json_file_availability_repo::JsonFileAvailabilityRepo,
    memory_availability_repo::MemoryAvailabilityRepo,
};
use crate::state::AppState;

pub async fn bootstrap_state(config: &Config) -> AppState {
    let storage_url = &config.storage_url;

    let store: Arc<dyn AvailabilityStore> = if storage_url == "memory" {
        info!("Initializing in-memory availability store...");
        Arc::new(MemoryAvailabilityRepo::new())
    } else {
        info!("Initializing JSON file availability store at {}...", storage_url);
        Arc::new(JsonFileAvailabilityRepo::new(storage_url))
    };

    // Warm-up load so a broken storage location fails the boot, not the
    // first request.
    let today = Local::now().date_naive();
    let map = store
        .load(today)
        .await
        .expect("Failed to initialize availability store");
    info!("availability store ready, {} days on record", map.len());

    AppState {
        config: config.clone(),
        booking_service: Arc::new(BookingService::new(store.clone())),
        store,
        wizard: Arc::new(RwLock::new(None)),
    }
}
