use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::Mutex;

use crate::domain::models::availability::AvailabilityMap;
use crate::domain::ports::AvailabilityStore;
use crate::domain::services::seed;
use crate::error::AppError;

// Keeps the blob in memory only, for running the demo without touching
// the filesystem. Seeds lazily on first access like the file store.
#[derive(Default)]
pub struct MemoryAvailabilityRepo {
    map: Mutex<Option<AvailabilityMap>>,
}

impl MemoryAvailabilityRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AvailabilityStore for MemoryAvailabilityRepo {
    async fn load(&self, today: NaiveDate) -> Result<AvailabilityMap, AppError> {
        let mut guard = self.map.lock().await;
        Ok(guard
            .get_or_insert_with(|| seed::demo_availability(today))
            .clone())
    }

    async fn save(&self, map: &AvailabilityMap) -> Result<(), AppError> {
        let mut guard = self.map.lock().await;
        *guard = Some(map.clone());
        Ok(())
    }

    async fn book(
        &self,
        today: NaiveDate,
        date: NaiveDate,
        time: &str,
    ) -> Result<AvailabilityMap, AppError> {
        let mut guard = self.map.lock().await;
        let map = guard.get_or_insert_with(|| seed::demo_availability(today));
        if !map.book(date, time) {
            return Err(AppError::Conflict(format!(
                "Slot {} {} is already booked",
                date, time
            )));
        }
        Ok(map.clone())
    }
}
