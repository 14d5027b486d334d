use std::path::PathBuf;

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::domain::models::availability::AvailabilityMap;
use crate::domain::ports::AvailabilityStore;
use crate::domain::services::seed;
use crate::error::AppError;

// A missing or malformed file counts as "no data" and is reseeded. The lock
// serializes read-modify-write cycles within this process only.
pub struct JsonFileAvailabilityRepo {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileAvailabilityRepo {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    async fn read_map(&self) -> Option<AvailabilityMap> {
        let raw = tokio::fs::read_to_string(&self.path).await.ok()?;
        match serde_json::from_str(&raw) {
            Ok(map) => Some(map),
            Err(e) => {
                warn!(
                    "discarding malformed availability blob at {}: {}",
                    self.path.display(),
                    e
                );
                None
            }
        }
    }

    async fn write_map(&self, map: &AvailabilityMap) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }
        let raw = serde_json::to_string_pretty(map)?;
        tokio::fs::write(&self.path, raw).await?;
        Ok(())
    }

    async fn load_or_seed(&self, today: NaiveDate) -> Result<AvailabilityMap, AppError> {
        if let Some(map) = self.read_map().await {
            return Ok(map);
        }
        let seeded = seed::demo_availability(today);
        self.write_map(&seeded).await?;
        info!("seeded availability store at {}", self.path.display());
        Ok(seeded)
    }
}

#[async_trait]
impl AvailabilityStore for JsonFileAvailabilityRepo {
    async fn load(&self, today: NaiveDate) -> Result<AvailabilityMap, AppError> {
        let _guard = self.lock.lock().await;
        self.load_or_seed(today).await
    }

    async fn save(&self, map: &AvailabilityMap) -> Result<(), AppError> {
        let _guard = self.lock.lock().await;
        self.write_map(map).await
    }

    async fn book(
        &self,
        today: NaiveDate,
        date: NaiveDate,
        time: &str,
    ) -> Result<AvailabilityMap, AppError> {
        let _guard = self.lock.lock().await;
        let mut map = self.load_or_seed(today).await?;
        if !map.book(date, time) {
            return Err(AppError::Conflict(format!(
                "Slot {} {} is already booked",
                date, time
            )));
        }
        self.write_map(&map).await?;
        Ok(map)
    }
}
