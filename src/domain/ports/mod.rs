use crate::domain::models::availability::AvailabilityMap;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;

// `today` anchors the demo seed window whenever the store has to regenerate
// its content from scratch.
#[async_trait]
pub trait AvailabilityStore: Send + Sync {
    async fn load(&self, today: NaiveDate) -> Result<AvailabilityMap, AppError>;
    async fn save(&self, map: &AvailabilityMap) -> Result<(), AppError>;
    async fn book(
        &self,
        today: NaiveDate,
        date: NaiveDate,
        time: &str,
    ) -> Result<AvailabilityMap, AppError>;
}
