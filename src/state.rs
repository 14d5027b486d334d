use crate::config::Config;
use crate::domain::models::wizard::WizardSession;
use crate::domain::ports::AvailabilityStore;
use crate::domain::services::booking::BookingService;
use std::sync::Arc;
use tokio::sync::RwLock;

// One wizard session at a time; mounting again replaces the previous one.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub store: Arc<dyn AvailabilityStore>,
    pub booking_service: Arc<BookingService>,
    pub wizard: Arc<RwLock<Option<WizardSession>>>,
}
