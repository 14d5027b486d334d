use std::sync::Arc;

use tracing::info;

use crate::domain::models::catalog;
use crate::domain::models::notice::Notice;
use crate::domain::models::schedule::Day;
use crate::domain::models::wizard::WizardSession;
use crate::domain::ports::AvailabilityStore;
use crate::error::AppError;

pub struct SubmissionOutcome {
    pub booked: bool,
    pub notice: Option<Notice>,
}

impl SubmissionOutcome {
    fn rejected(notice: Option<Notice>) -> Self {
        Self {
            booked: false,
            notice,
        }
    }
}

pub struct BookingService {
    store: Arc<dyn AvailabilityStore>,
}

impl BookingService {
    pub fn new(store: Arc<dyn AvailabilityStore>) -> Self {
        Self { store }
    }

    // Only a missing time answers with a prompt notice; other missing
    // preconditions leave the state untouched without one.
    pub async fn submit(&self, session: &mut WizardSession) -> Result<SubmissionOutcome, AppError> {
        let (Some(date), Some(time)) = (session.state.date, session.state.time.clone()) else {
            return Ok(SubmissionOutcome::rejected(Some(Notice::choose_time())));
        };

        let Some(service) = session
            .state
            .service_id
            .as_deref()
            .and_then(catalog::service_by_id)
        else {
            return Ok(SubmissionOutcome::rejected(None));
        };
        let Some(stylist) = session
            .state
            .stylist_id
            .as_deref()
            .and_then(catalog::stylist_by_id)
        else {
            return Ok(SubmissionOutcome::rejected(None));
        };
        if !session.state.contact.is_complete() {
            return Ok(SubmissionOutcome::rejected(None));
        }

        self.store.book(session.today, date, &time).await?;
        info!(
            "booking recorded: {} {} service={} stylist={}",
            date, time, service.id, stylist.id
        );

        let notice = Notice::booking_confirmed(service, stylist, &Day::from_date(date), &time);
        session.state.reset();
        Ok(SubmissionOutcome {
            booked: true,
            notice: Some(notice),
        })
    }
}
