use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::models::availability::AvailabilityMap;
use crate::domain::models::notice::Notice;
use crate::domain::models::schedule::{Day, TIME_SLOTS};
use crate::domain::models::wizard::{ContactDetails, WizardSession};

#[derive(Serialize)]
pub struct SlotView {
    pub time: String,
    pub booked: bool,
}

#[derive(Serialize)]
pub struct SlotsResponse {
    pub date: String,
    pub slots: Vec<SlotView>,
}

impl SlotsResponse {
    pub fn for_date(date: NaiveDate, availability: &AvailabilityMap) -> Self {
        Self {
            date: date.to_string(),
            slots: TIME_SLOTS
                .iter()
                .map(|time| SlotView {
                    time: time.to_string(),
                    booked: availability.is_booked(date, time),
                })
                .collect(),
        }
    }
}

#[derive(Serialize)]
pub struct WizardView {
    pub current_step: u8,
    pub service_id: Option<String>,
    pub stylist_id: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    pub contact: ContactDetails,
    pub can_advance: bool,
    pub days: Vec<Day>,
}

impl WizardView {
    pub fn from_session(session: &WizardSession) -> Self {
        Self {
            current_step: session.state.current_step.number(),
            service_id: session.state.service_id.clone(),
            stylist_id: session.state.stylist_id.clone(),
            date: session.state.date,
            time: session.state.time.clone(),
            contact: session.state.contact.clone(),
            can_advance: session.state.step_complete(),
            days: session.days.clone(),
        }
    }
}

#[derive(Serialize)]
pub struct SubmitResponse {
    pub booked: bool,
    pub notice: Option<Notice>,
    pub wizard: WizardView,
}
