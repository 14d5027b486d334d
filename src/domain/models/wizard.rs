use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::models::availability::AvailabilityMap;
use crate::domain::models::schedule::Day;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Service,
    Stylist,
    Schedule,
    Contact,
}

impl Step {
    pub fn number(self) -> u8 {
        match self {
            Step::Service => 1,
            Step::Stylist => 2,
            Step::Schedule => 3,
            Step::Contact => 4,
        }
    }

    fn next(self) -> Option<Step> {
        match self {
            Step::Service => Some(Step::Stylist),
            Step::Stylist => Some(Step::Schedule),
            Step::Schedule => Some(Step::Contact),
            Step::Contact => None,
        }
    }

    fn prev(self) -> Option<Step> {
        match self {
            Step::Service => None,
            Step::Stylist => Some(Step::Service),
            Step::Schedule => Some(Step::Stylist),
            Step::Contact => Some(Step::Schedule),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ContactDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub note: String,
}

impl ContactDetails {
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.email.trim().is_empty()
    }
}

// Transitions that do not apply leave the state untouched instead of failing.
#[derive(Debug, Clone)]
pub struct WizardState {
    pub current_step: Step,
    pub service_id: Option<String>,
    pub stylist_id: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    pub contact: ContactDetails,
}

impl WizardState {
    pub fn new() -> Self {
        Self {
            current_step: Step::Service,
            service_id: None,
            stylist_id: None,
            date: None,
            time: None,
            contact: ContactDetails::default(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn select_service(&mut self, id: &str) {
        self.service_id = Some(id.to_string());
    }

    pub fn select_stylist(&mut self, id: &str) {
        self.stylist_id = Some(id.to_string());
    }

    // Changing the day drops the previously picked time.
    pub fn select_date(&mut self, date: NaiveDate) {
        self.date = Some(date);
        self.time = None;
    }

    pub fn select_time(&mut self, time: &str, availability: &AvailabilityMap) -> bool {
        let Some(date) = self.date else {
            return false;
        };
        if availability.is_booked(date, time) {
            return false;
        }
        self.time = Some(time.to_string());
        true
    }

    pub fn step_complete(&self) -> bool {
        match self.current_step {
            Step::Service => self.service_id.is_some(),
            Step::Stylist => self.stylist_id.is_some(),
            Step::Schedule => self.date.is_some() && self.time.is_some(),
            Step::Contact => self.contact.is_complete(),
        }
    }

    pub fn next(&mut self) -> bool {
        if !self.step_complete() {
            return false;
        }
        match self.current_step.next() {
            Some(step) => {
                self.current_step = step;
                true
            }
            None => false,
        }
    }

    pub fn back(&mut self) -> bool {
        match self.current_step.prev() {
            Some(step) => {
                self.current_step = step;
                true
            }
            None => false,
        }
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}

// The day window is computed once at mount so the offered dates do not
// drift while the dialog stays open.
#[derive(Debug, Clone)]
pub struct WizardSession {
    pub today: NaiveDate,
    pub days: Vec<Day>,
    pub state: WizardState,
}

impl WizardSession {
    pub fn mount(today: NaiveDate, days: Vec<Day>) -> Self {
        Self {
            today,
            days,
            state: WizardState::new(),
        }
    }

    pub fn offers(&self, date: NaiveDate) -> bool {
        self.days.iter().any(|d| d.date == date)
    }
}
