use serde::Serialize;

use crate::domain::models::catalog::{Service, Stylist};
use crate::domain::models::schedule::Day;

#[derive(Debug, Clone, Serialize)]
pub struct Notice {
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn choose_time() -> Self {
        Self {
            title: "Bitte Uhrzeit wählen".to_string(),
            description: "Wählen Sie einen freien Slot, um fortzufahren.".to_string(),
        }
    }

    pub fn booking_confirmed(service: &Service, stylist: &Stylist, day: &Day, time: &str) -> Self {
        // The "any" entry means no preference, so no name is quoted.
        let stylist_part = if stylist.is_any() {
            String::new()
        } else {
            format!(" bei {}", stylist.name)
        };
        Self {
            title: "Buchung vorgemerkt!".to_string(),
            description: format!(
                "{} am {} {:02}. {} um {} Uhr{}. Wir senden Ihnen die Bestätigung in wenigen Minuten.",
                service.name, day.weekday, day.day, day.month, time, stylist_part
            ),
        }
    }
}
