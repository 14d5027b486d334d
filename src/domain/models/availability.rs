use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// Serializes straight to the persisted blob: `{"2024-06-03": ["09:00","15:00"]}`.
// Days without bookings carry no entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AvailabilityMap(BTreeMap<NaiveDate, Vec<String>>);

impl AvailabilityMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_booked(&self, date: NaiveDate, time: &str) -> bool {
        self.0
            .get(&date)
            .is_some_and(|times| times.iter().any(|t| t == time))
    }

    pub fn booked_on(&self, date: NaiveDate) -> &[String] {
        self.0.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn book(&mut self, date: NaiveDate, time: &str) -> bool {
        let times = self.0.entry(date).or_default();
        if times.iter().any(|t| t == time) {
            return false;
        }
        times.push(time.to_string());
        true
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NaiveDate, &Vec<String>)> {
        self.0.iter()
    }
}
