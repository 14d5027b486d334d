use chrono::{Duration, NaiveDate};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::domain::models::availability::AvailabilityMap;
use crate::domain::models::schedule::{self, TIME_SLOTS};

pub const SEED_WINDOW_DAYS: i64 = 14;

// Demo filler, not reproducible on purpose. Only the shape matters.
pub fn demo_availability(today: NaiveDate) -> AvailabilityMap {
    let mut rng = rand::thread_rng();
    let mut map = AvailabilityMap::new();
    for offset in 0..SEED_WINDOW_DAYS {
        let date = today + Duration::days(offset);
        if !schedule::is_open(date) {
            continue;
        }
        let count = rng.gen_range(1..=2);
        for slot in TIME_SLOTS.choose_multiple(&mut rng, count) {
            map.book(date, slot);
        }
    }
    debug!("seeded demo availability for {} days", map.len());
    map
}
