use chrono::{Duration, NaiveDate};

use crate::domain::models::schedule::{self, DISPLAY_DAY_COUNT, Day};

pub fn offerable_days(today: NaiveDate, horizon_days: i64) -> Vec<Day> {
    let mut days = Vec::with_capacity(DISPLAY_DAY_COUNT);
    for offset in 0..horizon_days {
        if days.len() == DISPLAY_DAY_COUNT {
            break;
        }
        let date = today + Duration::days(offset);
        if schedule::is_open(date) {
            days.push(Day::from_date(date));
        }
    }
    days
}
