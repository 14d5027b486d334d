use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

pub const TIME_SLOTS: [&str; 8] = [
    "09:00", "10:00", "11:00", "12:00", "14:00", "15:00", "16:00", "17:00",
];

pub const CLOSED_WEEKDAY: Weekday = Weekday::Sun;
pub const DISPLAY_DAY_COUNT: usize = 5;
pub const SCHEDULE_HORIZON_DAYS: i64 = 14;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Day {
    pub date: NaiveDate,
    pub weekday: String,
    pub day: u32,
    pub month: String,
}

impl Day {
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            date,
            weekday: weekday_label(date.weekday()).to_string(),
            day: date.day(),
            month: month_label(date.month()).to_string(),
        }
    }
}

pub fn is_open(date: NaiveDate) -> bool {
    date.weekday() != CLOSED_WEEKDAY
}

pub fn is_valid_slot(time: &str) -> bool {
    TIME_SLOTS.contains(&time)
}

// Short de-DE labels, matching the site copy.
pub fn weekday_label(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Mo.",
        Weekday::Tue => "Di.",
        Weekday::Wed => "Mi.",
        Weekday::Thu => "Do.",
        Weekday::Fri => "Fr.",
        Weekday::Sat => "Sa.",
        Weekday::Sun => "So.",
    }
}

pub fn month_label(month: u32) -> &'static str {
    match month {
        1 => "Jan.",
        2 => "Feb.",
        3 => "März",
        4 => "Apr.",
        5 => "Mai",
        6 => "Juni",
        7 => "Juli",
        8 => "Aug.",
        9 => "Sept.",
        10 => "Okt.",
        11 => "Nov.",
        12 => "Dez.",
        _ => "",
    }
}
