mod common;

use axum::http::StatusCode;
use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};
use common::TestApp;
use salon_booking::domain::models::availability::AvailabilityMap;
use salon_booking::domain::models::schedule::TIME_SLOTS;
use serde_json::Value;

async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn assert_seed_shape(raw: &str) {
    let blob: Value = serde_json::from_str(raw).expect("store file must hold valid JSON");
    let entries = blob.as_object().expect("store file must hold an object");
    assert!(!entries.is_empty());

    let today = Local::now().date_naive();
    for (key, times) in entries {
        let day = date(key);
        assert!(day >= today, "seeded day {} lies in the past", key);
        assert!(day < today + Duration::days(14), "seeded day {} outside window", key);
        assert_ne!(day.weekday(), Weekday::Sun, "closed day {} was seeded", key);

        let times = times.as_array().expect("entry must be an array of labels");
        assert!((1..=2).contains(&times.len()), "expected 1-2 seeded slots");
        for time in times {
            assert!(TIME_SLOTS.contains(&time.as_str().unwrap()));
        }
    }
}

#[tokio::test]
async fn test_slots_reflect_saved_bookings() {
    let app = TestApp::new().await;

    let mut map = AvailabilityMap::new();
    map.book(date("2030-06-03"), "09:00");
    map.book(date("2030-06-03"), "15:00");
    app.state.store.save(&map).await.unwrap();

    let res = app.get("/api/v1/slots?date=2030-06-03").await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(body["date"], "2030-06-03");

    let slots = body["slots"].as_array().unwrap();
    assert_eq!(slots.len(), TIME_SLOTS.len());
    for (slot, expected) in slots.iter().zip(TIME_SLOTS.iter()) {
        assert_eq!(slot["time"], *expected, "slots keep the fixed order");
        let should_be_booked = *expected == "09:00" || *expected == "15:00";
        assert_eq!(slot["booked"], should_be_booked, "wrong flag for {}", expected);
    }

    // A day without bookings reads as fully free.
    let res = app.get("/api/v1/slots?date=2030-06-04").await;
    let body = parse_body(res).await;
    assert!(body["slots"].as_array().unwrap().iter().all(|s| s["booked"] == false));
}

#[tokio::test]
async fn test_slots_require_a_valid_date() {
    let app = TestApp::new().await;

    assert_eq!(app.get("/api/v1/slots").await.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        app.get("/api/v1/slots?date=tomorrowish").await.status(),
        StatusCode::BAD_REQUEST
    );
}

#[tokio::test]
async fn test_round_trip_through_persistence() {
    let app = TestApp::new().await;

    let mut map = AvailabilityMap::new();
    map.book(date("2030-06-03"), "09:00");
    map.book(date("2030-06-03"), "15:00");
    map.book(date("2030-06-05"), "11:00");
    app.state.store.save(&map).await.unwrap();

    let restored = app.state.store.load(date("2030-06-03")).await.unwrap();
    assert_eq!(restored, map);
}

#[tokio::test]
async fn test_fresh_boot_seeds_demo_data() {
    let app = TestApp::new().await;

    let raw = std::fs::read_to_string(&app.storage_file).expect("boot must persist the seed");
    assert_seed_shape(&raw);
}

#[tokio::test]
async fn test_malformed_blob_is_discarded_and_reseeded() {
    let app = TestApp::new().await;

    // Syntactically broken and well-formed-but-wrong-shaped content alike.
    let payloads = [
        "definitely not json {{{",
        r#"{"not-a-date":["09:00"]}"#,
        r#"{"2030-06-03":"09:00"}"#,
        r#"{"2030-06-03":[42]}"#,
        "[1,2,3]",
        "null",
    ];
    for payload in payloads {
        std::fs::write(&app.storage_file, payload).unwrap();

        let res = app.get("/api/v1/slots?date=2030-06-03").await;
        assert_eq!(res.status(), StatusCode::OK, "content {:?} must not surface", payload);

        let raw = std::fs::read_to_string(&app.storage_file).unwrap();
        assert_seed_shape(&raw);
    }
}
