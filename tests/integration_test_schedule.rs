mod common;

use axum::http::StatusCode;
use chrono::{Datelike, NaiveDate, Weekday};
use common::TestApp;
use serde_json::Value;

async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let app = TestApp::new().await;
    let res = app.get("/health").await;
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_schedule_returns_five_open_days() {
    let app = TestApp::new().await;

    let res = app.get("/api/v1/schedule").await;
    assert_eq!(res.status(), StatusCode::OK);
    let days = parse_body(res).await;
    let days = days.as_array().unwrap();
    assert_eq!(days.len(), 5);

    let weekday_labels = ["Mo.", "Di.", "Mi.", "Do.", "Fr.", "Sa."];
    let mut previous: Option<NaiveDate> = None;
    for day in days {
        let parsed = NaiveDate::parse_from_str(day["date"].as_str().unwrap(), "%Y-%m-%d").unwrap();
        assert_ne!(parsed.weekday(), Weekday::Sun, "Sunday is closed");
        assert!(weekday_labels.contains(&day["weekday"].as_str().unwrap()));
        assert_eq!(day["day"].as_u64().unwrap(), parsed.day() as u64);
        assert!(!day["month"].as_str().unwrap().is_empty());

        if let Some(prev) = previous {
            assert!(parsed > prev, "days must be strictly ascending");
        }
        previous = Some(parsed);
    }
}

#[tokio::test]
async fn test_services_catalog() {
    let app = TestApp::new().await;

    let res = app.get("/api/v1/services").await;
    assert_eq!(res.status(), StatusCode::OK);
    let services = parse_body(res).await;
    let services = services.as_array().unwrap();
    assert_eq!(services.len(), 3);

    let ids: Vec<&str> = services.iter().map(|s| s["id"].as_str().unwrap()).collect();
    assert_eq!(ids, ["cut", "color", "care"]);

    let color = &services[1];
    assert_eq!(color["name"], "Color Glow");
    assert_eq!(color["price_eur"], 85);
    assert_eq!(color["duration_min"], 120);
}

#[tokio::test]
async fn test_stylists_catalog() {
    let app = TestApp::new().await;

    let res = app.get("/api/v1/stylists").await;
    assert_eq!(res.status(), StatusCode::OK);
    let stylists = parse_body(res).await;
    let stylists = stylists.as_array().unwrap();
    assert_eq!(stylists.len(), 4);

    assert_eq!(stylists[0]["id"], "any");
    assert_eq!(stylists[0]["name"], "Erste freie Stylist:in");
    assert_eq!(stylists[0]["specialty"], Value::Null);

    assert_eq!(stylists[1]["id"], "sarah");
    assert_eq!(stylists[1]["specialty"], "Master Stylistin");
}
