use salon_booking::{
    api::router::create_router,
    config::Config,
    infra::factory::bootstrap_state,
    state::AppState,
};
use axum::{
    body::Body,
    http::Request,
    response::Response,
    Router,
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub storage_file: String,
    pub state: Arc<AppState>,
}

#[allow(dead_code)]
impl TestApp {
    pub async fn new() -> Self {
        let storage_file = format!("test_store_{}.json", Uuid::new_v4());

        let config = Config {
            storage_url: storage_file.clone(),
            port: 0,
        };

        let state = Arc::new(bootstrap_state(&config).await);
        let router = create_router(state.clone());

        Self {
            router,
            storage_file,
            state,
        }
    }

    pub async fn get(&self, uri: &str) -> Response {
        self.router.clone().oneshot(
            Request::builder().method("GET").uri(uri)
                .body(Body::empty()).unwrap()
        ).await.unwrap()
    }

    pub async fn post(&self, uri: &str) -> Response {
        self.router.clone().oneshot(
            Request::builder().method("POST").uri(uri)
                .body(Body::empty()).unwrap()
        ).await.unwrap()
    }

    pub async fn post_json(&self, uri: &str, payload: Value) -> Response {
        self.router.clone().oneshot(
            Request::builder().method("POST").uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(payload.to_string())).unwrap()
        ).await.unwrap()
    }

    pub async fn put_json(&self, uri: &str, payload: Value) -> Response {
        self.router.clone().oneshot(
            Request::builder().method("PUT").uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(payload.to_string())).unwrap()
        ).await.unwrap()
    }

    pub async fn delete(&self, uri: &str) -> Response {
        self.router.clone().oneshot(
            Request::builder().method("DELETE").uri(uri)
                .body(Body::empty()).unwrap()
        ).await.unwrap()
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.storage_file);
    }
}
