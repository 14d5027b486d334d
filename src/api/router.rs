use axum::{
    Router,
    body::Body,
    extract::Request,
    routing::{get, post, put},
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{catalog, health, schedule, wizard};
use tower_http::{
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Catalog
        .route("/api/v1/services", get(catalog::list_services))
        .route("/api/v1/stylists", get(catalog::list_stylists))

        // Schedule & availability
        .route("/api/v1/schedule", get(schedule::get_schedule))
        .route("/api/v1/slots", get(schedule::get_slots))

        // Wizard lifecycle
        .route("/api/v1/wizard", post(wizard::mount_wizard).get(wizard::get_wizard).delete(wizard::dismiss_wizard))

        // Wizard transitions
        .route("/api/v1/wizard/service", post(wizard::select_service))
        .route("/api/v1/wizard/stylist", post(wizard::select_stylist))
        .route("/api/v1/wizard/date", post(wizard::select_date))
        .route("/api/v1/wizard/time", post(wizard::select_time))
        .route("/api/v1/wizard/contact", put(wizard::update_contact))
        .route("/api/v1/wizard/next", post(wizard::next_step))
        .route("/api/v1/wizard/back", post(wizard::back_step))
        .route("/api/v1/wizard/submit", post(wizard::submit_booking))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .with_state(state)
}
