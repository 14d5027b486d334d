use axum::{Json, extract::State, response::IntoResponse};
use chrono::{Local, NaiveDate};
use serde_json::json;
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::{
    ContactRequest, SelectDateRequest, SelectServiceRequest, SelectStylistRequest,
    SelectTimeRequest,
};
use crate::api::dtos::responses::{SubmitResponse, WizardView};
use crate::domain::models::catalog;
use crate::domain::models::schedule::{self, SCHEDULE_HORIZON_DAYS};
use crate::domain::models::wizard::{ContactDetails, WizardSession};
use crate::domain::services::schedule::offerable_days;
use crate::error::AppError;
use crate::state::AppState;

// The dialog owns exactly one session. Mounting while one is active matches
// reopening the dialog, so the old session is discarded.
pub async fn mount_wizard(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, AppError> {
    let today = Local::now().date_naive();
    let session = WizardSession::mount(today, offerable_days(today, SCHEDULE_HORIZON_DAYS));

    let mut guard = state.wizard.write().await;
    if guard.is_some() {
        info!("mount_wizard: replacing active session");
    }
    let view = WizardView::from_session(&session);
    *guard = Some(session);

    Ok(Json(view))
}

pub async fn get_wizard(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, AppError> {
    let guard = state.wizard.read().await;
    let session = guard.as_ref()
        .ok_or(AppError::NotFound("No active wizard session".into()))?;
    Ok(Json(WizardView::from_session(session)))
}

pub async fn dismiss_wizard(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, AppError> {
    let mut guard = state.wizard.write().await;
    if guard.take().is_some() {
        info!("dismiss_wizard: session discarded");
    }
    Ok(Json(json!({ "status": "dismissed" })))
}

pub async fn select_service(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SelectServiceRequest>,
) -> Result<impl IntoResponse, AppError> {
    if catalog::service_by_id(&payload.service_id).is_none() {
        return Err(AppError::Validation("Unknown service".into()));
    }

    let mut guard = state.wizard.write().await;
    let session = guard.as_mut()
        .ok_or(AppError::NotFound("No active wizard session".into()))?;
    session.state.select_service(&payload.service_id);
    Ok(Json(WizardView::from_session(session)))
}

pub async fn select_stylist(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SelectStylistRequest>,
) -> Result<impl IntoResponse, AppError> {
    if catalog::stylist_by_id(&payload.stylist_id).is_none() {
        return Err(AppError::Validation("Unknown stylist".into()));
    }

    let mut guard = state.wizard.write().await;
    let session = guard.as_mut()
        .ok_or(AppError::NotFound("No active wizard session".into()))?;
    session.state.select_stylist(&payload.stylist_id);
    Ok(Json(WizardView::from_session(session)))
}

pub async fn select_date(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SelectDateRequest>,
) -> Result<impl IntoResponse, AppError> {
    let date = NaiveDate::parse_from_str(&payload.date, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid date format".into()))?;

    let mut guard = state.wizard.write().await;
    let session = guard.as_mut()
        .ok_or(AppError::NotFound("No active wizard session".into()))?;
    if !session.offers(date) {
        return Err(AppError::Validation("Date is not offered".into()));
    }
    session.state.select_date(date);
    Ok(Json(WizardView::from_session(session)))
}

// A taken slot is rejected without an error, the view simply keeps the
// previous time. The frontend greys those slots out anyway.
pub async fn select_time(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SelectTimeRequest>,
) -> Result<impl IntoResponse, AppError> {
    if !schedule::is_valid_slot(&payload.time) {
        return Err(AppError::Validation("Unknown time slot".into()));
    }

    let mut guard = state.wizard.write().await;
    let session = guard.as_mut()
        .ok_or(AppError::NotFound("No active wizard session".into()))?;

    let availability = state.store.load(session.today).await?;
    if !session.state.select_time(&payload.time, &availability) {
        info!("select_time: slot {} rejected", payload.time);
    }
    Ok(Json(WizardView::from_session(session)))
}

pub async fn update_contact(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ContactRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut guard = state.wizard.write().await;
    let session = guard.as_mut()
        .ok_or(AppError::NotFound("No active wizard session".into()))?;
    session.state.contact = ContactDetails {
        name: payload.name,
        email: payload.email,
        phone: payload.phone.unwrap_or_default(),
        note: payload.note.unwrap_or_default(),
    };
    Ok(Json(WizardView::from_session(session)))
}

pub async fn next_step(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, AppError> {
    let mut guard = state.wizard.write().await;
    let session = guard.as_mut()
        .ok_or(AppError::NotFound("No active wizard session".into()))?;
    session.state.next();
    Ok(Json(WizardView::from_session(session)))
}

pub async fn back_step(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, AppError> {
    let mut guard = state.wizard.write().await;
    let session = guard.as_mut()
        .ok_or(AppError::NotFound("No active wizard session".into()))?;
    session.state.back();
    Ok(Json(WizardView::from_session(session)))
}

pub async fn submit_booking(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, AppError> {
    let mut guard = state.wizard.write().await;
    let session = guard.as_mut()
        .ok_or(AppError::NotFound("No active wizard session".into()))?;

    let outcome = state.booking_service.submit(session).await?;
    Ok(Json(SubmitResponse {
        booked: outcome.booked,
        notice: outcome.notice,
        wizard: WizardView::from_session(session),
    }))
}
