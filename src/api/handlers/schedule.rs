use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use chrono::{Local, NaiveDate};
use std::collections::HashMap;
use std::sync::Arc;

use crate::api::dtos::responses::SlotsResponse;
use crate::domain::models::schedule::SCHEDULE_HORIZON_DAYS;
use crate::domain::services::schedule::offerable_days;
use crate::error::AppError;
use crate::state::AppState;

pub async fn get_schedule() -> impl IntoResponse {
    let today = Local::now().date_naive();
    Json(offerable_days(today, SCHEDULE_HORIZON_DAYS))
}

pub async fn get_slots(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let date_str = params.get("date").ok_or(AppError::Validation("Date required".into()))?;
    let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid date format".into()))?;

    let today = Local::now().date_naive();
    let availability = state.store.load(today).await?;

    Ok(Json(SlotsResponse::for_date(date, &availability)))
}
