use axum::{Json, response::IntoResponse};

use crate::domain::models::catalog::{SERVICES, STYLISTS};

pub async fn list_services() -> impl IntoResponse {
    Json(&SERVICES)
}

pub async fn list_stylists() -> impl IntoResponse {
    Json(&STYLISTS)
}
