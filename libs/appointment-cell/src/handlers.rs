// libs/appointment-cell/src/handlers.rs
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use shared_database::AppState;
use shared_models::error::AppError;

use crate::models::{Appointment, AppointmentError, AppointmentOut};
use crate::services::booking::{AppointmentBookingService, DEFAULT_LIST_LIMIT};

#[derive(Debug, Deserialize)]
pub struct ListQueryParams {
    pub limit: Option<i64>,
}

#[axum::debug_handler]
pub async fn create_appointment(
    State(state): State<Arc<AppState>>,
    Json(appointment): Json<Appointment>,
) -> Result<Json<Value>, AppError> {
    let booking_service = AppointmentBookingService::new(state);

    let id = booking_service
        .book_appointment(appointment)
        .await
        .map_err(|e| match e {
            AppointmentError::Validation(msg) => AppError::ValidationError(msg),
            AppointmentError::Database(err) => AppError::Database(err.to_string()),
        })?;

    Ok(Json(json!({
        "id": id,
        "status": "ok"
    })))
}

#[axum::debug_handler]
pub async fn list_appointments(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListQueryParams>,
) -> Result<Json<Vec<AppointmentOut>>, AppError> {
    let booking_service = AppointmentBookingService::new(state);

    let appointments = booking_service
        .list_appointments(params.limit.unwrap_or(DEFAULT_LIST_LIMIT))
        .await
        .map_err(|e| match e {
            AppointmentError::Validation(msg) => AppError::ValidationError(msg),
            AppointmentError::Database(err) => AppError::Database(err.to_string()),
        })?;

    Ok(Json(appointments))
}
