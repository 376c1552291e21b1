// libs/monitoring-cell/src/handlers.rs
use std::sync::Arc;

use axum::{extract::State, Json};

use shared_database::AppState;

use crate::models::StoreDiagnostics;
use crate::services::health::StoreHealthService;

#[axum::debug_handler]
pub async fn test_store(State(state): State<Arc<AppState>>) -> Json<StoreDiagnostics> {
    let health_service = StoreHealthService::new(state);

    Json(health_service.check_store().await)
}
