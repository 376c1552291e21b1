// libs/monitoring-cell/src/router.rs
use std::sync::Arc;

use axum::{routing::get, Router};

use shared_database::AppState;

use crate::handlers;

pub fn monitoring_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::test_store))
        .with_state(state)
}
