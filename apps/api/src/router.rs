use std::sync::Arc;

use axum::{
    Router,
    routing::get,
};

use appointment_cell::router::appointment_routes;
use monitoring_cell::router::monitoring_routes;
use shared_database::AppState;
use shop_info_cell::router::shop_info_routes;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(|| async { "Barbershop backend is running" }))
        .nest("/test", monitoring_routes(state.clone()))
        .nest("/api/appointments", appointment_routes(state.clone()))
        .nest("/api/info", shop_info_routes())
}
