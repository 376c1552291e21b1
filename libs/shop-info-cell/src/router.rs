// libs/shop-info-cell/src/router.rs
use axum::{routing::get, Router};

use crate::handlers;

pub fn shop_info_routes() -> Router {
    Router::new().route("/", get(handlers::get_info))
}
