// libs/shop-info-cell/src/handlers.rs
use axum::Json;

use crate::models::ShopInfo;

#[axum::debug_handler]
pub async fn get_info() -> Json<ShopInfo> {
    Json(ShopInfo::current())
}
