pub mod handlers;
pub mod models;
pub mod router;

pub use models::{OpeningHours, ShopInfo};
pub use router::shop_info_routes;
