pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use models::StoreDiagnostics;
pub use router::monitoring_routes;
pub use services::StoreHealthService;
