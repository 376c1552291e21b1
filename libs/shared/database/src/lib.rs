pub mod mongo;

pub use mongo::{DocumentStore, StoreError};

use shared_config::AppConfig;

/// Process-wide state handed to every handler. Constructed once in `main`;
/// the store handle is never rebuilt per request.
pub struct AppState {
    pub config: AppConfig,
    pub store: DocumentStore,
}

impl AppState {
    pub async fn init(config: AppConfig) -> Self {
        let store = DocumentStore::connect(&config).await;
        Self { config, store }
    }
}
