// libs/monitoring-cell/src/services/health.rs
use std::sync::Arc;

use tracing::debug;

use shared_database::AppState;

use crate::models::StoreDiagnostics;

const MAX_REPORTED_COLLECTIONS: usize = 10;
const MAX_ERROR_CHARS: usize = 50;

pub struct StoreHealthService {
    state: Arc<AppState>,
}

impl StoreHealthService {
    pub fn new(state: Arc<AppState>) -> Self {
        Self { state }
    }

    /// Probes the document store and reports what it finds. Failures are
    /// folded into the report rather than surfaced as errors, so the
    /// endpoint stays useful when the store is down.
    pub async fn check_store(&self) -> StoreDiagnostics {
        let config = &self.state.config;
        let store = &self.state.store;

        let mut report = StoreDiagnostics {
            backend: "running".to_string(),
            database: "not available".to_string(),
            database_url: presence(&config.database_url),
            database_name: presence(&config.database_name),
            connection_status: "not connected".to_string(),
            collections: Vec::new(),
        };

        if !store.is_available() {
            return report;
        }

        report.database = "available".to_string();
        report.connection_status = "connected".to_string();

        match store.collection_names().await {
            Ok(mut names) => {
                names.truncate(MAX_REPORTED_COLLECTIONS);
                report.collections = names;
                report.database = "connected and working".to_string();
            }
            Err(e) => {
                debug!("Store probe failed: {}", e);
                report.database = format!("connected but error: {}", clip(&e.to_string()));
            }
        }

        report
    }
}

fn presence(value: &str) -> String {
    if value.is_empty() { "not set" } else { "set" }.to_string()
}

fn clip(message: &str) -> String {
    message.chars().take(MAX_ERROR_CHARS).collect()
}
