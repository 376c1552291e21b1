// libs/monitoring-cell/src/models.rs
use serde::{Deserialize, Serialize};

/// Snapshot of backend and store state returned by the diagnostics
/// endpoint. Probe failures land in `database`, never in the response
/// status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreDiagnostics {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}
