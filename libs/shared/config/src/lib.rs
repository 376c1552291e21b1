use std::env;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub database_name: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| {
                    warn!("DATABASE_URL not set, using empty value");
                    String::new()
                }),
            database_name: env::var("DATABASE_NAME")
                .unwrap_or_else(|_| {
                    warn!("DATABASE_NAME not set, using empty value");
                    String::new()
                }),
            port: env::var("PORT")
                .ok()
                .and_then(|raw| raw.parse().ok())
                .unwrap_or(8000),
        };

        if !config.is_configured() {
            warn!("Application not fully configured - missing environment variables");
        }

        config
    }

    /// Both store settings are present. Without them the document store
    /// stays unavailable; the process itself still starts.
    pub fn is_configured(&self) -> bool {
        !self.database_url.is_empty() && !self.database_name.is_empty()
    }
}
