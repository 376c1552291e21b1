use futures::stream::TryStreamExt;
use mongodb::bson::{Bson, DateTime, Document};
use mongodb::{Client, Database};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error, warn};

use shared_config::AppConfig;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("document store is not available")]
    Unavailable,

    #[error("failed to serialize document: {0}")]
    Serialize(#[from] mongodb::bson::ser::Error),

    #[error("document store error: {0}")]
    Backend(#[from] mongodb::error::Error),
}

/// Generic create/read access to the document database, parametrized by
/// logical collection name.
///
/// Holds the single process-wide connection handle. When the connection
/// settings are missing or client construction fails, the store stays in a
/// degraded state and every operation fails fast with
/// [`StoreError::Unavailable`]; the connection is never re-established
/// automatically and no call is retried.
pub struct DocumentStore {
    database: Option<Database>,
}

impl DocumentStore {
    pub async fn connect(config: &AppConfig) -> Self {
        if !config.is_configured() {
            warn!("DATABASE_URL or DATABASE_NAME not set, document store is unavailable");
            return Self { database: None };
        }

        match Client::with_uri_str(&config.database_url).await {
            Ok(client) => {
                debug!("Document store client ready for database {}", config.database_name);
                Self {
                    database: Some(client.database(&config.database_name)),
                }
            }
            Err(e) => {
                error!("Failed to initialize document store client: {}", e);
                Self { database: None }
            }
        }
    }

    /// A store with no backing connection; every operation returns
    /// [`StoreError::Unavailable`].
    pub fn unavailable() -> Self {
        Self { database: None }
    }

    pub fn is_available(&self) -> bool {
        self.database.is_some()
    }

    pub fn database_name(&self) -> Option<&str> {
        self.database.as_ref().map(Database::name)
    }

    fn database(&self) -> Result<&Database, StoreError> {
        self.database.as_ref().ok_or(StoreError::Unavailable)
    }

    /// Serializes `entity` into `collection` and returns the generated id in
    /// its printable form.
    ///
    /// `created_at` and `updated_at` are stamped here with the current time;
    /// caller-supplied values for either field are overwritten.
    pub async fn create_document<T: Serialize>(
        &self,
        collection: &str,
        entity: &T,
    ) -> Result<String, StoreError> {
        let db = self.database()?;

        let mut document = mongodb::bson::to_document(entity)?;
        let now = DateTime::now();
        document.insert("created_at", now);
        document.insert("updated_at", now);

        let result = db
            .collection::<Document>(collection)
            .insert_one(document)
            .await?;

        debug!("Inserted document into {}", collection);

        Ok(id_to_string(&result.inserted_id))
    }

    /// Fetches up to `limit` documents matching the exact-match `filter`
    /// (empty filter matches all), in store-native order. Ordering by
    /// recency is the caller's concern.
    pub async fn get_documents(
        &self,
        collection: &str,
        filter: Document,
        limit: i64,
    ) -> Result<Vec<Document>, StoreError> {
        let db = self.database()?;

        let cursor = db
            .collection::<Document>(collection)
            .find(filter)
            .limit(limit)
            .await?;

        Ok(cursor.try_collect().await?)
    }

    pub async fn collection_names(&self) -> Result<Vec<String>, StoreError> {
        let db = self.database()?;
        Ok(db.list_collection_names().await?)
    }
}

/// The store-native `_id` never crosses the component boundary; callers
/// always see this printable form.
pub fn id_to_string(id: &Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use mongodb::bson::{doc, oid::ObjectId};

    #[test]
    fn object_ids_are_rendered_as_hex() {
        let oid = ObjectId::new();
        assert_eq!(id_to_string(&Bson::ObjectId(oid)), oid.to_hex());
    }

    #[tokio::test]
    async fn unconfigured_store_is_unavailable() {
        let config = AppConfig {
            database_url: String::new(),
            database_name: String::new(),
            port: 8000,
        };
        let store = DocumentStore::connect(&config).await;
        assert!(!store.is_available());
        assert!(store.database_name().is_none());
    }

    #[tokio::test]
    async fn degraded_store_fails_fast_on_create() {
        let store = DocumentStore::unavailable();
        let result = store
            .create_document("appointment", &doc! { "name": "Jo" })
            .await;
        assert_matches!(result, Err(StoreError::Unavailable));
    }

    #[tokio::test]
    async fn degraded_store_fails_fast_on_read() {
        let store = DocumentStore::unavailable();
        assert_matches!(
            store.get_documents("appointment", doc! {}, 10).await,
            Err(StoreError::Unavailable)
        );
        assert_matches!(
            store.collection_names().await,
            Err(StoreError::Unavailable)
        );
    }
}
