// libs/appointment-cell/src/services/booking.rs
use std::cmp::Ordering;
use std::sync::Arc;

use mongodb::bson::{doc, Document};
use tracing::info;
use validator::Validate;

use shared_database::AppState;
use shared_models::schemas::DocumentSchema;

use crate::models::{Appointment, AppointmentError, AppointmentOut};

pub const DEFAULT_LIST_LIMIT: i64 = 50;

pub struct AppointmentBookingService {
    state: Arc<AppState>,
}

impl AppointmentBookingService {
    pub fn new(state: Arc<AppState>) -> Self {
        Self { state }
    }

    /// Validates and persists a new appointment, returning the generated id.
    /// Nothing is written when validation fails.
    pub async fn book_appointment(
        &self,
        appointment: Appointment,
    ) -> Result<String, AppointmentError> {
        appointment
            .validate()
            .map_err(|e| AppointmentError::Validation(e.to_string()))?;

        let id = self
            .state
            .store
            .create_document(Appointment::COLLECTION, &appointment)
            .await?;

        info!(
            "Booked appointment {} for {} on {} at {}",
            id, appointment.name, appointment.date, appointment.time
        );

        Ok(id)
    }

    /// Latest-first listing of submitted appointments.
    pub async fn list_appointments(
        &self,
        limit: i64,
    ) -> Result<Vec<AppointmentOut>, AppointmentError> {
        let mut documents = self
            .state
            .store
            .get_documents(Appointment::COLLECTION, doc! {}, limit)
            .await?;

        sort_by_recency(&mut documents);

        Ok(documents.iter().map(AppointmentOut::from_document).collect())
    }
}

/// Most recent first. Documents without `created_at` sort last; the sort is
/// stable, so equal timestamps keep store order.
pub fn sort_by_recency(documents: &mut [Document]) {
    documents.sort_by(|a, b| {
        match (
            a.get_datetime("created_at").ok(),
            b.get_datetime("created_at").ok(),
        ) {
            (Some(a), Some(b)) => b.cmp(a),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::DateTime;

    fn stamped(name: &str, millis: i64) -> Document {
        doc! { "name": name, "created_at": DateTime::from_millis(millis) }
    }

    fn names(documents: &[Document]) -> Vec<&str> {
        documents
            .iter()
            .map(|d| d.get_str("name").unwrap())
            .collect()
    }

    #[test]
    fn listing_is_most_recent_first() {
        let mut documents = vec![
            stamped("first", 1_000),
            stamped("third", 3_000),
            stamped("second", 2_000),
        ];

        sort_by_recency(&mut documents);

        assert_eq!(names(&documents), ["third", "second", "first"]);
    }

    #[test]
    fn documents_without_created_at_sort_last() {
        let mut documents = vec![
            doc! { "name": "legacy" },
            stamped("recent", 2_000),
            stamped("older", 1_000),
        ];

        sort_by_recency(&mut documents);

        assert_eq!(names(&documents), ["recent", "older", "legacy"]);
    }

    #[test]
    fn equal_timestamps_keep_store_order() {
        let mut documents = vec![
            stamped("a", 1_000),
            stamped("b", 1_000),
            stamped("c", 1_000),
        ];

        sort_by_recency(&mut documents);

        assert_eq!(names(&documents), ["a", "b", "c"]);
    }
}
