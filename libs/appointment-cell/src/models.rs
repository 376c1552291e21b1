// libs/appointment-cell/src/models.rs
use std::fmt;

use mongodb::bson::Document;
use serde::{Deserialize, Serialize};
use validator::Validate;

use shared_database::mongo::id_to_string;
use shared_database::StoreError;
use shared_models::schemas::DocumentSchema;

// ==============================================================================
// CORE APPOINTMENT MODELS
// ==============================================================================

/// Appointment submission as received from the booking form.
///
/// The document id and both timestamps are assigned by the store at
/// persistence time; the caller cannot supply them.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Appointment {
    #[validate(length(min = 2, message = "name must be at least 2 characters"))]
    pub name: String,
    #[validate(email(message = "invalid email address"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[validate(length(min = 7, max = 20, message = "phone must be 7 to 20 characters"))]
    pub phone: String,
    /// Requested date, YYYY-MM-DD.
    pub date: String,
    /// Requested time, HH:MM.
    pub time: String,
    pub service: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub status: AppointmentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_barber: Option<String>,
}

impl DocumentSchema for Appointment {
    const COLLECTION: &'static str = "appointment";
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
}

impl AppointmentStatus {
    /// Read-side parsing for stored documents: anything unrecognized (or
    /// predating the field) counts as pending.
    pub fn parse_or_default(raw: &str) -> Self {
        match raw {
            "confirmed" => AppointmentStatus::Confirmed,
            "cancelled" => AppointmentStatus::Cancelled,
            _ => AppointmentStatus::Pending,
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Pending => write!(f, "pending"),
            AppointmentStatus::Confirmed => write!(f, "confirmed"),
            AppointmentStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

// ==============================================================================
// RESPONSE MODELS
// ==============================================================================

/// Appointment as returned to the site, with the store id coerced to a
/// string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentOut {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: String,
    pub date: String,
    pub time: String,
    pub service: String,
    pub notes: Option<String>,
    pub status: AppointmentStatus,
    pub preferred_barber: Option<String>,
}

impl AppointmentOut {
    /// Maps a raw stored document into the output shape. Extraction is
    /// tolerant: fields the document lacks come back empty or `None`, and
    /// `status` defaults to pending.
    pub fn from_document(document: &Document) -> Self {
        Self {
            id: document.get("_id").map(id_to_string).unwrap_or_default(),
            name: get_string(document, "name").unwrap_or_default(),
            email: get_string(document, "email"),
            phone: get_string(document, "phone").unwrap_or_default(),
            date: get_string(document, "date").unwrap_or_default(),
            time: get_string(document, "time").unwrap_or_default(),
            service: get_string(document, "service").unwrap_or_default(),
            notes: get_string(document, "notes"),
            status: document
                .get_str("status")
                .map(AppointmentStatus::parse_or_default)
                .unwrap_or_default(),
            preferred_barber: get_string(document, "preferred_barber"),
        }
    }
}

fn get_string(document: &Document, key: &str) -> Option<String> {
    document.get_str(key).ok().map(str::to_string)
}

// ==============================================================================
// ERROR TYPES
// ==============================================================================

#[derive(Debug, thiserror::Error)]
pub enum AppointmentError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("database error: {0}")]
    Database(#[from] StoreError),
}
