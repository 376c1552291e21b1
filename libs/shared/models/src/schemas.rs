//! Collection schemas shared across cells.
//!
//! Each entity type maps to exactly one document collection. The mapping is
//! declared on the type through [`DocumentSchema`], never inferred from the
//! type name at runtime, so irregular collection names stay explicit.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Static entity-to-collection mapping.
pub trait DocumentSchema {
    const COLLECTION: &'static str;
}

fn default_true() -> bool {
    true
}

/// Site visitor account. No endpoint exercises this yet; it documents the
/// schema pattern the cells follow.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct User {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(email(message = "invalid email address"))]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[validate(range(min = 0, max = 120, message = "age must be between 0 and 120"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u8>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl DocumentSchema for User {
    const COLLECTION: &'static str = "user";
}

/// Retail product sold at the shop. Same status as [`User`].
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Product {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[validate(range(min = 0.0, message = "price must not be negative"))]
    pub price: f64,
    pub category: String,
    #[serde(default = "default_true")]
    pub in_stock: bool,
}

impl DocumentSchema for Product {
    const COLLECTION: &'static str = "product";
}
