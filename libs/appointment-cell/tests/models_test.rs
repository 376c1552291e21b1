// libs/appointment-cell/tests/models_test.rs
use mongodb::bson::{self, doc, oid::ObjectId};
use serde_json::json;
use validator::Validate;

use appointment_cell::models::{Appointment, AppointmentOut, AppointmentStatus};

fn booking_payload() -> serde_json::Value {
    json!({
        "name": "Jo",
        "phone": "5551234567",
        "date": "2025-01-01",
        "time": "10:00",
        "service": "Haircut"
    })
}

#[test]
fn minimal_payload_validates_and_defaults() {
    let appointment: Appointment = serde_json::from_value(booking_payload()).unwrap();

    assert!(appointment.validate().is_ok());
    assert_eq!(appointment.status, AppointmentStatus::Pending);
    assert!(appointment.email.is_none());
    assert!(appointment.notes.is_none());
    assert!(appointment.preferred_barber.is_none());
}

#[test]
fn short_name_and_short_phone_are_both_reported() {
    let mut payload = booking_payload();
    payload["name"] = json!("J");
    payload["phone"] = json!("555");

    let appointment: Appointment = serde_json::from_value(payload).unwrap();
    let errors = appointment.validate().unwrap_err();

    assert!(errors.field_errors().contains_key("name"));
    assert!(errors.field_errors().contains_key("phone"));
}

#[test]
fn overlong_phone_is_rejected() {
    let mut payload = booking_payload();
    payload["phone"] = json!("555123456789012345678");

    let appointment: Appointment = serde_json::from_value(payload).unwrap();
    let errors = appointment.validate().unwrap_err();

    assert!(errors.field_errors().contains_key("phone"));
}

#[test]
fn invalid_email_is_rejected() {
    let mut payload = booking_payload();
    payload["email"] = json!("not-an-email");

    let appointment: Appointment = serde_json::from_value(payload).unwrap();
    let errors = appointment.validate().unwrap_err();

    assert!(errors.field_errors().contains_key("email"));
}

#[test]
fn missing_phone_is_rejected_at_deserialization() {
    let mut payload = booking_payload();
    payload.as_object_mut().unwrap().remove("phone");

    assert!(serde_json::from_value::<Appointment>(payload).is_err());
}

#[test]
fn status_outside_the_enum_is_rejected() {
    let mut payload = booking_payload();
    payload["status"] = json!("done");

    assert!(serde_json::from_value::<Appointment>(payload).is_err());
}

#[test]
fn explicit_status_is_kept() {
    let mut payload = booking_payload();
    payload["status"] = json!("confirmed");

    let appointment: Appointment = serde_json::from_value(payload).unwrap();
    assert_eq!(appointment.status, AppointmentStatus::Confirmed);
}

#[test]
fn caller_supplied_timestamps_never_reach_the_entity() {
    let mut payload = booking_payload();
    payload["created_at"] = json!("2020-01-01T00:00:00Z");

    let appointment: Appointment = serde_json::from_value(payload).unwrap();
    let document = bson::to_document(&appointment).unwrap();

    assert!(!document.contains_key("created_at"));
    assert!(!document.contains_key("updated_at"));
}

#[test]
fn document_mapping_coerces_id_and_defaults_status() {
    let oid = ObjectId::new();
    let document = doc! {
        "_id": oid,
        "name": "Jo",
        "phone": "5551234567",
        "date": "2025-01-01",
        "time": "10:00",
        "service": "Haircut"
    };

    let out = AppointmentOut::from_document(&document);

    assert_eq!(out.id, oid.to_hex());
    assert_eq!(out.status, AppointmentStatus::Pending);
    assert_eq!(out.service, "Haircut");
    assert!(out.email.is_none());
}

#[test]
fn unrecognized_stored_status_maps_to_pending() {
    let document = doc! {
        "_id": ObjectId::new(),
        "name": "Jo",
        "phone": "5551234567",
        "date": "2025-01-01",
        "time": "10:00",
        "service": "Haircut",
        "status": "archived"
    };

    let out = AppointmentOut::from_document(&document);
    assert_eq!(out.status, AppointmentStatus::Pending);
}

#[test]
fn status_serializes_in_snake_case() {
    assert_eq!(
        serde_json::to_value(AppointmentStatus::Pending).unwrap(),
        json!("pending")
    );
    assert_eq!(AppointmentStatus::Cancelled.to_string(), "cancelled");
}
