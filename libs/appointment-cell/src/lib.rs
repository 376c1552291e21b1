pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

// Re-export commonly used types
pub use models::{Appointment, AppointmentError, AppointmentOut, AppointmentStatus};

// Re-export main router for integration
pub use router::appointment_routes;
