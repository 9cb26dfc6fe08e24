//! Booking domain - slot availability and booking admission
//!
//! The invariant-bearing core: admission under the per-patient uniqueness
//! key, availability computed as catalog slots minus booked slots, and
//! self-service-only listing.

pub mod engine;
pub mod models;

pub use engine::{BookingEngine, BookingError};
pub use models::{Admission, Booking, BookingRequest, Treatment, TreatmentAvailability};
