use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Treatment catalog entry
///
/// Reference data, created out-of-band (seeded or migrated). `name` is
/// unique within the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Treatment {
    pub name: String,

    /// Ordered time-slot labels offered every day
    pub slots: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<u32>,
}

/// A confirmed appointment. Written once, never updated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Booking {
    pub id: Uuid,

    /// References `Treatment.name`
    pub treatment: String,

    /// Opaque calendar-date key
    pub date: String,

    /// One of the treatment's configured slots
    pub slot: String,

    /// Patient email, taken from the submission
    pub patient: String,

    pub patient_name: String,
    pub phone: String,

    pub created_at: DateTime<Utc>,
}

/// Caller-supplied booking fields, validated at the boundary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRequest {
    pub treatment: String,
    pub date: String,
    pub slot: String,
    pub patient: String,
    pub patient_name: String,
    pub phone: String,
}

/// Outcome of a booking submission
#[derive(Debug, Clone, PartialEq)]
pub enum Admission {
    /// No prior booking held the key; this one was persisted.
    Admitted(Booking),
    /// The patient already holds a booking for this treatment and date.
    /// Carries the pre-existing record; nothing was written.
    Duplicate(Booking),
}

impl Admission {
    pub fn booking(&self) -> &Booking {
        match self {
            Admission::Admitted(booking) | Admission::Duplicate(booking) => booking,
        }
    }

    pub fn is_admitted(&self) -> bool {
        matches!(self, Admission::Admitted(_))
    }
}

/// Remaining slots for one treatment on a requested date
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TreatmentAvailability {
    pub name: String,

    /// Configured slots minus slots already booked for the date, in
    /// catalog order
    pub slots: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<u32>,
}
