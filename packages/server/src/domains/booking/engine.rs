use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::Mutex;
use tracing::info;
use uuid::Uuid;

use crate::common::errors::ApiError;
use crate::domains::auth::VerifiedIdentity;
use crate::kernel::store::{
    collections, from_document, to_document, DocumentStore, Filter, StoreError,
};

use super::models::{Admission, Booking, BookingRequest, Treatment, TreatmentAvailability};

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("patients may only list their own bookings")]
    NotOwner,

    #[error("unknown treatment: {0}")]
    UnknownTreatment(String),

    #[error("treatment {treatment} offers no slot {slot}")]
    SlotNotOffered { treatment: String, slot: String },

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<BookingError> for ApiError {
    fn from(error: BookingError) -> Self {
        match error {
            BookingError::NotOwner => ApiError::Forbidden,
            BookingError::UnknownTreatment(_) | BookingError::SlotNotOffered { .. } => {
                ApiError::BadRequest(error.to_string())
            }
            BookingError::Store(error) => ApiError::Internal(error.into()),
        }
    }
}

/// Key under which admissions are serialized and duplicates detected.
///
/// Deliberately `(treatment, date, patient)` and not `(treatment, date,
/// slot)`: one patient cannot hold two bookings for a treatment on a day,
/// while two patients may share a slot. The availability view is what steers
/// later callers away from taken slots.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct BookingKey {
    treatment: String,
    date: String,
    patient: String,
}

impl BookingKey {
    fn of(request: &BookingRequest) -> Self {
        Self {
            treatment: request.treatment.clone(),
            date: request.date.clone(),
            patient: request.patient.clone(),
        }
    }
}

/// Booking admission and availability over the document store
///
/// Admission is serialized per key: the per-key guard is held across the
/// duplicate check and the insert, so concurrent submissions for one key
/// admit exactly once. This assumes a single process owns all writes to the
/// bookings collection.
#[derive(Clone)]
pub struct BookingEngine {
    store: Arc<dyn DocumentStore>,
    admission_gates: Arc<Mutex<HashMap<BookingKey, Arc<Mutex<()>>>>>,
}

impl BookingEngine {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            admission_gates: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Submit a booking
    ///
    /// Validates the slot against the catalog, then admits or reports the
    /// existing duplicate for the `(treatment, date, patient)` key.
    pub async fn submit(&self, request: BookingRequest) -> Result<Admission, BookingError> {
        self.validate_slot(&request).await?;

        let key = BookingKey::of(&request);
        let gate = {
            let mut gates = self.admission_gates.lock().await;
            gates.entry(key.clone()).or_default().clone()
        };

        let admission = {
            let _admitting = gate.lock().await;
            self.admit(request).await
        };

        // Drop the table entry once the table and this submitter are the
        // only holders left.
        {
            let mut gates = self.admission_gates.lock().await;
            if Arc::strong_count(&gate) == 2 {
                gates.remove(&key);
            }
        }

        admission
    }

    async fn admit(&self, request: BookingRequest) -> Result<Admission, BookingError> {
        let filter = Filter::new()
            .eq("treatment", request.treatment.as_str())
            .eq("date", request.date.as_str())
            .eq("patient", request.patient.as_str());

        if let Some(existing) = self.store.find_one(collections::BOOKINGS, &filter).await? {
            return Ok(Admission::Duplicate(from_document(existing)?));
        }

        let booking = Booking {
            id: Uuid::new_v4(),
            treatment: request.treatment,
            date: request.date,
            slot: request.slot,
            patient: request.patient,
            patient_name: request.patient_name,
            phone: request.phone,
            created_at: chrono::Utc::now(),
        };
        self.store
            .insert_one(collections::BOOKINGS, to_document(&booking)?)
            .await?;

        info!(
            treatment = %booking.treatment,
            date = %booking.date,
            slot = %booking.slot,
            "booking admitted"
        );
        Ok(Admission::Admitted(booking))
    }

    async fn validate_slot(&self, request: &BookingRequest) -> Result<(), BookingError> {
        let filter = Filter::new().eq("name", request.treatment.as_str());
        let document = self
            .store
            .find_one(collections::SERVICES, &filter)
            .await?
            .ok_or_else(|| BookingError::UnknownTreatment(request.treatment.clone()))?;
        let treatment: Treatment = from_document(document)?;

        if !treatment.slots.iter().any(|slot| slot == &request.slot) {
            return Err(BookingError::SlotNotOffered {
                treatment: request.treatment.clone(),
                slot: request.slot.clone(),
            });
        }
        Ok(())
    }

    /// The full treatment catalog, in insertion order.
    pub async fn treatments(&self) -> Result<Vec<Treatment>, BookingError> {
        let documents = self
            .store
            .find_many(collections::SERVICES, &Filter::new())
            .await?;
        let treatments: Vec<Treatment> = documents
            .into_iter()
            .map(from_document)
            .collect::<Result<_, _>>()?;
        Ok(treatments)
    }

    /// Remaining slots per treatment for a date
    ///
    /// Recomputed from the store on every call: configured slots minus the
    /// slots of bookings matching the treatment and date, catalog order
    /// preserved. Unknown dates yield full slot lists.
    pub async fn available_slots(
        &self,
        date: &str,
    ) -> Result<Vec<TreatmentAvailability>, BookingError> {
        let treatments = self.treatments().await?;

        let documents = self
            .store
            .find_many(collections::BOOKINGS, &Filter::new().eq("date", date))
            .await?;
        let booked: Vec<Booking> = documents
            .into_iter()
            .map(from_document)
            .collect::<Result<_, _>>()?;

        let availability = treatments
            .into_iter()
            .map(|treatment| {
                let taken: Vec<&str> = booked
                    .iter()
                    .filter(|booking| booking.treatment == treatment.name)
                    .map(|booking| booking.slot.as_str())
                    .collect();
                let slots = treatment
                    .slots
                    .into_iter()
                    .filter(|slot| !taken.contains(&slot.as_str()))
                    .collect();
                TreatmentAvailability {
                    name: treatment.name,
                    slots,
                    price: treatment.price,
                }
            })
            .collect();

        Ok(availability)
    }

    /// A patient's own bookings
    ///
    /// Self-service only: the requested patient must be the verified caller.
    /// There is no admin bypass.
    pub async fn list_for_patient(
        &self,
        identity: &VerifiedIdentity,
        patient: &str,
    ) -> Result<Vec<Booking>, BookingError> {
        if identity.email != patient {
            return Err(BookingError::NotOwner);
        }

        let documents = self
            .store
            .find_many(collections::BOOKINGS, &Filter::new().eq("patient", patient))
            .await?;
        let bookings: Vec<Booking> = documents
            .into_iter()
            .map(from_document)
            .collect::<Result<_, _>>()?;
        Ok(bookings)
    }
}
