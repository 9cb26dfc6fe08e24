use axum::extract::{Extension, Query};
use axum::http::HeaderMap;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::common::errors::ApiResult;
use crate::domains::booking::{Admission, Booking, BookingRequest};
use crate::kernel::ServerDeps;

#[derive(Serialize)]
pub struct BookingOutcome {
    pub success: bool,
    pub booking: Booking,
}

/// POST /booking - submit a booking, public
///
/// A duplicate key is an outcome, not an error: the caller gets their
/// existing reservation back under `success: false`.
pub async fn submit_booking(
    Extension(deps): Extension<ServerDeps>,
    Json(request): Json<BookingRequest>,
) -> ApiResult<Json<BookingOutcome>> {
    let admission = deps.bookings.submit(request).await?;

    let (success, booking) = match admission {
        Admission::Admitted(booking) => (true, booking),
        Admission::Duplicate(booking) => (false, booking),
    };
    Ok(Json(BookingOutcome { success, booking }))
}

#[derive(Deserialize)]
pub struct PatientQuery {
    pub patient: String,
}

/// GET /booking?patient=X - the caller's own bookings
///
/// Requires a verified identity matching the requested patient.
pub async fn list_patient_bookings(
    Extension(deps): Extension<ServerDeps>,
    headers: HeaderMap,
    Query(query): Query<PatientQuery>,
) -> ApiResult<Json<Vec<Booking>>> {
    let identity = deps.guards.verified(&headers)?;

    let bookings = deps
        .bookings
        .list_for_patient(&identity, &query.patient)
        .await?;
    Ok(Json(bookings))
}
