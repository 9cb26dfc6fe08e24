use axum::extract::{Extension, Query};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::common::errors::{ApiError, ApiResult};
use crate::domains::booking::TreatmentAvailability;
use crate::kernel::ServerDeps;

#[derive(Serialize)]
pub struct TreatmentName {
    pub name: String,
}

/// GET /service - treatment names, public
pub async fn list_services(
    Extension(deps): Extension<ServerDeps>,
) -> ApiResult<Json<Vec<TreatmentName>>> {
    let treatments = deps.bookings.treatments().await?;
    let names = treatments
        .into_iter()
        .map(|treatment| TreatmentName {
            name: treatment.name,
        })
        .collect();
    Ok(Json(names))
}

#[derive(Deserialize)]
pub struct AvailabilityQuery {
    pub date: Option<String>,
}

/// GET /available?date=D - remaining slots per treatment, public
///
/// The date is an opaque key; an absent or empty one is rejected rather
/// than answered with a misleading full catalog.
pub async fn availability(
    Extension(deps): Extension<ServerDeps>,
    Query(query): Query<AvailabilityQuery>,
) -> ApiResult<Json<Vec<TreatmentAvailability>>> {
    let date = query
        .date
        .filter(|date| !date.is_empty())
        .ok_or_else(|| ApiError::BadRequest("date query parameter is required".to_string()))?;

    let availability = deps.bookings.available_slots(&date).await?;
    Ok(Json(availability))
}
