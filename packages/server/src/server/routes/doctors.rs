use axum::extract::{Extension, Path};
use axum::http::HeaderMap;
use axum::Json;
use serde::Serialize;

use crate::common::errors::ApiResult;
use crate::domains::doctors::Doctor;
use crate::kernel::ServerDeps;

/// GET /doctor - list the directory, admin only
pub async fn list_doctors(
    Extension(deps): Extension<ServerDeps>,
    headers: HeaderMap,
) -> ApiResult<Json<Vec<Doctor>>> {
    deps.guards.verified_admin(&headers).await?;

    let doctors = deps.doctors.list().await?;
    Ok(Json(doctors))
}

/// POST /doctor - register a doctor, admin only
pub async fn add_doctor(
    Extension(deps): Extension<ServerDeps>,
    headers: HeaderMap,
    Json(doctor): Json<Doctor>,
) -> ApiResult<Json<Doctor>> {
    deps.guards.verified_admin(&headers).await?;

    let doctor = deps.doctors.add(doctor).await?;
    Ok(Json(doctor))
}

#[derive(Serialize)]
pub struct RemovalAck {
    pub deleted: bool,
}

/// DELETE /doctor/:email - remove a doctor, admin only
pub async fn remove_doctor(
    Extension(deps): Extension<ServerDeps>,
    headers: HeaderMap,
    Path(email): Path<String>,
) -> ApiResult<Json<RemovalAck>> {
    deps.guards.verified_admin(&headers).await?;

    deps.doctors.remove(&email).await?;
    Ok(Json(RemovalAck { deleted: true }))
}
