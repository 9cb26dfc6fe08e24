use axum::extract::{Extension, Path};
use axum::http::HeaderMap;
use axum::Json;
use serde::Serialize;

use crate::common::errors::ApiResult;
use crate::domains::users::{UpsertUser, UserProfile};
use crate::kernel::ServerDeps;

#[derive(Serialize)]
pub struct UpsertUserResponse {
    pub user: UserProfile,
    #[serde(rename = "accessToken")]
    pub access_token: String,
}

/// PUT /user/:email - create or replace a profile, public
///
/// Returns the stored profile plus a fresh 1-hour credential: a profile
/// write re-establishes the caller's session.
pub async fn upsert_user(
    Extension(deps): Extension<ServerDeps>,
    Path(email): Path<String>,
    Json(request): Json<UpsertUser>,
) -> ApiResult<Json<UpsertUserResponse>> {
    let outcome = deps.users.upsert(&email, request).await?;
    Ok(Json(UpsertUserResponse {
        user: outcome.profile,
        access_token: outcome.credential,
    }))
}

#[derive(Serialize)]
pub struct AdminStatus {
    pub admin: bool,
}

/// GET /admin/:email - whether that email holds the admin role, public
pub async fn admin_status(
    Extension(deps): Extension<ServerDeps>,
    Path(email): Path<String>,
) -> ApiResult<Json<AdminStatus>> {
    let admin = deps.roles.is_admin(&email).await?;
    Ok(Json(AdminStatus { admin }))
}

/// PUT /user/admin/:email - grant the admin role, admin only
pub async fn promote_user(
    Extension(deps): Extension<ServerDeps>,
    headers: HeaderMap,
    Path(email): Path<String>,
) -> ApiResult<Json<UserProfile>> {
    deps.guards.verified_admin(&headers).await?;

    let profile = deps.users.promote(&email).await?;
    Ok(Json(profile))
}

/// GET /user - list all profiles, admin only
pub async fn list_users(
    Extension(deps): Extension<ServerDeps>,
    headers: HeaderMap,
) -> ApiResult<Json<Vec<UserProfile>>> {
    deps.guards.verified_admin(&headers).await?;

    let users = deps.users.list().await?;
    Ok(Json(users))
}
