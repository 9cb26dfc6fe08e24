//! Integration tests for the credential guard chain.
//!
//! Exercises both guard stages through real routes:
//! - identity verification (missing, malformed, expired, forged credentials)
//! - the admin role check layered on top of a verified identity

mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::json;
use server_core::domains::auth::Claims;
use uuid::Uuid;

use crate::common::{TestHarness, TEST_ISSUER, TEST_SECRET};

/// Sign claims the way the server does, with whatever secret the test needs.
fn sign_claims(claims: &Claims, secret: &str) -> String {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("Failed to sign claims")
}

fn claims(email: &str, expires_in: Duration, issuer: &str) -> Claims {
    let now = Utc::now();
    Claims {
        sub: email.to_string(),
        exp: (now + expires_in).timestamp(),
        iat: now.timestamp(),
        iss: issuer.to_string(),
        jti: Uuid::new_v4().to_string(),
    }
}

// =============================================================================
// Identity verification
// =============================================================================

#[tokio::test]
async fn missing_credential_is_unauthorized() {
    let harness = TestHarness::new().await;

    let response = harness.get("/booking?patient=pat@example.com", None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], json!("UnAuthorized access"));
}

#[tokio::test]
async fn malformed_credential_is_forbidden() {
    let harness = TestHarness::new().await;

    let response = harness
        .get("/booking?patient=pat@example.com", Some("not-a-jwt"))
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["message"], json!("Forbidden access"));
}

#[tokio::test]
async fn expired_credential_is_forbidden() {
    let harness = TestHarness::new().await;

    // Expired two hours ago, well past any validation leeway
    let expired = claims("pat@example.com", Duration::hours(-2), TEST_ISSUER);
    let token = sign_claims(&expired, TEST_SECRET);

    let response = harness
        .get("/booking?patient=pat@example.com", Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["message"], json!("Forbidden access"));
}

#[tokio::test]
async fn credential_signed_with_another_secret_is_forbidden() {
    let harness = TestHarness::new().await;

    let forged = claims("pat@example.com", Duration::hours(1), TEST_ISSUER);
    let token = sign_claims(&forged, "some-other-secret");

    let response = harness
        .get("/booking?patient=pat@example.com", Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn credential_from_another_issuer_is_forbidden() {
    let harness = TestHarness::new().await;

    let foreign = claims("pat@example.com", Duration::hours(1), "some-other-service");
    let token = sign_claims(&foreign, TEST_SECRET);

    let response = harness
        .get("/booking?patient=pat@example.com", Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn valid_credential_reaches_the_handler() {
    let harness = TestHarness::new().await;
    let token = harness.register("pat@example.com", "Pat").await;

    let response = harness
        .get("/booking?patient=pat@example.com", Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!([]));
}

// =============================================================================
// Admin role check
// =============================================================================

#[tokio::test]
async fn admin_route_without_credential_is_unauthorized_not_forbidden() {
    let harness = TestHarness::new().await;

    // The identity stage runs first, so a missing credential is reported
    // as 401 even on role-gated routes.
    let response = harness.get("/user", None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], json!("UnAuthorized access"));
}

#[tokio::test]
async fn verified_non_admin_is_forbidden_from_admin_routes() {
    let harness = TestHarness::new().await;
    let token = harness.register("pat@example.com", "Pat").await;

    let response = harness.get("/user", Some(&token)).await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["message"], json!("Forbidden access"));
}

#[tokio::test]
async fn admin_passes_both_guard_stages() {
    let harness = TestHarness::new().await;
    let token = harness.register_admin("boss@example.com", "Boss").await;

    let response = harness.get("/user", Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
}
