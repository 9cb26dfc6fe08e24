use std::sync::Arc;

use axum::http::HeaderMap;
use tracing::debug;

use crate::common::auth::AuthError;

use super::JwtService;

/// Verified caller identity from a signed credential
///
/// Derived per-request, never persisted. Downstream logic must take the
/// email from here, never from client-supplied fields.
#[derive(Clone, Debug)]
pub struct VerifiedIdentity {
    pub email: String,
}

/// Turns Authorization header values into verified identities
///
/// Pure verification: no store access, no side effects beyond a debug log
/// on rejection.
#[derive(Clone)]
pub struct IdentityVerifier {
    jwt_service: Arc<JwtService>,
}

impl IdentityVerifier {
    pub fn new(jwt_service: Arc<JwtService>) -> Self {
        Self { jwt_service }
    }

    /// Verify the request's Authorization header
    ///
    /// Handles both "Bearer <token>" and a raw token value. An absent header
    /// is `MissingCredential`; a present but unverifiable one is
    /// `InvalidCredential`.
    pub fn verify(&self, headers: &HeaderMap) -> Result<VerifiedIdentity, AuthError> {
        let header = headers
            .get("authorization")
            .ok_or(AuthError::MissingCredential)?;
        let value = header.to_str().map_err(|_| AuthError::InvalidCredential)?;

        let token = value.strip_prefix("Bearer ").unwrap_or(value);

        let claims = self.jwt_service.verify_token(token).map_err(|error| {
            debug!(error = %error, "credential rejected");
            AuthError::InvalidCredential
        })?;

        Ok(VerifiedIdentity { email: claims.sub })
    }
}
