use axum::http::HeaderMap;

use crate::common::auth::AuthError;

use super::{IdentityVerifier, RoleAuthority, VerifiedIdentity};

/// Guard chain for protected handlers
///
/// Usage:
/// ```ignore
/// let identity = deps.guards.verified(&headers)?;
/// let admin = deps.guards.verified_admin(&headers).await?;
/// ```
///
/// Guards run in fixed order: identity verification first, then the role
/// check. A failed guard returns the typed rejection before any handler
/// logic runs; nothing downstream observes an unverified caller.
#[derive(Clone)]
pub struct AuthGuards {
    verifier: IdentityVerifier,
    roles: RoleAuthority,
}

impl AuthGuards {
    pub fn new(verifier: IdentityVerifier, roles: RoleAuthority) -> Self {
        Self { verifier, roles }
    }

    /// First stage: a verified identity, or the typed rejection.
    pub fn verified(&self, headers: &HeaderMap) -> Result<VerifiedIdentity, AuthError> {
        self.verifier.verify(headers)
    }

    /// Both stages: a verified identity that also holds the admin role.
    pub async fn verified_admin(&self, headers: &HeaderMap) -> Result<VerifiedIdentity, AuthError> {
        let identity = self.verifier.verify(headers)?;
        self.roles.require_admin(&identity).await?;
        Ok(identity)
    }
}
