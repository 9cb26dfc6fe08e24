use std::sync::Arc;

use crate::common::auth::AuthError;
use crate::domains::users::ADMIN_ROLE;
use crate::kernel::store::{collections, DocumentStore, Filter, StoreError};

use super::VerifiedIdentity;

/// Role checks backed by the user directory
///
/// Reads the stored profile on every check; roles granted or revoked since
/// a credential was minted take effect immediately.
#[derive(Clone)]
pub struct RoleAuthority {
    store: Arc<dyn DocumentStore>,
}

impl RoleAuthority {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Whether this email holds the admin role. Unknown emails are not admins.
    pub async fn is_admin(&self, email: &str) -> Result<bool, StoreError> {
        let filter = Filter::new().eq("email", email);
        let user = self.store.find_one(collections::USERS, &filter).await?;

        Ok(user
            .and_then(|document| {
                document
                    .get("role")
                    .and_then(|value| value.as_str())
                    .map(|role| role == ADMIN_ROLE)
            })
            .unwrap_or(false))
    }

    /// Require the verified identity to hold the admin role
    ///
    /// Fails closed: an identity with no directory entry is denied, not
    /// treated as a missing resource.
    pub async fn require_admin(&self, identity: &VerifiedIdentity) -> Result<(), AuthError> {
        if self.is_admin(&identity.email).await? {
            Ok(())
        } else {
            Err(AuthError::AdminRequired)
        }
    }
}
