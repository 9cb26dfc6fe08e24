use std::sync::Arc;

use serde_json::json;
use thiserror::Error;
use tracing::info;

use crate::common::errors::ApiError;
use crate::domains::auth::JwtService;
use crate::kernel::store::{
    collections, from_document, to_document, DocumentStore, Filter, StoreError, Update,
};

use super::models::{UpsertUser, UserProfile, ADMIN_ROLE};

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("no user registered under {0}")]
    UnknownUser(String),

    #[error("credential minting failed: {0}")]
    Credential(#[from] anyhow::Error),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<DirectoryError> for ApiError {
    fn from(error: DirectoryError) -> Self {
        match error {
            DirectoryError::UnknownUser(email) => {
                ApiError::NotFound(format!("no user registered under {email}"))
            }
            DirectoryError::Credential(error) => ApiError::Internal(error),
            DirectoryError::Store(error) => ApiError::Internal(error.into()),
        }
    }
}

/// Profile stored by an upsert, plus the credential minted for it
#[derive(Debug, Clone)]
pub struct UpsertOutcome {
    pub profile: UserProfile,
    pub credential: String,
}

/// User directory over the `users` collection
///
/// Profiles are keyed by email. Writing a profile re-establishes the
/// caller's session: every upsert mints a fresh credential.
#[derive(Clone)]
pub struct UserDirectory {
    store: Arc<dyn DocumentStore>,
    jwt_service: Arc<JwtService>,
}

impl UserDirectory {
    pub fn new(store: Arc<dyn DocumentStore>, jwt_service: Arc<JwtService>) -> Self {
        Self { store, jwt_service }
    }

    /// Create or replace the profile stored under `email`
    ///
    /// A full replace of the caller-suppliable fields. An existing role
    /// survives: the open upsert endpoint can neither grant nor revoke
    /// privileges.
    pub async fn upsert(
        &self,
        email: &str,
        request: UpsertUser,
    ) -> Result<UpsertOutcome, DirectoryError> {
        let filter = Filter::new().eq("email", email);

        let existing = self.store.find_one(collections::USERS, &filter).await?;
        let role = existing
            .map(from_document::<UserProfile>)
            .transpose()?
            .and_then(|profile| profile.role);

        let profile = UserProfile {
            email: email.to_string(),
            name: request.name,
            phone: request.phone,
            role,
        };
        self.store
            .update_one(
                collections::USERS,
                &filter,
                Update::Replace(to_document(&profile)?),
                true,
            )
            .await?;

        let credential = self.jwt_service.create_token(email)?;
        info!(email, "user profile upserted");

        Ok(UpsertOutcome {
            profile,
            credential,
        })
    }

    /// Grant the admin role to an existing user
    pub async fn promote(&self, email: &str) -> Result<UserProfile, DirectoryError> {
        let filter = Filter::new().eq("email", email);

        let existing = self
            .store
            .find_one(collections::USERS, &filter)
            .await?
            .ok_or_else(|| DirectoryError::UnknownUser(email.to_string()))?;
        let mut profile: UserProfile = from_document(existing)?;

        let fields = to_document(&json!({ "role": ADMIN_ROLE }))?;
        self.store
            .update_one(collections::USERS, &filter, Update::Set(fields), false)
            .await?;

        profile.role = Some(ADMIN_ROLE.to_string());
        info!(email, "user promoted to admin");
        Ok(profile)
    }

    pub async fn get(&self, email: &str) -> Result<Option<UserProfile>, DirectoryError> {
        let filter = Filter::new().eq("email", email);
        let document = self.store.find_one(collections::USERS, &filter).await?;
        Ok(document.map(from_document).transpose()?)
    }

    /// Every stored profile. Admin-gated at the boundary, not here.
    pub async fn list(&self) -> Result<Vec<UserProfile>, DirectoryError> {
        let documents = self
            .store
            .find_many(collections::USERS, &Filter::new())
            .await?;
        let profiles: Vec<UserProfile> = documents
            .into_iter()
            .map(from_document)
            .collect::<Result<_, _>>()?;
        Ok(profiles)
    }
}
