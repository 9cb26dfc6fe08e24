use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::common::errors::ApiError;
use crate::kernel::store::{
    collections, from_document, to_document, DocumentStore, Filter, StoreError,
};

use super::models::Doctor;

#[derive(Error, Debug)]
pub enum DoctorError {
    #[error("doctor already registered under {0}")]
    AlreadyRegistered(String),

    #[error("no doctor registered under {0}")]
    UnknownDoctor(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<DoctorError> for ApiError {
    fn from(error: DoctorError) -> Self {
        match error {
            DoctorError::AlreadyRegistered(email) => {
                ApiError::BadRequest(format!("doctor already registered under {email}"))
            }
            DoctorError::UnknownDoctor(email) => {
                ApiError::NotFound(format!("no doctor registered under {email}"))
            }
            DoctorError::Store(error) => ApiError::Internal(error.into()),
        }
    }
}

/// Doctor directory over the `doctors` collection
///
/// Admin-curated reference data; the admin gate sits at the boundary.
#[derive(Clone)]
pub struct DoctorDirectory {
    store: Arc<dyn DocumentStore>,
}

impl DoctorDirectory {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Register a doctor. Rejects an email that is already registered.
    pub async fn add(&self, doctor: Doctor) -> Result<Doctor, DoctorError> {
        let filter = Filter::new().eq("email", doctor.email.as_str());
        if self
            .store
            .find_one(collections::DOCTORS, &filter)
            .await?
            .is_some()
        {
            return Err(DoctorError::AlreadyRegistered(doctor.email));
        }

        self.store
            .insert_one(collections::DOCTORS, to_document(&doctor)?)
            .await?;

        info!(email = %doctor.email, "doctor registered");
        Ok(doctor)
    }

    pub async fn list(&self) -> Result<Vec<Doctor>, DoctorError> {
        let documents = self
            .store
            .find_many(collections::DOCTORS, &Filter::new())
            .await?;
        let doctors: Vec<Doctor> = documents
            .into_iter()
            .map(from_document)
            .collect::<Result<_, _>>()?;
        Ok(doctors)
    }

    /// Remove a doctor by email
    pub async fn remove(&self, email: &str) -> Result<(), DoctorError> {
        let filter = Filter::new().eq("email", email);
        if !self.store.delete_one(collections::DOCTORS, &filter).await? {
            return Err(DoctorError::UnknownDoctor(email.to_string()));
        }

        info!(email, "doctor removed");
        Ok(())
    }
}
