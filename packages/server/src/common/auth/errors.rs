use thiserror::Error;

use crate::common::errors::ApiError;
use crate::kernel::store::StoreError;

/// Authorization errors for the booking platform
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Authentication required")]
    MissingCredential,

    #[error("Invalid or expired credential")]
    InvalidCredential,

    #[error("Admin access required")]
    AdminRequired,

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl From<AuthError> for ApiError {
    fn from(error: AuthError) -> Self {
        match error {
            AuthError::MissingCredential => ApiError::Unauthorized,
            AuthError::InvalidCredential | AuthError::AdminRequired => ApiError::Forbidden,
            AuthError::Store(error) => ApiError::Internal(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_credential_is_unauthorized() {
        assert!(matches!(
            ApiError::from(AuthError::MissingCredential),
            ApiError::Unauthorized
        ));
    }

    #[test]
    fn rejections_after_presentation_are_forbidden() {
        assert!(matches!(
            ApiError::from(AuthError::InvalidCredential),
            ApiError::Forbidden
        ));
        assert!(matches!(
            ApiError::from(AuthError::AdminRequired),
            ApiError::Forbidden
        ));
    }
}
