// Common types and utilities shared across the application

pub mod auth;
pub mod errors;

pub use auth::AuthError;
pub use errors::{ApiError, ApiResult};
