//! Users domain - profiles, roles, and the upsert/promote operations

pub mod directory;
pub mod models;

pub use directory::{DirectoryError, UpsertOutcome, UserDirectory};
pub use models::{UpsertUser, UserProfile, ADMIN_ROLE};
