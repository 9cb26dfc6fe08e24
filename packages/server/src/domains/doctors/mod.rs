//! Doctors domain - the admin-curated doctor directory

pub mod directory;
pub mod models;

pub use directory::{DoctorDirectory, DoctorError};
pub use models::Doctor;
