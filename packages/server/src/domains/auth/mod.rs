//! Auth domain - signed credentials and the guards derived from them
//!
//! Responsibilities:
//! - HS256 credential minting and verification
//! - Per-request identity extraction from the Authorization header
//! - Role checks against the user directory, composed behind identity
//!   verification in a fixed-order guard chain

pub mod guards;
pub mod identity;
pub mod jwt;
pub mod roles;

pub use guards::AuthGuards;
pub use identity::{IdentityVerifier, VerifiedIdentity};
pub use jwt::{Claims, JwtService};
pub use roles::RoleAuthority;
