//! Authorization error taxonomy shared by the guard chain and the handlers.
//!
//! The guards themselves live in the auth domain; this module only defines
//! how their rejections are typed and how those rejections map onto the
//! request-level error taxonomy.

mod errors;

pub use errors::AuthError;
