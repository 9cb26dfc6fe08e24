// HTTP routes
pub mod bookings;
pub mod doctors;
pub mod health;
pub mod services;
pub mod users;

pub use bookings::*;
pub use doctors::*;
pub use health::*;
pub use services::*;
pub use users::*;
