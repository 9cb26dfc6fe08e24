// Business domains
pub mod auth;
pub mod booking;
pub mod doctors;
pub mod users;
