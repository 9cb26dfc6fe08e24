// Doctors Portal - API Core
//
// This crate provides the backend API for a clinic booking portal: a
// treatment catalog with per-day slot availability, booking admission
// with duplicate detection, and a claims-based auth layer over an
// abstract document store.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
