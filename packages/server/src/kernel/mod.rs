//! Kernel module - server infrastructure and dependencies.

pub mod deps;
pub mod memory_store;
pub mod seed;
pub mod store;

pub use deps::ServerDeps;
pub use memory_store::MemoryStore;
pub use seed::seed_demo_catalog;
pub use store::{
    collections, from_document, to_document, Document, DocumentStore, Filter, StoreError, Update,
    UpdateOutcome,
};
