// Document store abstraction
//
// This is an INFRASTRUCTURE seam only - no business logic. Domain components
// (booking engine, user directory, doctor directory) consume the store through
// this trait so they can be constructed over any backend, including the
// in-memory one used by tests.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Collection names used by the service.
pub mod collections {
    pub const SERVICES: &str = "services";
    pub const BOOKINGS: &str = "bookings";
    pub const USERS: &str = "users";
    pub const DOCTORS: &str = "doctors";
}

/// A stored document: a flat JSON object.
pub type Document = serde_json::Map<String, Value>;

/// Errors surfaced by a store backend.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("document codec failure: {0}")]
    Codec(#[from] serde_json::Error),

    #[error("store backend failure: {0}")]
    Backend(String),
}

/// Field-equality filter over documents.
///
/// A document matches when every `(field, value)` pair is present and equal.
/// The empty filter matches everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    fields: Vec<(String, Value)>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require `field == value`.
    pub fn eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.push((field.into(), value.into()));
        self
    }

    pub fn matches(&self, document: &Document) -> bool {
        self.fields
            .iter()
            .all(|(field, value)| document.get(field) == Some(value))
    }

    /// The filter's `(field, value)` pairs, used by upserting backends to
    /// complete a freshly inserted document.
    pub fn fields(&self) -> &[(String, Value)] {
        &self.fields
    }
}

/// Update applied by [`DocumentStore::update_one`].
#[derive(Debug, Clone)]
pub enum Update {
    /// Replace the whole matched document.
    Replace(Document),
    /// Merge the given fields into the matched document, overwriting on
    /// collision and leaving other fields untouched.
    Set(Document),
}

/// Acknowledgement returned by [`DocumentStore::update_one`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateOutcome {
    /// An existing document matched the filter and was updated.
    pub matched: bool,
    /// No document matched and a new one was inserted (upsert mode).
    pub upserted: bool,
}

/// Abstract document store over named collections.
///
/// The service owns exactly one instance per process, built at startup and
/// injected into every component; there is no hidden global handle.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// First document matching `filter`, if any.
    async fn find_one(&self, collection: &str, filter: &Filter)
        -> Result<Option<Document>, StoreError>;

    /// All documents matching `filter`, in insertion order.
    async fn find_many(&self, collection: &str, filter: &Filter)
        -> Result<Vec<Document>, StoreError>;

    /// Append a document to a collection.
    async fn insert_one(&self, collection: &str, document: Document) -> Result<(), StoreError>;

    /// Apply `update` to the first match; with `upsert`, insert when nothing
    /// matches (filter fields are folded into the new document).
    async fn update_one(
        &self,
        collection: &str,
        filter: &Filter,
        update: Update,
        upsert: bool,
    ) -> Result<UpdateOutcome, StoreError>;

    /// Remove the first match. Returns whether a document was removed.
    async fn delete_one(&self, collection: &str, filter: &Filter) -> Result<bool, StoreError>;
}

/// Encode a model into a storable document.
pub fn to_document<T: Serialize>(value: &T) -> Result<Document, StoreError> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        other => Err(StoreError::Backend(format!(
            "expected an object document, got {other}"
        ))),
    }
}

/// Decode a stored document back into a model.
pub fn from_document<T: DeserializeOwned>(document: Document) -> Result<T, StoreError> {
    Ok(serde_json::from_value(Value::Object(document))?)
}
