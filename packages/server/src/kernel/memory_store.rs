use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::store::{Document, DocumentStore, Filter, StoreError, Update, UpdateOutcome};

/// In-memory document store.
///
/// Backs development and the test suite. Deployments wanting durable storage
/// inject a driver-backed [`DocumentStore`] implementation instead; nothing in
/// the core depends on which one is in play.
#[derive(Clone, Default)]
pub struct MemoryStore {
    collections: Arc<RwLock<HashMap<String, Vec<Document>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn apply_update(existing: &mut Document, update: Update) {
    match update {
        Update::Replace(document) => *existing = document,
        Update::Set(fields) => {
            for (field, value) in fields {
                existing.insert(field, value);
            }
        }
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn find_one(
        &self,
        collection: &str,
        filter: &Filter,
    ) -> Result<Option<Document>, StoreError> {
        let collections = self.collections.read().await;
        let found = collections
            .get(collection)
            .and_then(|documents| documents.iter().find(|d| filter.matches(d)))
            .cloned();
        Ok(found)
    }

    async fn find_many(
        &self,
        collection: &str,
        filter: &Filter,
    ) -> Result<Vec<Document>, StoreError> {
        let collections = self.collections.read().await;
        let found = collections
            .get(collection)
            .map(|documents| {
                documents
                    .iter()
                    .filter(|d| filter.matches(d))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        Ok(found)
    }

    async fn insert_one(&self, collection: &str, document: Document) -> Result<(), StoreError> {
        let mut collections = self.collections.write().await;
        collections
            .entry(collection.to_string())
            .or_default()
            .push(document);
        Ok(())
    }

    async fn update_one(
        &self,
        collection: &str,
        filter: &Filter,
        update: Update,
        upsert: bool,
    ) -> Result<UpdateOutcome, StoreError> {
        let mut collections = self.collections.write().await;
        let documents = collections.entry(collection.to_string()).or_default();

        if let Some(existing) = documents.iter_mut().find(|d| filter.matches(d)) {
            apply_update(existing, update);
            return Ok(UpdateOutcome {
                matched: true,
                upserted: false,
            });
        }

        if upsert {
            let mut document = match update {
                Update::Replace(document) | Update::Set(document) => document,
            };
            // Fold the filter's equality fields in so the new document
            // actually matches the filter it was upserted under.
            for (field, value) in filter.fields() {
                document
                    .entry(field.clone())
                    .or_insert_with(|| value.clone());
            }
            documents.push(document);
            return Ok(UpdateOutcome {
                matched: false,
                upserted: true,
            });
        }

        Ok(UpdateOutcome {
            matched: false,
            upserted: false,
        })
    }

    async fn delete_one(&self, collection: &str, filter: &Filter) -> Result<bool, StoreError> {
        let mut collections = self.collections.write().await;
        let Some(documents) = collections.get_mut(collection) else {
            return Ok(false);
        };
        match documents.iter().position(|d| filter.matches(d)) {
            Some(index) => {
                documents.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
