use super::DataStore;
use crate::error::{Result, TestboardError};
use serde_json::Value;
use std::collections::HashMap;

/// In-memory snapshots for testing.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    collections: HashMap<String, Value>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_collection(mut self, collection: &str, snapshot: Value) -> Self {
        self.insert(collection, snapshot);
        self
    }

    pub fn insert(&mut self, collection: &str, snapshot: Value) {
        self.collections.insert(collection.to_string(), snapshot);
    }
}

impl DataStore for InMemoryStore {
    fn load_collection(&self, collection: &str) -> Result<Value> {
        self.collections
            .get(collection)
            .cloned()
            .ok_or_else(|| TestboardError::CollectionNotFound(collection.to_string()))
    }
}
