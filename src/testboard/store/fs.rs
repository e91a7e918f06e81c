use super::DataStore;
use crate::error::{Result, TestboardError};
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

/// Snapshots stored as `<root>/<collection>.json`.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn collection_path(&self, collection: &str) -> PathBuf {
        self.root.join(format!("{}.json", collection))
    }
}

impl DataStore for FileStore {
    fn load_collection(&self, collection: &str) -> Result<Value> {
        let path = self.collection_path(collection);
        if !path.exists() {
            tracing::warn!(path = %path.display(), "snapshot file missing");
            return Err(TestboardError::CollectionNotFound(collection.to_string()));
        }
        tracing::debug!(path = %path.display(), "reading snapshot");
        let content = fs::read_to_string(&path)?;
        let value = serde_json::from_str(&content)?;
        Ok(value)
    }
}
