//! # Storage Layer
//!
//! Lists are read from snapshots of the dashboard backend's list endpoints.
//! The [`DataStore`] trait hides where a snapshot comes from.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: one JSON file per collection in a data directory
//! - [`memory::InMemoryStore`]: in-memory collections for tests
//!
//! ## Snapshot Format
//!
//! ```text
//! data/
//! ├── executions.json            # GET executions/
//! ├── execution-resultats.json   # GET execution-resultats/
//! ├── users.json                 # GET users/
//! └── secteurs.json              # GET secteurs/
//! ```
//!
//! A snapshot is either the bare JSON array a list endpoint returns or a
//! paginated envelope with the items under `results`.

use crate::error::{Result, TestboardError};
use crate::view::Record;
use serde::de::DeserializeOwned;
use serde_json::Value;

pub mod fs;
pub mod memory;

/// Abstract source of list snapshots.
pub trait DataStore {
    /// Raw JSON of one collection, as served by `GET <collection>/`.
    fn load_collection(&self, collection: &str) -> Result<Value>;
}

/// Fetch and decode the full list of an entity.
pub fn list<R, S>(store: &S) -> Result<Vec<R>>
where
    R: Record + DeserializeOwned,
    S: DataStore + ?Sized,
{
    let collection = R::schema().collection;
    let items = match store.load_collection(collection)? {
        Value::Array(items) => items,
        Value::Object(mut envelope) => match envelope.remove("results") {
            Some(Value::Array(items)) => items,
            _ => {
                return Err(TestboardError::Unsupported(format!(
                    "Snapshot for '{}' is an object without a 'results' list",
                    collection
                )))
            }
        },
        _ => {
            return Err(TestboardError::Unsupported(format!(
                "Snapshot for '{}' is not a JSON list",
                collection
            )))
        }
    };

    let records = items
        .into_iter()
        .map(serde_json::from_value)
        .collect::<std::result::Result<Vec<R>, _>>()?;
    tracing::debug!(collection, count = records.len(), "loaded collection");
    Ok(records)
}
