//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for UI
//! clients. It dispatches to `commands/*.rs`, fills request defaults from
//! the loaded configuration and returns structured results. It never
//! prints and never exits.
//!
//! `BoardApi<S: DataStore>` is generic over the snapshot source:
//! `BoardApi<FileStore>` in the binary, `BoardApi<InMemoryStore>` in tests.

use crate::commands;
use crate::config::TestboardConfig;
use crate::error::Result;
use crate::model::{Execution, ExecutionResult, Secteur, User};
use crate::store::DataStore;
use crate::view::Record;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

pub struct BoardApi<S: DataStore> {
    store: S,
    config: TestboardConfig,
    config_dir: PathBuf,
}

impl<S: DataStore> BoardApi<S> {
    pub fn new(store: S, config: TestboardConfig, config_dir: PathBuf) -> Self {
        Self {
            store,
            config,
            config_dir,
        }
    }

    pub fn list<R>(&self, request: &ListRequest) -> Result<Listing<R>>
    where
        R: Record + DeserializeOwned + Clone,
    {
        commands::list::run(&self.store, &self.config, request)
    }

    pub fn list_executions(&self, request: &ListRequest) -> Result<Listing<Execution>> {
        self.list(request)
    }

    pub fn list_results(&self, request: &ListRequest) -> Result<Listing<ExecutionResult>> {
        self.list(request)
    }

    pub fn list_users(&self, request: &ListRequest) -> Result<Listing<User>> {
        self.list(request)
    }

    pub fn list_secteurs(&self, request: &ListRequest) -> Result<Listing<Secteur>> {
        self.list(request)
    }

    pub fn execution_stats(&self) -> Result<CmdResult> {
        commands::stats::executions(&self.store)
    }

    pub fn result_stats(&self) -> Result<CmdResult> {
        commands::stats::results(&self.store)
    }

    pub fn options<R>(&self, field: &str) -> Result<CmdResult>
    where
        R: Record + DeserializeOwned,
    {
        commands::options::run::<R, S>(&self.store, field)
    }

    /// Show or change configuration.
    ///
    /// A successful `Set` also takes effect for later calls on this facade.
    pub fn config(&mut self, action: ConfigAction) -> Result<CmdResult> {
        let result = commands::config::run(&self.config_dir, action)?;
        if let Some(config) = &result.config {
            self.config = config.clone();
        }
        Ok(result)
    }

    pub fn settings(&self) -> &TestboardConfig {
        &self.config
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::list::{ListRequest, Listing};
pub use commands::{BoardStats, CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;
    use serde_json::json;

    fn api(dir: &Path) -> BoardApi<InMemoryStore> {
        let store = InMemoryStore::new()
            .with_collection(
                "secteurs",
                json!([{"id": 1, "nom": "Retail"}, {"id": 2, "nom": "Banking"}]),
            )
            .with_collection(
                "executions",
                json!([{"id": 1, "statut": "done", "projet_nom": "Checkout"}]),
            );
        BoardApi::new(store, TestboardConfig::default(), dir.to_path_buf())
    }

    #[test]
    fn lists_through_the_store() {
        let dir = tempfile::tempdir().unwrap();
        let listing = api(dir.path())
            .list_secteurs(&ListRequest::default())
            .unwrap();
        let names: Vec<_> = listing.rows.iter().map(|s| s.nom.as_str()).collect();
        assert_eq!(names, vec!["Banking", "Retail"]);
    }

    #[test]
    fn config_changes_apply_to_later_listings() {
        let dir = tempfile::tempdir().unwrap();
        let mut api = api(dir.path());
        api.config(ConfigAction::Set(
            "page-size.secteurs".into(),
            "1".into(),
        ))
        .unwrap();
        assert_eq!(api.settings().page_size.secteurs, 1);

        let listing = api.list_secteurs(&ListRequest::default()).unwrap();
        assert_eq!(listing.rows.len(), 1);
        assert_eq!(listing.total_pages, 2);
    }

    #[test]
    fn options_dispatch_by_entity() {
        let dir = tempfile::tempdir().unwrap();
        let result = api(dir.path()).options::<Execution>("projet").unwrap();
        assert_eq!(result.options, vec!["Checkout"]);
    }

    #[test]
    fn missing_collection_surfaces_as_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(api(dir.path()).result_stats().is_err());
    }
}
