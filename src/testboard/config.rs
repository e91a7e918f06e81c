use crate::error::{Result, TestboardError};
use crate::model::{EXECUTIONS, RESULTS, SECTEURS, USERS};
use crate::view::DEFAULT_MAX_VISIBLE_PAGES;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for testboard, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TestboardConfig {
    /// Rows per page, per list
    #[serde(default)]
    pub page_size: PageSizes,

    /// Page numbers shown in the page bar
    #[serde(default = "default_max_visible_pages")]
    pub max_visible_pages: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageSizes {
    #[serde(default = "default_executions_page_size")]
    pub executions: usize,
    #[serde(default = "default_results_page_size")]
    pub results: usize,
    #[serde(default = "default_users_page_size")]
    pub users: usize,
    #[serde(default = "default_secteurs_page_size")]
    pub secteurs: usize,
}

fn default_max_visible_pages() -> usize {
    DEFAULT_MAX_VISIBLE_PAGES
}

fn default_executions_page_size() -> usize {
    EXECUTIONS.page_size
}

fn default_results_page_size() -> usize {
    RESULTS.page_size
}

fn default_users_page_size() -> usize {
    USERS.page_size
}

fn default_secteurs_page_size() -> usize {
    SECTEURS.page_size
}

impl Default for PageSizes {
    fn default() -> Self {
        Self {
            executions: default_executions_page_size(),
            results: default_results_page_size(),
            users: default_users_page_size(),
            secteurs: default_secteurs_page_size(),
        }
    }
}

impl Default for TestboardConfig {
    fn default() -> Self {
        Self {
            page_size: PageSizes::default(),
            max_visible_pages: DEFAULT_MAX_VISIBLE_PAGES,
        }
    }
}

impl TestboardConfig {
    /// Every key accepted by `get` and `set`.
    pub const KEYS: [&'static str; 5] = [
        "page-size.executions",
        "page-size.results",
        "page-size.users",
        "page-size.secteurs",
        "max-visible-pages",
    ];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: TestboardConfig = serde_json::from_str(&content)?;
        tracing::debug!(path = %config_path.display(), "loaded config");
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, content)?;
        tracing::debug!(path = %config_path.display(), "saved config");
        Ok(())
    }

    /// Rows per page for an entity; unknown entities get the common default.
    pub fn page_size_for(&self, entity: &str) -> usize {
        self.slot(entity).map_or(DEFAULT_PAGE_SIZE, |n| *n)
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "max-visible-pages" => Some(self.max_visible_pages.to_string()),
            _ => key
                .strip_prefix("page-size.")
                .and_then(|entity| self.slot(entity))
                .map(|n| n.to_string()),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if !Self::KEYS.contains(&key) {
            return Err(TestboardError::Config(format!("Unknown config key: {}", key)));
        }
        let n = parse_positive(key, value)?;
        if key == "max-visible-pages" {
            self.max_visible_pages = n;
            return Ok(());
        }
        let slot = key
            .strip_prefix("page-size.")
            .and_then(|entity| self.slot_mut(entity))
            .ok_or_else(|| TestboardError::Config(format!("Unknown config key: {}", key)))?;
        *slot = n;
        Ok(())
    }

    fn slot(&self, entity: &str) -> Option<&usize> {
        match entity {
            "executions" => Some(&self.page_size.executions),
            "results" => Some(&self.page_size.results),
            "users" => Some(&self.page_size.users),
            "secteurs" => Some(&self.page_size.secteurs),
            _ => None,
        }
    }

    fn slot_mut(&mut self, entity: &str) -> Option<&mut usize> {
        match entity {
            "executions" => Some(&mut self.page_size.executions),
            "results" => Some(&mut self.page_size.results),
            "users" => Some(&mut self.page_size.users),
            "secteurs" => Some(&mut self.page_size.secteurs),
            _ => None,
        }
    }
}

const DEFAULT_PAGE_SIZE: usize = 10;

fn parse_positive(key: &str, value: &str) -> Result<usize> {
    match value.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(TestboardError::Config(format!(
            "{} must be a positive integer, got '{}'",
            key, value
        ))),
    }
}
