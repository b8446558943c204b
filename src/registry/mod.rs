//! Persisted module registry.
//!
//! Maps each registered module name to its check metadata in
//! `modules.json`. The mapping is insertion-ordered so check runs and
//! listings walk modules in registration order.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::config::ConfigRoot;
use crate::error::Result;
use crate::persist::{atomic_write_json, load_json};

/// Check metadata for a single registered module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleRecord {
    /// Endpoint returning release metadata with a `tag_name` field.
    pub api_url: String,

    /// Human-facing download page.
    pub release_url: String,

    /// Date of the last check that actually ran, `YYYY-MM-DD`.
    pub last_checked: Option<String>,

    /// Human-readable outcome of the last check.
    pub last_result: String,
}

impl ModuleRecord {
    /// A freshly registered module: never checked, empty result.
    pub fn new(api_url: impl Into<String>, release_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            release_url: release_url.into(),
            last_checked: None,
            last_result: String::new(),
        }
    }
}

/// The full persisted module registry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Registry {
    modules: IndexMap<String, ModuleRecord>,
}

impl Registry {
    /// Create `modules.json` holding an empty mapping if it does not exist.
    ///
    /// Never overwrites an existing file.
    pub fn init(root: &ConfigRoot) -> Result<()> {
        root.ensure_dir()?;
        let path = root.modules_file();
        if !path.exists() {
            atomic_write_json(&path, &Registry::default())?;
        }
        Ok(())
    }

    /// Register a module if it is not already present.
    ///
    /// Idempotent: an existing name is a no-op and the file is not
    /// rewritten.
    pub fn register(
        root: &ConfigRoot,
        name: &str,
        api_url: &str,
        release_url: &str,
    ) -> Result<()> {
        let mut registry = Self::load(root)?;
        if registry.modules.contains_key(name) {
            return Ok(());
        }
        registry
            .modules
            .insert(name.to_string(), ModuleRecord::new(api_url, release_url));
        registry.save(root)
    }

    /// Load the full registry from disk.
    pub fn load(root: &ConfigRoot) -> Result<Self> {
        load_json(&root.modules_file())
    }

    /// Persist the full registry using the durable-write discipline.
    pub fn save(&self, root: &ConfigRoot) -> Result<()> {
        atomic_write_json(&root.modules_file(), self)
    }

    /// Look up a module by name.
    pub fn get(&self, name: &str) -> Option<&ModuleRecord> {
        self.modules.get(name)
    }

    /// Mutable lookup, used by the checker to record outcomes.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut ModuleRecord> {
        self.modules.get_mut(name)
    }

    /// Registered module names in registration order.
    pub fn names(&self) -> Vec<String> {
        self.modules.keys().cloned().collect()
    }

    /// Iterate modules in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &ModuleRecord)> {
        self.modules.iter()
    }

    /// Number of registered modules.
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}
