//! Persisted settings store.
//!
//! A single flag pair in `settings.json` controlling whether the automatic
//! check cycle runs at all and whether the desktop dialog may be attempted.

use serde::{Deserialize, Serialize};

use super::ConfigRoot;
use crate::error::Result;
use crate::persist::{atomic_write_json, load_json};

/// Persisted settings controlling check and notification behavior.
///
/// Fields absent from the file deserialize to `false`: the stores fail
/// safe to "off", never "on".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Master switch for the entire check cycle.
    #[serde(default)]
    pub automatic_check_active: bool,

    /// Whether the desktop dialog may be attempted.
    #[serde(default)]
    pub enable_interactive_notifications: bool,
}

impl Default for Settings {
    /// First-creation defaults: both flags enabled.
    fn default() -> Self {
        Self {
            automatic_check_active: true,
            enable_interactive_notifications: true,
        }
    }
}

impl Settings {
    /// Create `settings.json` with first-run defaults if it does not exist.
    ///
    /// Never overwrites an existing file.
    pub fn init(root: &ConfigRoot) -> Result<()> {
        root.ensure_dir()?;
        let path = root.settings_file();
        if !path.exists() {
            atomic_write_json(&path, &Settings::default())?;
        }
        Ok(())
    }

    /// Load settings from disk.
    pub fn load(root: &ConfigRoot) -> Result<Self> {
        load_json(&root.settings_file())
    }

    /// Persist settings using the durable-write discipline.
    pub fn save(&self, root: &ConfigRoot) -> Result<()> {
        root.ensure_dir()?;
        atomic_write_json(&root.settings_file(), self)
    }
}
