//! Config root resolution.
//!
//! The core never reads the environment itself: a [`ConfigRoot`] is built
//! once at the outer boundary (CLI or host program) and passed explicitly
//! into every store and the checker, keeping the core testable without
//! environment mutation.

use std::path::{Path, PathBuf};

/// Directory name used under the home directory by default.
const DEFAULT_DIR_NAME: &str = ".upcheck";

/// Settings store file name.
const SETTINGS_FILE: &str = "settings.json";

/// Module registry file name.
const MODULES_FILE: &str = "modules.json";

/// The directory holding upcheck's persisted stores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigRoot {
    dir: PathBuf,
}

impl ConfigRoot {
    /// Create a config root at an explicit directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Config root under the user's home directory (`~/.upcheck`).
    pub fn from_home() -> Self {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("~"));
        Self {
            dir: home.join(DEFAULT_DIR_NAME),
        }
    }

    /// The root directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the settings store.
    pub fn settings_file(&self) -> PathBuf {
        self.dir.join(SETTINGS_FILE)
    }

    /// Path of the module registry.
    pub fn modules_file(&self) -> PathBuf {
        self.dir.join(MODULES_FILE)
    }

    /// Create the root directory if it does not exist.
    pub fn ensure_dir(&self) -> crate::error::Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        Ok(())
    }
}

impl Default for ConfigRoot {
    fn default() -> Self {
        Self::from_home()
    }
}
