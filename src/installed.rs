//! Installed-version lookup.
//!
//! The checker needs the currently installed version of each registered
//! module. [`VersionSource`] is the seam: the default implementation
//! probes the module's own `--version` output, and a fixed in-memory
//! source backs tests and the CLI's `--module-version` override.

use std::collections::HashMap;
use std::process::Command;

use crate::error::{Result, UpcheckError};

/// Query-by-name facility for installed module versions.
pub trait VersionSource {
    /// The installed version string of `module`, or an error if the
    /// module is not installed or its version cannot be determined.
    fn installed_version(&self, module: &str) -> Result<String>;
}

/// Probes `<module> --version` and extracts a dotted version string.
#[derive(Debug, Default)]
pub struct CommandVersionSource;

impl CommandVersionSource {
    pub fn new() -> Self {
        Self
    }
}

impl VersionSource for CommandVersionSource {
    fn installed_version(&self, module: &str) -> Result<String> {
        let output = Command::new(module).arg("--version").output().map_err(|e| {
            UpcheckError::VersionLookup {
                module: module.to_string(),
                message: e.to_string(),
            }
        })?;

        if !output.status.success() {
            return Err(UpcheckError::VersionLookup {
                module: module.to_string(),
                message: format!("--version exited with {:?}", output.status.code()),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        extract_version(&stdout).ok_or_else(|| UpcheckError::VersionLookup {
            module: module.to_string(),
            message: format!("no version found in output: {}", stdout.trim()),
        })
    }
}

/// Extract a version from command output.
fn extract_version(output: &str) -> Option<String> {
    let patterns = [
        r"(\d+\.\d+\.\d+(?:-[0-9A-Za-z.-]+)?)",
        r"version\s+(\d+\.\d+)",
        r"v(\d+\.\d+)",
    ];

    for pattern in &patterns {
        if let Ok(re) = regex::Regex::new(pattern) {
            if let Some(caps) = re.captures(output) {
                if let Some(m) = caps.get(1) {
                    return Some(m.as_str().to_string());
                }
            }
        }
    }

    None
}

/// Version source backed by a fixed name-to-version map.
#[derive(Debug, Default)]
pub struct FixedVersionSource {
    versions: HashMap<String, String>,
}

impl FixedVersionSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin the version reported for a module.
    pub fn with_version(mut self, module: &str, version: &str) -> Self {
        self.versions
            .insert(module.to_string(), version.to_string());
        self
    }
}

impl VersionSource for FixedVersionSource {
    fn installed_version(&self, module: &str) -> Result<String> {
        self.versions
            .get(module)
            .cloned()
            .ok_or_else(|| UpcheckError::VersionLookup {
                module: module.to_string(),
                message: "module not found".to_string(),
            })
    }
}
