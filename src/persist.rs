//! Durable JSON persistence.
//!
//! Every persisted store (settings, registry) is written through
//! [`atomic_write_json`]: serialize the full structure to a temporary
//! sibling file, remove the original, then rename the temp file into
//! place. A crash mid-write leaves the original file intact.
//!
//! This gives crash-atomicity but no protection against two concurrent
//! invocations racing on the same files; last writer wins.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{Result, UpcheckError};

/// Temporary sibling path used during a durable write.
fn tmp_path(path: &Path) -> PathBuf {
    let mut os = path.as_os_str().to_os_string();
    os.push(".tmp");
    PathBuf::from(os)
}

/// Write `value` as JSON to `path` using the temp-then-rename discipline.
pub fn atomic_write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let content =
        serde_json::to_string(value).map_err(|e| UpcheckError::StoreParse {
            path: path.to_path_buf(),
            message: format!("serialization failed: {}", e),
        })?;

    let tmp = tmp_path(path);
    fs::write(&tmp, content)?;
    if path.exists() {
        fs::remove_file(path)?;
    }
    fs::rename(&tmp, path)?;

    Ok(())
}

/// Load and deserialize a JSON store file.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| UpcheckError::StoreParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    #[test]
    fn writes_and_reads_back() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("store.json");

        let mut value = BTreeMap::new();
        value.insert("key".to_string(), "value".to_string());

        atomic_write_json(&path, &value).unwrap();

        let loaded: BTreeMap<String, String> = load_json(&path).unwrap();
        assert_eq!(loaded, value);
    }

    #[test]
    fn no_temp_file_remains_after_write() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("store.json");

        atomic_write_json(&path, &serde_json::json!({"a": 1})).unwrap();

        assert!(path.exists());
        assert!(!tmp_path(&path).exists());
    }

    #[test]
    fn overwrites_existing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("store.json");

        atomic_write_json(&path, &serde_json::json!({"v": 1})).unwrap();
        atomic_write_json(&path, &serde_json::json!({"v": 2})).unwrap();

        let loaded: serde_json::Value = load_json(&path).unwrap();
        assert_eq!(loaded["v"], 2);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing.json");

        let result: Result<serde_json::Value> = load_json(&path);
        assert!(matches!(result, Err(UpcheckError::Io(_))));
    }

    #[test]
    fn load_invalid_json_is_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.json");
        std::fs::write(&path, "{not json").unwrap();

        let result: Result<serde_json::Value> = load_json(&path);
        assert!(matches!(result, Err(UpcheckError::StoreParse { .. })));
    }
}
