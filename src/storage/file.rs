//! File-backed preference store
//!
//! Keeps every preference in one JSON object file. The file is read once
//! when the store opens and rewritten in full on every change, so a crash
//! between writes loses at most the change in flight.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::{PreferenceError, PreferenceResult, PreferenceStore};

/// File name used inside the data directory
pub const PREFERENCES_FILE: &str = "preferences.json";

/// Preference store persisted as a JSON object on disk
#[derive(Debug)]
pub struct FilePreferences {
    path: PathBuf,
    values: RefCell<BTreeMap<String, String>>,
}

impl FilePreferences {
    /// Open (or lazily create) `preferences.json` inside `data_dir`
    pub fn open_in(data_dir: impl AsRef<Path>) -> PreferenceResult<Self> {
        Self::open(data_dir.as_ref().join(PREFERENCES_FILE))
    }

    /// Open the store at an explicit file path
    ///
    /// A missing file is treated as an empty store; the file and its parent
    /// directory are created on the first write.
    pub fn open(path: impl Into<PathBuf>) -> PreferenceResult<Self> {
        let path = path.into();

        let values = if path.exists() {
            let content = fs::read_to_string(&path)?;
            if content.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&content).map_err(|e| PreferenceError::Corruption {
                    path: path.clone(),
                    reason: e.to_string(),
                })?
            }
        } else {
            BTreeMap::new()
        };

        tracing::debug!(path = ?path, keys = values.len(), "Opened preference file");

        Ok(Self {
            path,
            values: RefCell::new(values),
        })
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> PreferenceResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(&*self.values.borrow())?;

        // Write to a sibling temp file first so readers never see a torn file
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl PreferenceStore for FilePreferences {
    fn get(&self, key: &str) -> PreferenceResult<Option<String>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> PreferenceResult<()> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&self, key: &str) -> PreferenceResult<()> {
        let removed = self.values.borrow_mut().remove(key).is_some();
        if removed {
            self.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let prefs = FilePreferences::open_in(dir.path()).unwrap();
        assert!(prefs.get("language").unwrap().is_none());
        assert!(!prefs.path().exists());
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("nested").join("data");

        {
            let prefs = FilePreferences::open_in(&nested).unwrap();
            prefs.set("language", "hi").unwrap();
        }

        let reopened = FilePreferences::open_in(&nested).unwrap();
        assert_eq!(reopened.get("language").unwrap().as_deref(), Some("hi"));
    }

    #[test]
    fn test_remove_persists() {
        let dir = tempdir().unwrap();
        let prefs = FilePreferences::open_in(dir.path()).unwrap();
        prefs.set("language", "gu").unwrap();
        prefs.remove("language").unwrap();

        let reopened = FilePreferences::open_in(dir.path()).unwrap();
        assert!(reopened.get("language").unwrap().is_none());
    }

    #[test]
    fn test_corrupt_file_is_reported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(PREFERENCES_FILE);
        fs::write(&path, "not json").unwrap();

        let err = FilePreferences::open(&path).unwrap_err();
        assert!(matches!(err, PreferenceError::Corruption { .. }));
    }
}
