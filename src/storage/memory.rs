//! In-memory preference store

use std::cell::RefCell;
use std::collections::HashMap;

use super::{PreferenceResult, PreferenceStore};

/// Ephemeral preference store backed by a `HashMap`
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryPreferences {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the given entries
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let values = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            values: RefCell::new(values),
        }
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.values.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.borrow().is_empty()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> PreferenceResult<Option<String>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> PreferenceResult<()> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> PreferenceResult<()> {
        self.values.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let prefs = MemoryPreferences::new();
        assert!(prefs.get("language").unwrap().is_none());

        prefs.set("language", "hi").unwrap();
        assert_eq!(prefs.get("language").unwrap().as_deref(), Some("hi"));

        prefs.set("language", "bn").unwrap();
        assert_eq!(prefs.get("language").unwrap().as_deref(), Some("bn"));

        prefs.remove("language").unwrap();
        assert!(prefs.is_empty());
    }

    #[test]
    fn test_with_entries() {
        let prefs = MemoryPreferences::with_entries([("language", "te")]);
        assert_eq!(prefs.len(), 1);
        assert_eq!(prefs.get("language").unwrap().as_deref(), Some("te"));
    }
}
