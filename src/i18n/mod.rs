//! Localization
//!
//! A shared store mapping the active language to a flat key → text table.
//!
//! ```rust
//! use std::rc::Rc;
//! use nourish::i18n::{Language, LocalizationStore};
//! use nourish::storage::MemoryPreferences;
//!
//! let store = LocalizationStore::restore(Rc::new(MemoryPreferences::new()));
//! assert_eq!(store.t("nav.dashboard"), "Dashboard");
//!
//! store.set_language(Language::Hi);
//! assert_eq!(store.t("nav.dashboard"), "डैशबोर्ड");
//!
//! // Unknown keys fall back to the key itself
//! assert_eq!(store.t("nav.nowhere"), "nav.nowhere");
//! assert_eq!(store.miss_count(), 1);
//! ```
//!
//! The store is single-threaded and meant to be shared behind an `Rc`: every
//! reader holding it sees a language change immediately, and the language
//! field has exactly one writer path, [`LocalizationStore::set_language`].

mod tables;

use serde::{Deserialize, Serialize};
use std::cell::{Cell, RefCell};
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;
use thiserror::Error;

use crate::storage::{PreferenceStore, LANGUAGE_KEY};

/// Supported interface languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Hi,
    Mr,
    Gu,
    Te,
    Bn,
}

impl Language {
    /// Every supported language, baseline first
    pub const ALL: [Language; 6] = [
        Language::En,
        Language::Hi,
        Language::Mr,
        Language::Gu,
        Language::Te,
        Language::Bn,
    ];

    /// The baseline language whose table holds every key
    pub const BASELINE: Language = Language::En;

    /// Two-letter code used for persistence
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
            Language::Mr => "mr",
            Language::Gu => "gu",
            Language::Te => "te",
            Language::Bn => "bn",
        }
    }

    /// English name
    pub fn name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Hi => "Hindi",
            Language::Mr => "Marathi",
            Language::Gu => "Gujarati",
            Language::Te => "Telugu",
            Language::Bn => "Bengali",
        }
    }

    /// Name written in the language itself
    pub fn native_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Hi => "हिंदी",
            Language::Mr => "मराठी",
            Language::Gu => "ગુજરાતી",
            Language::Te => "తెలుగు",
            Language::Bn => "বাংলা",
        }
    }

    /// Parse an exact supported code
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.code() == code)
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::BASELINE
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = LanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| LanguageError::Unsupported(s.to_string()))
    }
}

/// Localization errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LanguageError {
    #[error("Unsupported language code: {0}")]
    Unsupported(String),
}

/// Shared key → text lookup keyed by the active language
pub struct LocalizationStore {
    language: Cell<Language>,
    storage: Rc<dyn PreferenceStore>,
    tables: HashMap<Language, HashMap<&'static str, &'static str>>,
    misses: Cell<u64>,
    missing: RefCell<BTreeSet<(Language, String)>>,
}

impl LocalizationStore {
    /// Create a store, restoring a previously persisted language
    ///
    /// The stored code is read exactly once. Anything other than a supported
    /// code (absent, unreadable, unknown) leaves the baseline active.
    pub fn restore(storage: Rc<dyn PreferenceStore>) -> Self {
        Self::restore_or(storage, Language::BASELINE)
    }

    /// Like [`restore`](Self::restore) but with a configurable starting language
    pub fn restore_or(storage: Rc<dyn PreferenceStore>, fallback: Language) -> Self {
        let language = match storage.get(LANGUAGE_KEY) {
            Ok(Some(code)) => match Language::from_code(&code) {
                Some(lang) => {
                    tracing::debug!(language = %lang, "Restored persisted language");
                    lang
                }
                None => {
                    tracing::debug!(code = %code, "Ignoring unrecognized persisted language");
                    fallback
                }
            },
            Ok(None) => fallback,
            Err(e) => {
                tracing::warn!("Failed to read persisted language: {}", e);
                fallback
            }
        };

        let tables = Language::ALL
            .into_iter()
            .map(|lang| (lang, tables::table(lang).iter().copied().collect()))
            .collect();

        Self {
            language: Cell::new(language),
            storage,
            tables,
            misses: Cell::new(0),
            missing: RefCell::new(BTreeSet::new()),
        }
    }

    /// Currently active language
    pub fn language(&self) -> Language {
        self.language.get()
    }

    /// Switch the active language and persist it
    ///
    /// Takes effect for every holder of this store immediately. A failed
    /// write to durable storage is logged; the in-memory switch still applies.
    pub fn set_language(&self, language: Language) {
        let previous = self.language.replace(language);

        if let Err(e) = self.storage.set(LANGUAGE_KEY, language.code()) {
            tracing::warn!(language = %language, "Failed to persist language: {}", e);
        }

        if previous != language {
            tracing::info!(from = %previous, to = %language, "Language changed");
        }
    }

    /// Switch language by code, rejecting codes outside the supported set
    pub fn set_language_code(&self, code: &str) -> Result<Language, LanguageError> {
        let language: Language = code.parse()?;
        self.set_language(language);
        Ok(language)
    }

    /// Look up `key` in the active language, falling back to the key itself
    pub fn t(&self, key: &str) -> String {
        self.lookup(key).unwrap_or(key).to_string()
    }

    /// Look up `key` in the active language without fallback
    ///
    /// Misses are counted and recorded for diagnostics.
    pub fn lookup(&self, key: &str) -> Option<&'static str> {
        let language = self.language.get();
        let found = self
            .tables
            .get(&language)
            .and_then(|table| table.get(key).copied());

        if found.is_none() {
            self.misses.set(self.misses.get() + 1);
            self.missing.borrow_mut().insert((language, key.to_string()));
            tracing::trace!(language = %language, key = %key, "Translation miss");
        }

        found
    }

    /// Whether the baseline table defines `key`
    pub fn is_known_key(&self, key: &str) -> bool {
        self.tables
            .get(&Language::BASELINE)
            .map_or(false, |table| table.contains_key(key))
    }

    /// Total number of lookups that fell back to the key
    pub fn miss_count(&self) -> u64 {
        self.misses.get()
    }

    /// Distinct `(language, key)` pairs that missed, sorted
    pub fn missing_keys(&self) -> Vec<(Language, String)> {
        self.missing.borrow().iter().cloned().collect()
    }

    /// Keys defined by the baseline but absent from `language`
    pub fn coverage_gaps(&self, language: Language) -> Vec<&'static str> {
        let Some(baseline) = self.tables.get(&Language::BASELINE) else {
            return Vec::new();
        };
        let target = self.tables.get(&language);

        let mut gaps: Vec<&'static str> = baseline
            .keys()
            .filter(|key| target.map_or(true, |t| !t.contains_key(*key)))
            .copied()
            .collect();
        gaps.sort_unstable();
        gaps
    }
}

impl fmt::Debug for LocalizationStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalizationStore")
            .field("language", &self.language.get())
            .field("misses", &self.misses.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryPreferences, PreferenceResult};

    fn memory() -> Rc<MemoryPreferences> {
        Rc::new(MemoryPreferences::new())
    }

    #[test]
    fn test_defaults_to_baseline() {
        let store = LocalizationStore::restore(memory());
        assert_eq!(store.language(), Language::En);
        assert_eq!(store.t("nav.dashboard"), "Dashboard");
        assert_eq!(store.miss_count(), 0);
    }

    #[test]
    fn test_language_codes_round_trip() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
        assert_eq!(Language::from_code("fr"), None);
        assert_eq!(Language::from_code("HI"), None);
        assert!("xx".parse::<Language>().is_err());
    }

    #[test]
    fn test_missing_key_falls_back_to_key() {
        let store = LocalizationStore::restore(memory());
        assert_eq!(store.t("nav.doesNotExist"), "nav.doesNotExist");
        assert_eq!(store.miss_count(), 1);
        assert_eq!(
            store.missing_keys(),
            vec![(Language::En, "nav.doesNotExist".to_string())]
        );
    }

    #[test]
    fn test_partial_table_falls_back_to_key_not_baseline() {
        let store = LocalizationStore::restore(memory());
        store.set_language(Language::Te);

        // Telugu defines navigation but not the disease section
        assert_eq!(store.t("nav.community"), "కమ్యూనిటీ");
        assert_eq!(store.t("disease.title"), "disease.title");
        assert_eq!(store.miss_count(), 1);
    }

    #[test]
    fn test_every_language_localizes_or_echoes_baseline_keys() {
        let store = LocalizationStore::restore(memory());

        for lang in Language::ALL {
            store.set_language(lang);
            for (key, _) in tables::table(Language::En) {
                let text = store.t(key);
                match tables::table(lang).iter().find(|(k, _)| k == key) {
                    Some((_, localized)) => assert_eq!(text, *localized),
                    None => assert_eq!(text, *key),
                }
            }
        }
    }

    #[test]
    fn test_baseline_is_superset() {
        let store = LocalizationStore::restore(memory());
        for lang in Language::ALL {
            for (key, _) in tables::table(lang) {
                assert!(store.is_known_key(key), "{} defines unknown key {}", lang, key);
            }
        }
        assert!(store.coverage_gaps(Language::En).is_empty());
        assert!(store.coverage_gaps(Language::Bn).contains(&"disease.title"));
    }

    #[test]
    fn test_set_language_persists() {
        let prefs = memory();
        let store = LocalizationStore::restore(prefs.clone());

        store.set_language(Language::Gu);
        assert_eq!(prefs.get(LANGUAGE_KEY).unwrap().as_deref(), Some("gu"));
    }

    #[test]
    fn test_set_language_code_rejects_unsupported() {
        let prefs = memory();
        let store = LocalizationStore::restore(prefs.clone());

        let err = store.set_language_code("fr").unwrap_err();
        assert_eq!(err, LanguageError::Unsupported("fr".to_string()));
        assert_eq!(store.language(), Language::En);
        assert!(prefs.get(LANGUAGE_KEY).unwrap().is_none());

        assert_eq!(store.set_language_code("mr"), Ok(Language::Mr));
        assert_eq!(store.language(), Language::Mr);
    }

    #[test]
    fn test_restart_restores_hindi() {
        let prefs = memory();
        {
            let store = LocalizationStore::restore(prefs.clone());
            store.set_language(Language::Hi);
        }

        let restarted = LocalizationStore::restore(prefs);
        assert_eq!(restarted.language(), Language::Hi);
        assert_eq!(restarted.t("nav.dashboard"), "डैशबोर्ड");
    }

    #[test]
    fn test_unrecognized_persisted_code_is_ignored() {
        let prefs = Rc::new(MemoryPreferences::with_entries([(LANGUAGE_KEY, "klingon")]));
        let store = LocalizationStore::restore_or(prefs, Language::Bn);
        assert_eq!(store.language(), Language::Bn);
    }

    #[test]
    fn test_shared_readers_see_change() {
        let store = Rc::new(LocalizationStore::restore(memory()));
        let reader = Rc::clone(&store);

        store.set_language(Language::Mr);
        assert_eq!(reader.t("common.save"), "सेव्ह करा");
    }

    struct FailingStore;

    impl PreferenceStore for FailingStore {
        fn get(&self, _key: &str) -> PreferenceResult<Option<String>> {
            Err(crate::storage::PreferenceError::Unavailable("disabled".into()))
        }
        fn set(&self, _key: &str, _value: &str) -> PreferenceResult<()> {
            Err(crate::storage::PreferenceError::Unavailable("disabled".into()))
        }
        fn remove(&self, _key: &str) -> PreferenceResult<()> {
            Ok(())
        }
    }

    #[test]
    fn test_storage_failure_does_not_block_switch() {
        let store = LocalizationStore::restore(Rc::new(FailingStore));
        assert_eq!(store.language(), Language::En);

        store.set_language(Language::Hi);
        assert_eq!(store.language(), Language::Hi);
    }
}
