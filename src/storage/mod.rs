//! Durable Client Storage
//!
//! Small key/value preference stores standing in for the browser's
//! `localStorage`: the active language code and the identity client's
//! persisted session live here.
//!
//! # Implementations
//!
//! - [`MemoryPreferences`]: ephemeral, used by tests and as a fallback
//! - [`FilePreferences`]: a JSON object on disk, rewritten on every change
//!
//! The web front end supplies its own `localStorage`-backed implementation.

mod error;
#[cfg(feature = "native")]
mod file;
mod memory;

pub use error::{PreferenceError, PreferenceResult};
#[cfg(feature = "native")]
pub use file::FilePreferences;
pub use memory::MemoryPreferences;

use std::rc::Rc;

/// Storage key holding the persisted language code
pub const LANGUAGE_KEY: &str = "language";

/// Storage key holding the identity client's serialized session
pub const SESSION_KEY: &str = "auth.session";

/// String key/value storage that survives restarts
pub trait PreferenceStore {
    /// Read a value, `None` when the key was never written
    fn get(&self, key: &str) -> PreferenceResult<Option<String>>;

    /// Write a value, replacing any previous one
    fn set(&self, key: &str, value: &str) -> PreferenceResult<()>;

    /// Delete a value; deleting a missing key is not an error
    fn remove(&self, key: &str) -> PreferenceResult<()>;
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for Rc<T> {
    fn get(&self, key: &str) -> PreferenceResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> PreferenceResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> PreferenceResult<()> {
        (**self).remove(key)
    }
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for Box<T> {
    fn get(&self, key: &str) -> PreferenceResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> PreferenceResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> PreferenceResult<()> {
        (**self).remove(key)
    }
}
