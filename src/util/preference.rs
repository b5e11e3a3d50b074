//! Persistent string preferences.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only thing the site persists is the theme choice. `BrowserStorage`
//! wraps `window.localStorage` in hydrate builds and is inert during server
//! rendering; `MemoryStore` backs tests.

#[cfg(test)]
#[path = "preference_test.rs"]
mod preference_test;

use std::cell::RefCell;
use std::collections::HashMap;

/// Storage failures.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PreferenceError {
    /// Storage is disabled, denied, or absent.
    #[error("preference storage unavailable")]
    Unavailable,
    #[error("preference read failed for {key}: {reason}")]
    Read { key: String, reason: String },
    #[error("preference write failed for {key}: {reason}")]
    Write { key: String, reason: String },
}

/// Key/value store for user preferences.
pub trait PreferenceStore {
    /// Read `key`. Absent keys yield `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns an error if storage is unavailable or the read fails.
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError>;

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if storage is unavailable or the write fails.
    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

/// Browser `localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
impl BrowserStorage {
    fn storage() -> Result<web_sys::Storage, PreferenceError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(PreferenceError::Unavailable)
    }
}

impl PreferenceStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        #[cfg(feature = "hydrate")]
        {
            Self::storage()?
                .get_item(key)
                .map_err(|e| PreferenceError::Read { key: key.to_owned(), reason: format!("{e:?}") })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Ok(None)
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        #[cfg(feature = "hydrate")]
        {
            Self::storage()?
                .set_item(key, value)
                .map_err(|e| PreferenceError::Write { key: key.to_owned(), reason: format!("{e:?}") })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Ok(())
        }
    }
}

/// In-memory store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
    unavailable: bool,
}

impl MemoryStore {
    /// A store that fails every operation, like disabled browser storage.
    pub fn unavailable() -> Self {
        Self { values: RefCell::default(), unavailable: true }
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        if self.unavailable {
            return Err(PreferenceError::Unavailable);
        }
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        if self.unavailable {
            return Err(PreferenceError::Unavailable);
        }
        self.values.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
