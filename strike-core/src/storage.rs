//! Session-scoped key-value storage abstraction.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Trait for abstracting the browser's session storage.
/// Platform-specific implementations should provide this
pub trait SessionStore {
    type Error: std::error::Error + 'static;

    /// Read and decode the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if a value exists but cannot be read or decoded.
    fn get<T>(&self, key: &str) -> Result<Option<T>, Self::Error>
    where
        T: DeserializeOwned;

    /// Encode `value` and store it under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be encoded or written.
    fn set<T>(&self, key: &str, value: &T) -> Result<(), Self::Error>
    where
        T: Serialize;

    /// Remove the value stored under `key`.
    fn clear(&self, key: &str);
}

/// In-memory [`SessionStore`] holding JSON text per key.
///
/// Clones share the same backing map, like two handles on one browser tab.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw JSON text stored under `key`.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    /// Store raw text without encoding, e.g. to simulate a corrupted slot.
    pub fn insert_raw(&self, key: &str, text: impl Into<String>) {
        self.entries.borrow_mut().insert(key.to_string(), text.into());
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl SessionStore for MemoryStore {
    type Error = serde_json::Error;

    fn get<T>(&self, key: &str) -> Result<Option<T>, Self::Error>
    where
        T: DeserializeOwned,
    {
        self.entries
            .borrow()
            .get(key)
            .map(|text| serde_json::from_str(text))
            .transpose()
    }

    fn set<T>(&self, key: &str, value: &T) -> Result<(), Self::Error>
    where
        T: Serialize,
    {
        let text = serde_json::to_string(value)?;
        self.entries.borrow_mut().insert(key.to_string(), text);
        Ok(())
    }

    fn clear(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}
