//! Local key-value storage
//!
//! The desktop counterpart of browser local storage: string keys mapped to
//! string values, each write replacing the value for its key as a whole.

mod file;

use std::collections::HashMap;

use crate::error::Result;

pub use file::{default_storage_path, JsonFileStore};

/// Trait for key-value storage operations
pub trait KeyValueStore {
    /// Read the value stored under `key`
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`; removing a missing key is not an error
    fn remove(&mut self, key: &str) -> Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

/// In-memory store, used in tests and when no data directory is available
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.values.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_set_replaces_value() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("pokemonNotes").unwrap(), None);

        store.set("pokemonNotes", "{}").unwrap();
        store.set("pokemonNotes", r#"{"1":"a"}"#).unwrap();
        assert_eq!(
            store.get("pokemonNotes").unwrap().as_deref(),
            Some(r#"{"1":"a"}"#)
        );

        store.remove("pokemonNotes").unwrap();
        store.remove("pokemonNotes").unwrap();
        assert_eq!(store.get("pokemonNotes").unwrap(), None);
    }
}
