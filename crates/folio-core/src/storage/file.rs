//! JSON file backed key-value store

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::KeyValueStore;
use crate::error::Result;

const STORAGE_DIR_NAME: &str = "folio";
const STORAGE_FILE_NAME: &str = "local-storage.json";

/// Default location of the local storage file (`<data dir>/folio/local-storage.json`).
pub fn default_storage_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join(STORAGE_DIR_NAME).join(STORAGE_FILE_NAME))
}

/// Key-value store persisted as one JSON object file.
///
/// Every write rewrites the whole file through a temporary sibling and a
/// rename, so readers never observe a half-written store. A file that fails
/// to parse reads as empty and is replaced by the next write.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Open a store at `path`, creating parent directories as needed
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(Self { path })
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(error) if error.kind() == io::ErrorKind::NotFound => {
                return Ok(BTreeMap::new());
            }
            Err(error) => return Err(error.into()),
        };

        match serde_json::from_str(&raw) {
            Ok(values) => Ok(values),
            Err(error) => {
                tracing::warn!(
                    "Ignoring unreadable storage file {}: {}",
                    self.path.display(),
                    error
                );
                Ok(BTreeMap::new())
            }
        }
    }

    fn write_all(&self, values: &BTreeMap<String, String>) -> Result<()> {
        let serialized = serde_json::to_string_pretty(values)?;
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, serialized)?;
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut values = self.read_all()?;
        values.insert(key.to_string(), value.to_string());
        self.write_all(&values)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let mut values = self.read_all()?;
        if values.remove(key).is_some() {
            self.write_all(&values)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn store_in(dir: &tempfile::TempDir) -> JsonFileStore {
        JsonFileStore::open(dir.path().join("nested").join(STORAGE_FILE_NAME)).unwrap()
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert_eq!(store.get("pokemonNotes").unwrap(), None);
        assert!(!store.path().exists());
    }

    #[test]
    fn values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        store.set("pokemonNotes", r#"{"1":"Bulbasaur"}"#).unwrap();
        store.set("theme", "dark").unwrap();

        let reopened = store_in(&dir);
        assert_eq!(
            reopened.get("pokemonNotes").unwrap().as_deref(),
            Some(r#"{"1":"Bulbasaur"}"#)
        );
        assert_eq!(reopened.get("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn set_replaces_whole_value_for_key() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        store.set("pokemonNotes", r#"{"1":"a","2":"b"}"#).unwrap();
        store.set("pokemonNotes", r#"{"3":"c"}"#).unwrap();
        assert_eq!(
            store.get("pokemonNotes").unwrap().as_deref(),
            Some(r#"{"3":"c"}"#)
        );
    }

    #[test]
    fn corrupt_file_reads_as_empty_and_is_replaced_on_write() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        fs::write(store.path(), "{not json").unwrap();

        assert_eq!(store.get("pokemonNotes").unwrap(), None);

        store.set("pokemonNotes", "{}").unwrap();
        assert_eq!(store.get("pokemonNotes").unwrap().as_deref(), Some("{}"));
    }

    #[test]
    fn remove_deletes_only_that_key() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();
        store.remove("a").unwrap();
        store.remove("missing").unwrap();

        assert_eq!(store.get("a").unwrap(), None);
        assert_eq!(store.get("b").unwrap().as_deref(), Some("2"));
    }
}
