//! Desktop local storage backed by a JSON file in the user data directory.

use folio_core::storage::{default_storage_path, JsonFileStore, KeyValueStore, MemoryStore};

/// Storage handed to the notes controller.
pub type LocalStorage = Box<dyn KeyValueStore>;

/// Open the on-disk store, or an in-memory one if the data directory is unusable.
///
/// Notes saved to the in-memory fallback are lost when the app exits.
pub fn open_local_storage() -> LocalStorage {
    let Some(path) = default_storage_path() else {
        tracing::warn!("No user data directory; notes will not survive a restart");
        return Box::new(MemoryStore::new());
    };

    match JsonFileStore::open(&path) {
        Ok(store) => {
            tracing::info!("Using local storage at {}", path.display());
            Box::new(store)
        }
        Err(error) => {
            tracing::warn!(
                "Failed to open local storage at {}: {}. Notes will not survive a restart",
                path.display(),
                error
            );
            Box::new(MemoryStore::new())
        }
    }
}
