use std::{
    collections::BTreeMap,
    path::{
        Path,
        PathBuf,
    },
};

use tracing::warn;

use super::{
    get_data_file_path,
    load_json_from,
    save_json_to,
};
use crate::core::AppError;

const STORAGE_FILE: &str = "storage.json";

/// String key/value storage with the semantics of browser local storage:
/// values are plain strings and absent keys read as `None`.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), AppError>;
}

/// Volatile store, used when no file is available and in tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    items: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// A JSON object on disk, rewritten in full on every `set_item`.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    items: BTreeMap<String, String>,
}

impl FileStore {
    /// Opens the store at `path`. A missing file is an empty store; a
    /// malformed one is reported and treated as empty so play can continue.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let items = match load_json_from::<BTreeMap<String, String>>(&path) {
            Ok(items) => items,
            Err(e) => {
                warn!(path = %path.display(), "Ignoring unreadable storage file: {}", e);
                BTreeMap::new()
            }
        };
        Self { path, items }
    }

    pub fn open_default() -> Self {
        Self::open(get_data_file_path(STORAGE_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        self.items.insert(key.to_string(), value.to_string());
        save_json_to(&self.items, &self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_overwrites_values() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get_item("k"), None);

        store.set_item("k", "1").unwrap();
        store.set_item("k", "2").unwrap();
        assert_eq!(store.get_item("k").as_deref(), Some("2"));
    }

    #[test]
    fn file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(STORAGE_FILE);

        let mut store = FileStore::open(&path);
        store.set_item("memory_best_easy", "14").unwrap();

        let reopened = FileStore::open(&path);
        assert_eq!(reopened.get_item("memory_best_easy").as_deref(), Some("14"));
        assert_eq!(reopened.get_item("memory_best_hard"), None);
    }

    #[test]
    fn corrupt_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(STORAGE_FILE);
        std::fs::write(&path, "[1, 2").unwrap();

        let store = FileStore::open(&path);
        assert_eq!(store.get_item("memory_best_easy"), None);
    }
}
