//! Preference storage
//!
//! A minimal string key-value contract backing the user preference services.
//! The backing store is allowed to be unavailable (missing file, unwritable
//! directory): `get` degrades to None and `set` to a no-op. Nothing in this
//! module panics or surfaces an error to the caller.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};

/// String key-value storage contract
pub trait Storage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// File-backed storage: a JSON object of string keys/values at a fixed path
///
/// Each `get` reads and parses the file; each `set` rewrites the single key
/// and saves the whole map. Writes are direct overwrites of one key by one
/// user action, so no locking is needed.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Storage at the platform default location
    pub fn default_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(crate::constants::storage::APP_DIR);
        path.push(crate::constants::storage::FILENAME);
        path
    }

    fn read_map(&self) -> BTreeMap<String, String> {
        let Ok(contents) = fs::read_to_string(&self.path) else {
            return BTreeMap::new();
        };
        match serde_json::from_str(&contents) {
            Ok(map) => map,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Preference file is not a JSON string map, treating as empty");
                BTreeMap::new()
            }
        }
    }

    fn write_map(&self, map: &BTreeMap<String, String>) {
        if let Some(parent) = self.path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                warn!(dir = %parent.display(), error = %e, "Failed to create preference directory, value not persisted");
                return;
            }
        }
        match serde_json::to_string_pretty(map) {
            Ok(contents) => {
                if let Err(e) = fs::write(&self.path, contents) {
                    warn!(path = %self.path.display(), error = %e, "Failed to write preference file, value not persisted");
                }
            }
            Err(e) => {
                warn!(error = %e, "Failed to serialize preferences, value not persisted");
            }
        }
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.read_map().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut map = self.read_map();
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map);
        debug!(key = %key, value = %value, "Stored preference");
    }
}

/// The backing store is a shared resource; services hold their own handle
impl<S: Storage + ?Sized> Storage for std::rc::Rc<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }
}

/// In-memory storage for tests and non-interactive contexts
#[derive(Debug, Default)]
pub struct MemoryStorage {
    map: RefCell<BTreeMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.map.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.map.borrow_mut().insert(key.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_roundtrip() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("lang"), None);

        storage.set("lang", "th");
        assert_eq!(storage.get("lang"), Some("th".to_string()));

        storage.set("lang", "en");
        assert_eq!(storage.get("lang"), Some("en".to_string()));
    }

    #[test]
    fn test_file_storage_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("preferences.json"));

        assert_eq!(storage.get("palette"), None);
        storage.set("palette", "eoy-copper");
        storage.set("lang", "th");

        assert_eq!(storage.get("palette"), Some("eoy-copper".to_string()));
        assert_eq!(storage.get("lang"), Some("th".to_string()));

        // A second instance over the same path sees persisted values
        let reopened = FileStorage::new(dir.path().join("preferences.json"));
        assert_eq!(reopened.get("palette"), Some("eoy-copper".to_string()));
    }

    #[test]
    fn test_file_storage_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("nested/dir/preferences.json"));

        storage.set("lang", "en");
        assert_eq!(storage.get("lang"), Some("en".to_string()));
    }

    #[test]
    fn test_file_storage_unavailable_is_silent() {
        // A path whose parent is a regular file can be neither read nor created
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();
        let storage = FileStorage::new(blocker.join("preferences.json"));

        assert_eq!(storage.get("lang"), None);
        storage.set("lang", "th"); // must not panic
        assert_eq!(storage.get("lang"), None);
    }

    #[test]
    fn test_file_storage_corrupt_file_treated_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        fs::write(&path, "{ this is not json").unwrap();
        let storage = FileStorage::new(path);

        assert_eq!(storage.get("lang"), None);

        // Writing replaces the corrupt file with a valid map
        storage.set("lang", "en");
        assert_eq!(storage.get("lang"), Some("en".to_string()));
    }

    #[test]
    fn test_file_storage_set_preserves_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("preferences.json"));

        storage.set("lang", "th");
        storage.set("palette", "slate");

        assert_eq!(storage.get("lang"), Some("th".to_string()));
        assert_eq!(storage.get("palette"), Some("slate".to_string()));
    }
}
