//! Key-value persistence backends and JSON storage helpers.
//!
//! Every value is stored as a JSON string under a namespaced key. The helper
//! functions never fail: read errors fall back to a default and write errors
//! are reported as `false`, with the cause logged.

use std::collections::BTreeMap;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

use crate::constants::storage_keys;
use crate::error::StorageError;

/// Synchronous string key-value store.
pub trait KeyValueStore {
    /// Returns the raw value stored under `key`, if any.
    fn get_string(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`. On error the previous value is left in place.
    fn set_string(&mut self, key: &str, value: String) -> Result<(), StorageError>;

    /// Removes `key`. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;

    /// Removes every key.
    fn clear(&mut self) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get_string(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_string(key)
    }

    fn set_string(&mut self, key: &str, value: String) -> Result<(), StorageError> {
        (**self).set_string(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }

    fn clear(&mut self) -> Result<(), StorageError> {
        (**self).clear()
    }
}

// ===== In-memory backend =====

/// In-memory store. Can simulate a disabled backend or a byte quota.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    data: HashMap<String, String>,
    available: bool,
    quota: Option<usize>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
            available: true,
            quota: None,
        }
    }

    /// Limits the total size of stored values to `bytes`.
    pub fn with_quota(mut self, bytes: usize) -> Self {
        self.quota = Some(bytes);
        self
    }

    /// Turns every operation into [`StorageError::Unavailable`] while `false`.
    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn check_available(&self) -> Result<(), StorageError> {
        if self.available {
            Ok(())
        } else {
            Err(StorageError::Unavailable)
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get_string(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.check_available()?;
        Ok(self.data.get(key).cloned())
    }

    fn set_string(&mut self, key: &str, value: String) -> Result<(), StorageError> {
        self.check_available()?;
        if let Some(limit) = self.quota {
            let others: usize = self
                .data
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(_, v)| v.len())
                .sum();
            let needed = others + value.len();
            if needed > limit {
                return Err(StorageError::QuotaExceeded {
                    key: key.to_string(),
                    needed,
                    limit,
                });
            }
        }
        self.data.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.check_available()?;
        self.data.remove(key);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StorageError> {
        self.check_available()?;
        self.data.clear();
        Ok(())
    }
}

// ===== File backend =====

/// Store persisted as a single JSON object file, written through on every change.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    data: BTreeMap<String, String>,
}

impl FileStore {
    /// Default location: `<config dir>/rstarter/storage.json`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("rstarter").join("storage.json"))
    }

    /// Opens the store at `path`. A missing file is an empty store; an
    /// unreadable or corrupt file is logged and treated as empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let data = match Self::read_file(&path) {
            Ok(data) => data,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "ignoring unreadable storage file");
                BTreeMap::new()
            }
        };
        Self { path, data }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_file(path: &Path) -> Result<BTreeMap<String, String>, StorageError> {
        if !path.exists() {
            return Ok(BTreeMap::new());
        }
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    fn write_file(&self, data: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(data)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// Applies `change` to a copy of the data and only keeps it if the write succeeds.
    fn commit<F>(&mut self, change: F) -> Result<(), StorageError>
    where
        F: FnOnce(&mut BTreeMap<String, String>),
    {
        let mut next = self.data.clone();
        change(&mut next);
        self.write_file(&next)?;
        self.data = next;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get_string(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.data.get(key).cloned())
    }

    fn set_string(&mut self, key: &str, value: String) -> Result<(), StorageError> {
        self.commit(|data| {
            data.insert(key.to_string(), value);
        })
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.commit(|data| {
            data.remove(key);
        })
    }

    fn clear(&mut self) -> Result<(), StorageError> {
        self.commit(BTreeMap::clear)
    }
}

// ===== JSON helpers =====

/// Attempts to load `key` as JSON, returning None if absent, unreadable or invalid.
pub fn try_get_item<T, S>(store: &S, key: &str) -> Option<T>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let raw = match store.get_string(key) {
        Ok(raw) => raw?,
        Err(err) => {
            tracing::warn!(key, error = %err, "error reading storage key");
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(key, error = %err, "error parsing storage key");
            None
        }
    }
}

/// Loads `key` as JSON, falling back to `default`.
pub fn get_item<T, S>(store: &S, key: &str, default: T) -> T
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    try_get_item(store, key).unwrap_or(default)
}

/// Stores `value` as JSON under `key`. Returns whether the write succeeded.
pub fn set_item<T, S>(store: &mut S, key: &str, value: &T) -> bool
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let json = match serde_json::to_string(value) {
        Ok(json) => json,
        Err(err) => {
            tracing::warn!(key, error = %err, "error serializing storage value");
            return false;
        }
    };
    match store.set_string(key, json) {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(key, error = %err, "error writing storage key");
            false
        }
    }
}

/// Removes `key`. Returns whether the removal succeeded.
pub fn remove_item<S: KeyValueStore + ?Sized>(store: &mut S, key: &str) -> bool {
    match store.remove(key) {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(key, error = %err, "error removing storage key");
            false
        }
    }
}

/// Clears the whole store. Returns whether it succeeded.
pub fn clear<S: KeyValueStore + ?Sized>(store: &mut S) -> bool {
    match store.clear() {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(error = %err, "error clearing storage");
            false
        }
    }
}

/// Boolean preference; anything that is not a JSON boolean yields `default`.
pub fn get_bool_preference<S: KeyValueStore + ?Sized>(store: &S, key: &str, default: bool) -> bool {
    match try_get_item::<Value, _>(store, key) {
        Some(Value::Bool(value)) => value,
        _ => default,
    }
}

pub fn set_bool_preference<S: KeyValueStore + ?Sized>(store: &mut S, key: &str, value: bool) -> bool {
    set_item(store, key, &value)
}

fn get_object<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> Map<String, Value> {
    match try_get_item::<Value, _>(store, key) {
        Some(Value::Object(map)) => map,
        _ => Map::new(),
    }
}

fn update_object<S: KeyValueStore + ?Sized>(store: &mut S, key: &str, field: &str, value: Value) -> bool {
    let mut map = get_object(store, key);
    map.insert(field.to_string(), value);
    set_item(store, key, &map)
}

/// User preferences object (empty when missing or malformed).
pub fn user_preferences<S: KeyValueStore + ?Sized>(store: &S) -> Map<String, Value> {
    get_object(store, storage_keys::USER_PREFERENCES)
}

pub fn set_user_preferences<S: KeyValueStore + ?Sized>(store: &mut S, preferences: &Map<String, Value>) -> bool {
    set_item(store, storage_keys::USER_PREFERENCES, preferences)
}

/// Sets one field of the user preferences object, keeping the others.
pub fn update_user_preference<S: KeyValueStore + ?Sized>(store: &mut S, field: &str, value: Value) -> bool {
    update_object(store, storage_keys::USER_PREFERENCES, field, value)
}

/// Persisted app state object (empty when missing or malformed).
pub fn app_state<S: KeyValueStore + ?Sized>(store: &S) -> Map<String, Value> {
    get_object(store, storage_keys::APP_STATE)
}

pub fn set_app_state<S: KeyValueStore + ?Sized>(store: &mut S, state: &Map<String, Value>) -> bool {
    set_item(store, storage_keys::APP_STATE, state)
}

/// Sets one field of the app state object, keeping the others.
pub fn update_app_state<S: KeyValueStore + ?Sized>(store: &mut S, field: &str, value: Value) -> bool {
    update_object(store, storage_keys::APP_STATE, field, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_struct_value_stored_as_json_text() {
        #[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
        struct Layout {
            sidebar: bool,
            width: u32,
        }

        let mut store = MemoryStore::new();
        let layout = Layout { sidebar: true, width: 320 };
        assert!(set_item(&mut store, storage_keys::SETTINGS, &layout));

        let raw = store.get_string(storage_keys::SETTINGS).unwrap();
        assert_eq!(raw.as_deref(), Some(r#"{"sidebar":true,"width":320}"#));
        assert_eq!(try_get_item::<Layout, _>(&store, storage_keys::SETTINGS), Some(layout));
    }

    #[test]
    fn test_type_mismatch_falls_back_to_default() {
        let mut store = MemoryStore::new();
        set_item(&mut store, "label", &"not a number");

        assert_eq!(try_get_item::<u64, _>(&store, "label"), None);
        assert_eq!(get_item(&store, "label", 5u64), 5);
    }

    #[test]
    fn test_corrupt_value_uses_default() {
        let mut store = MemoryStore::new();
        store.set_string("widths", "[1, 2,".to_string()).unwrap();

        let loaded: Vec<u32> = get_item(&store, "widths", vec![9]);
        assert_eq!(loaded, vec![9]);
    }

    #[test]
    fn test_unavailable_backend_reads_as_absent() {
        let mut store = MemoryStore::new();
        set_item(&mut store, "count", &3);
        store.set_available(false);

        assert_eq!(try_get_item::<i32, _>(&store, "count"), None);
        assert!(matches!(store.get_string("count"), Err(StorageError::Unavailable)));
    }

    #[test]
    fn test_quota_counts_replaced_value_once() {
        // Replacing a key must not count its old value against the quota.
        let mut store = MemoryStore::new().with_quota(10);
        assert!(set_item(&mut store, "k", &"abc"));
        assert!(set_item(&mut store, "k", &"abcdefgh"));

        let err = store.set_string("other", "xx".to_string()).unwrap_err();
        assert!(matches!(err, StorageError::QuotaExceeded { needed: 12, limit: 10, .. }));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_unavailable_backend() {
        let mut store = MemoryStore::new();
        set_item(&mut store, "k", &"v");
        store.set_available(false);

        assert!(!set_item(&mut store, "k", &"w"));
        assert!(!remove_item(&mut store, "k"));
        assert!(!clear(&mut store));
        assert_eq!(get_item(&store, "k", String::from("default")), "default");

        store.set_available(true);
        assert_eq!(get_item(&store, "k", String::new()), "v");
    }

    #[test]
    fn test_quota_keeps_previous_value() {
        let mut store = MemoryStore::new().with_quota(8);
        assert!(set_item(&mut store, "k", &"abc"));
        assert!(!set_item(&mut store, "k", &"abcdefghijk"));
        assert_eq!(get_item(&store, "k", String::new()), "abc");
    }

    #[test]
    fn test_remove_and_clear() {
        let mut store = MemoryStore::new();
        set_item(&mut store, "a", &1);
        set_item(&mut store, "b", &2);

        assert!(remove_item(&mut store, "a"));
        assert!(remove_item(&mut store, "a"));
        assert_eq!(store.len(), 1);

        assert!(clear(&mut store));
        assert!(store.is_empty());
    }

    #[test]
    fn test_bool_preference() {
        let mut store = MemoryStore::new();
        assert!(get_bool_preference(&store, "sidebar", true));

        set_bool_preference(&mut store, "sidebar", false);
        assert!(!get_bool_preference(&store, "sidebar", true));

        set_item(&mut store, "sidebar", &"yes");
        assert!(get_bool_preference(&store, "sidebar", true));
    }

    #[test]
    fn test_update_user_preference_keeps_other_fields() {
        let mut store = MemoryStore::new();
        assert!(user_preferences(&store).is_empty());

        update_user_preference(&mut store, "language", json!("en"));
        update_user_preference(&mut store, "compact", json!(true));

        let prefs = user_preferences(&store);
        assert_eq!(prefs.get("language"), Some(&json!("en")));
        assert_eq!(prefs.get("compact"), Some(&json!(true)));
    }

    #[test]
    fn test_app_state_ignores_non_object() {
        let mut store = MemoryStore::new();
        set_item(&mut store, storage_keys::APP_STATE, &[1, 2, 3]);
        assert!(app_state(&store).is_empty());

        update_app_state(&mut store, "last_tab", json!("home"));
        assert_eq!(app_state(&store).get("last_tab"), Some(&json!("home")));

        let mut state = Map::new();
        state.insert("counter".to_string(), json!(3));
        assert!(set_app_state(&mut store, &state));
        assert_eq!(app_state(&store), state);
    }

    #[test]
    fn test_file_store_persists_across_instances() {
        let path = std::env::temp_dir().join("rstarter_storage_unit").join("storage.json");
        let _ = fs::remove_file(&path);

        {
            let mut store = FileStore::open(&path);
            assert!(set_item(&mut store, "answer", &42));
        }

        let store = FileStore::open(&path);
        assert_eq!(get_item(&store, "answer", 0), 42);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_file_store_corrupt_file_is_empty() {
        let dir = std::env::temp_dir().join("rstarter_storage_corrupt");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("storage.json");
        fs::write(&path, "not json").unwrap();

        let store = FileStore::open(&path);
        assert_eq!(store.get_string("anything").unwrap(), None);

        let _ = fs::remove_file(&path);
    }
}
