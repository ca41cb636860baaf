//! Durable key/value slots the cart snapshot is written to.

use std::collections::HashMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use tempfile::NamedTempFile;

use crate::persistence::PersistError;

/// String key/value storage with atomic, whole-value writes.
///
/// `put` must either replace the value completely or leave the previous value
/// in place and return an error.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, PersistError>;
    fn put(&self, key: &str, value: &str) -> Result<(), PersistError>;
    fn delete(&self, key: &str) -> Result<(), PersistError>;
}

impl<S> KeyValueStore for Arc<S>
where
    S: KeyValueStore + ?Sized,
{
    fn get(&self, key: &str) -> Result<Option<String>, PersistError> {
        (**self).get(key)
    }

    fn put(&self, key: &str, value: &str) -> Result<(), PersistError> {
        (**self).put(key, value)
    }

    fn delete(&self, key: &str) -> Result<(), PersistError> {
        (**self).delete(key)
    }
}

/// In-memory slot store for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryKeyValueStore {
    inner: RwLock<HashMap<String, String>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistError> {
        let map = self
            .inner
            .read()
            .map_err(|_| PersistError::Backend("slot lock poisoned".to_string()))?;
        Ok(map.get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> Result<(), PersistError> {
        let mut map = self
            .inner
            .write()
            .map_err(|_| PersistError::Backend("slot lock poisoned".to_string()))?;
        map.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), PersistError> {
        let mut map = self
            .inner
            .write()
            .map_err(|_| PersistError::Backend("slot lock poisoned".to_string()))?;
        map.remove(key);
        Ok(())
    }
}

/// File-backed slot store: one file per key inside `dir`.
///
/// Writes go to a temp file in the same directory, are flushed to disk, then
/// renamed over the target, so a reader sees either the old or the new value.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    dir: PathBuf,
}

impl FileKeyValueStore {
    /// Open (creating if needed) a slot directory.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, PersistError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Keys may contain `/` (versioned keys); map them to a flat file name.
    fn path_for(&self, key: &str) -> PathBuf {
        let file_name: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.' { c } else { '_' })
            .collect();
        self.dir.join(format!("{file_name}.json"))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn put(&self, key: &str, value: &str) -> Result<(), PersistError> {
        let target = self.path_for(key);

        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(value.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&target).map_err(|e| PersistError::Io(e.error))?;

        tracing::trace!(path = %target.display(), bytes = value.len(), "slot written");
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), PersistError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_put_get_delete() {
        let store = InMemoryKeyValueStore::new();
        assert_eq!(store.get("k").unwrap(), None);

        store.put("k", "v1").unwrap();
        store.put("k", "v2").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v2"));

        store.delete("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn file_store_overwrites_atomically() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKeyValueStore::open(dir.path()).unwrap();

        store.put("storefront-cart-storage/v1", "first").unwrap();
        store.put("storefront-cart-storage/v1", "second").unwrap();
        assert_eq!(
            store.get("storefront-cart-storage/v1").unwrap().as_deref(),
            Some("second")
        );

        // Only the target file remains; temp files were renamed away.
        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn file_store_missing_key_and_delete_are_quiet() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKeyValueStore::open(dir.path().join("nested")).unwrap();

        assert_eq!(store.get("absent").unwrap(), None);
        store.delete("absent").unwrap();
        assert!(store.dir().exists());
    }

    #[test]
    fn keys_map_to_distinct_flat_file_names() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKeyValueStore::open(dir.path()).unwrap();

        let path = store.path_for("cart/v1");
        assert_eq!(path.file_name().unwrap(), "cart_v1.json");
        assert_eq!(path.parent().unwrap(), dir.path());
    }
}
