//! Key-value backends
//!
//! The store talks to durable state only through [`StorageBackend`]. The file
//! backend keeps one JSON file per key; the memory backend is a shared map
//! for tests and throwaway sessions.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::error::{FinanceError, FinanceResult};

use super::file_io::{read_text, write_text_atomic};
use super::keys::StorageKey;

/// A durable key-value medium holding serialized collections
pub trait StorageBackend {
    /// Make the medium usable (create directories, open handles)
    fn prepare(&mut self) -> FinanceResult<()>;

    /// Read the raw contents stored under `key`, `None` if absent
    fn read(&self, key: StorageKey) -> FinanceResult<Option<String>>;

    /// Replace the contents stored under `key`
    fn write(&mut self, key: StorageKey, contents: &str) -> FinanceResult<()>;

    /// Delete `key`; deleting an absent key is not an error
    fn remove(&mut self, key: StorageKey) -> FinanceResult<()>;

    /// Short human-readable description of where data lives
    fn describe(&self) -> String;
}

/// One JSON file per key inside a data directory
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the collection files
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `key`
    pub fn path_for(&self, key: StorageKey) -> PathBuf {
        self.dir.join(key.file_name())
    }
}

impl StorageBackend for FileBackend {
    fn prepare(&mut self) -> FinanceResult<()> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            FinanceError::Storage(format!(
                "Failed to create data directory {}: {}",
                self.dir.display(),
                e
            ))
        })
    }

    fn read(&self, key: StorageKey) -> FinanceResult<Option<String>> {
        read_text(self.path_for(key))
    }

    fn write(&mut self, key: StorageKey, contents: &str) -> FinanceResult<()> {
        write_text_atomic(self.path_for(key), contents)
    }

    fn remove(&mut self, key: StorageKey) -> FinanceResult<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(FinanceError::Storage(format!(
                "Failed to remove {}: {}",
                key, e
            ))),
        }
    }

    fn describe(&self) -> String {
        self.dir.display().to_string()
    }
}

/// In-memory backend; clones share the same entries
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    entries: Rc<RefCell<HashMap<StorageKey, String>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed raw contents for a key, bypassing any store
    pub fn insert_raw(&self, key: StorageKey, contents: impl Into<String>) {
        self.entries.borrow_mut().insert(key, contents.into());
    }

    /// Raw contents currently stored under `key`
    pub fn raw(&self, key: StorageKey) -> Option<String> {
        self.entries.borrow().get(&key).cloned()
    }

    /// Number of keys present
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl StorageBackend for MemoryBackend {
    fn prepare(&mut self) -> FinanceResult<()> {
        Ok(())
    }

    fn read(&self, key: StorageKey) -> FinanceResult<Option<String>> {
        Ok(self.raw(key))
    }

    fn write(&mut self, key: StorageKey, contents: &str) -> FinanceResult<()> {
        self.insert_raw(key, contents);
        Ok(())
    }

    fn remove(&mut self, key: StorageKey) -> FinanceResult<()> {
        self.entries.borrow_mut().remove(&key);
        Ok(())
    }

    fn describe(&self) -> String {
        "in-memory".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_backend_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let mut backend = FileBackend::new(temp_dir.path().join("data"));
        backend.prepare().unwrap();

        assert!(backend.read(StorageKey::Bills).unwrap().is_none());
        backend.write(StorageKey::Bills, "[]").unwrap();
        assert_eq!(backend.read(StorageKey::Bills).unwrap().as_deref(), Some("[]"));
        assert!(temp_dir
            .path()
            .join("data")
            .join("finance-bills.json")
            .exists());

        backend.remove(StorageKey::Bills).unwrap();
        backend.remove(StorageKey::Bills).unwrap();
        assert!(backend.read(StorageKey::Bills).unwrap().is_none());
    }

    #[test]
    fn test_file_backend_prepare_fails_on_file_in_the_way() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("data");
        fs::write(&blocker, "not a directory").unwrap();

        let mut backend = FileBackend::new(blocker);
        assert!(backend.prepare().is_err());
    }

    #[test]
    fn test_memory_backend_clones_share_entries() {
        let backend = MemoryBackend::new();
        let mut writer = backend.clone();
        writer.write(StorageKey::Incomes, "[]").unwrap();

        assert_eq!(backend.raw(StorageKey::Incomes).as_deref(), Some("[]"));
        assert_eq!(backend.len(), 1);
    }
}
