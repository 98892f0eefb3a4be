//! In-memory implementation of the Storage trait.
//!
//! This is primarily for testing. It has the same semantics as SQLite
//! but keeps everything in memory with no persistence across processes.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{Result, StorageError};
use crate::traits::Storage;

/// In-memory slot storage.
///
/// Clones share the same slots, so two stores built from clones of one
/// `MemoryStorage` observe each other's writes, like two page loads reading
/// the same browser storage. Thread-safe via RwLock.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    slots: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStorage {
    /// Create a new empty in-memory storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a storage with one slot pre-populated.
    pub fn with_slot(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut slots = HashMap::new();
        slots.insert(key.into(), value.into());
        Self {
            slots: Arc::new(RwLock::new(slots)),
        }
    }

    /// Number of slots currently held.
    pub fn len(&self) -> Result<usize> {
        Ok(self.read()?.len())
    }

    /// Whether no slots are held.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.read()?.is_empty())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<String, String>>> {
        self.slots
            .read()
            .map_err(|e| StorageError::Poisoned(e.to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<String, String>>> {
        self.slots
            .write()
            .map_err(|e| StorageError::Poisoned(e.to_string()))
    }
}

impl Storage for MemoryStorage {
    fn read_slot(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read()?.get(key).cloned())
    }

    fn write_slot(&self, key: &str, value: &str) -> Result<()> {
        self.write()?.insert(key.to_string(), value.to_string());
        tracing::debug!(key, bytes = value.len(), "slot written");
        Ok(())
    }

    fn clear_slot(&self, key: &str) -> Result<()> {
        self.write()?.remove(key);
        Ok(())
    }

    fn has_slot(&self, key: &str) -> Result<bool> {
        Ok(self.read()?.contains_key(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_basic() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.read_slot("employees").unwrap(), None);
        assert!(!storage.has_slot("employees").unwrap());

        storage.write_slot("employees", "[]").unwrap();
        assert_eq!(storage.read_slot("employees").unwrap().as_deref(), Some("[]"));
        assert!(storage.has_slot("employees").unwrap());
    }

    #[test]
    fn test_write_overwrites() {
        let storage = MemoryStorage::new();
        storage.write_slot("k", "first").unwrap();
        storage.write_slot("k", "second").unwrap();
        assert_eq!(storage.read_slot("k").unwrap().as_deref(), Some("second"));
        assert_eq!(storage.len().unwrap(), 1);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let storage = MemoryStorage::with_slot("k", "v");
        storage.clear_slot("k").unwrap();
        storage.clear_slot("k").unwrap();
        assert!(storage.is_empty().unwrap());
    }

    #[test]
    fn test_clones_share_slots() {
        let a = MemoryStorage::new();
        let b = a.clone();
        a.write_slot("k", "v").unwrap();
        assert_eq!(b.read_slot("k").unwrap().as_deref(), Some("v"));
    }
}
