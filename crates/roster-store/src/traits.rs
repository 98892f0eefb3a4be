//! Storage trait: the abstract interface for durable key-value slots.
//!
//! A slot is a single named entry whose value is replaced wholesale on every
//! write. There are no partial or delta writes.

use std::sync::Arc;

use crate::error::Result;

/// Durable key-value slot storage.
///
/// All methods are synchronous: a call returns only after the backend has
/// completed the read or write.
pub trait Storage: Send + Sync {
    /// Read the value held in a slot, or `None` if the slot is absent.
    fn read_slot(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value of a slot, creating it if needed.
    fn write_slot(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a slot. Removing an absent slot is not an error.
    fn clear_slot(&self, key: &str) -> Result<()>;

    /// Check whether a slot exists.
    fn has_slot(&self, key: &str) -> Result<bool> {
        Ok(self.read_slot(key)?.is_some())
    }
}

impl<S: Storage + ?Sized> Storage for &S {
    fn read_slot(&self, key: &str) -> Result<Option<String>> {
        (**self).read_slot(key)
    }

    fn write_slot(&self, key: &str, value: &str) -> Result<()> {
        (**self).write_slot(key, value)
    }

    fn clear_slot(&self, key: &str) -> Result<()> {
        (**self).clear_slot(key)
    }

    fn has_slot(&self, key: &str) -> Result<bool> {
        (**self).has_slot(key)
    }
}

impl<S: Storage + ?Sized> Storage for Arc<S> {
    fn read_slot(&self, key: &str) -> Result<Option<String>> {
        (**self).read_slot(key)
    }

    fn write_slot(&self, key: &str, value: &str) -> Result<()> {
        (**self).write_slot(key, value)
    }

    fn clear_slot(&self, key: &str) -> Result<()> {
        (**self).clear_slot(key)
    }

    fn has_slot(&self, key: &str) -> Result<bool> {
        (**self).has_slot(key)
    }
}

impl<S: Storage + ?Sized> Storage for Box<S> {
    fn read_slot(&self, key: &str) -> Result<Option<String>> {
        (**self).read_slot(key)
    }

    fn write_slot(&self, key: &str, value: &str) -> Result<()> {
        (**self).write_slot(key, value)
    }

    fn clear_slot(&self, key: &str) -> Result<()> {
        (**self).clear_slot(key)
    }

    fn has_slot(&self, key: &str) -> Result<bool> {
        (**self).has_slot(key)
    }
}
