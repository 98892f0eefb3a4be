//! # Roster Store
//!
//! Durable key-value slot storage for Roster. Provides a trait-based
//! interface with SQLite and in-memory implementations.
//!
//! ## Overview
//!
//! The record store persists its whole collection into one named slot, so
//! the backend contract is deliberately small: read a slot, overwrite a
//! slot, clear a slot. The primary implementation is [`SqliteStorage`], with
//! [`MemoryStorage`] for tests.
//!
//! ## Key Types
//!
//! - [`Storage`] - The synchronous trait for all slot operations
//! - [`SqliteStorage`] - SQLite-based persistent storage
//! - [`MemoryStorage`] - In-memory storage for tests
//!
//! ## Usage
//!
//! ```rust,no_run
//! use roster_store::{SqliteStorage, Storage};
//!
//! let storage = SqliteStorage::open("roster.db").unwrap();
//! storage.write_slot("employees", "[]").unwrap();
//! assert_eq!(storage.read_slot("employees").unwrap().as_deref(), Some("[]"));
//! ```

pub mod error;
pub mod memory;
pub mod migration;
pub mod sqlite;
pub mod traits;

pub use error::{Result, StorageError};
pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;
pub use traits::Storage;
