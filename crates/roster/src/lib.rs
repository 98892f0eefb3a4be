//! # Roster
//!
//! The data layer of an employee-record manager: an ordered collection of
//! employee records, an edit session, and durable persistence of the whole
//! collection into one key-value slot.
//!
//! ## Overview
//!
//! - **Records**: free-form text attributes keyed by an immutable id
//! - **Persistence**: every mutation rewrites the full collection to storage
//! - **Edit session**: `Idle` or `Editing(id)`; decides whether a save
//!   creates a record or overwrites one
//! - **Search**: case-insensitive substring match on name, email,
//!   department and position
//!
//! ## Usage
//!
//! ```rust,no_run
//! use roster::{EmployeeFields, EmployeeStore, RosterConfig};
//! use roster::store::SqliteStorage;
//!
//! fn example() -> roster::Result<()> {
//!     let storage = SqliteStorage::open("roster.db")?;
//!     let mut store = EmployeeStore::open(storage, RosterConfig::default())?;
//!
//!     // Create
//!     let created = store.save(EmployeeFields::new("Alice").with_department("Sales"))?;
//!
//!     // Edit
//!     store.begin_edit(created.id())?;
//!     store.save(EmployeeFields::new("Alice").with_department("Marketing"))?;
//!
//!     // Search and delete
//!     let hits = store.search("market")?;
//!     assert_eq!(hits.len(), 1);
//!     store.delete(created.id())?;
//!     Ok(())
//! }
//! ```
//!
//! ## Re-exports
//!
//! - `roster::core` - Record types, ids, search, payload codec
//! - `roster::store` - Storage abstraction, SQLite and in-memory backends

pub mod config;
pub mod error;
pub mod records;
pub mod session;

// Re-export component crates
pub use roster_core as core;
pub use roster_store as store;

// Re-export main types for convenience
pub use config::{CorruptPayloadPolicy, RosterConfig, DEFAULT_SLOT_KEY};
pub use error::{Result, RosterError};
pub use records::{EmployeeStore, SaveOutcome};
pub use session::EditSession;

// Re-export commonly used core types
pub use roster_core::{Employee, EmployeeFields, EmployeeId, MonotonicIds, Query};
pub use roster_store::{MemoryStorage, SqliteStorage, Storage, StorageError};
