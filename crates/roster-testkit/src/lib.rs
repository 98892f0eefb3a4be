//! # Roster Testkit
//!
//! Testing utilities for Roster.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Fixtures**: sample staff, pre-seeded storage, stores with a frozen clock
//! - **Generators**: Proptest strategies for employee fields and caller actions
//!
//! ## Property Testing
//!
//! Use the generators with proptest:
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use roster_store::MemoryStorage;
//! use roster_testkit::{apply, frozen_store, generators::ops};
//!
//! proptest! {
//!     #[test]
//!     fn never_panics(ops in ops(20)) {
//!         let mut store = frozen_store(MemoryStorage::new());
//!         for op in &ops {
//!             apply(&mut store, op).unwrap();
//!         }
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! Quickly set up test scenarios:
//!
//! ```rust
//! use roster_testkit::fixtures::{alice_and_bob, frozen_store};
//!
//! let mut store = frozen_store(alice_and_bob());
//! assert_eq!(store.search("bob").unwrap().len(), 1);
//! ```

pub mod fixtures;
pub mod generators;

pub use fixtures::{alice_and_bob, apply, frozen_store, sample_fields, sample_staff, unknown_id};
pub use generators::{employee_fields, ops, Op};
