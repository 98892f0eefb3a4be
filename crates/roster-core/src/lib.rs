//! # Roster Core
//!
//! Pure primitives for Roster: employee records, identifiers, search and the
//! durable payload format.
//!
//! This crate contains no I/O and no storage. It is plain computation over
//! record values.
//!
//! ## Key Types
//!
//! - [`Employee`] - A stored record: id plus attributes
//! - [`EmployeeFields`] - The caller-supplied attributes of a record
//! - [`EmployeeId`] - Opaque, immutable record identifier
//! - [`Query`] - Case-insensitive substring search
//! - [`MonotonicIds`] - Time-based, never-repeating id source
//!
//! ## Payload
//!
//! A whole collection is persisted as one JSON array. See [`payload`].

pub mod employee;
pub mod error;
pub mod ids;
pub mod payload;
pub mod search;
pub mod types;

pub use employee::{Employee, EmployeeFields};
pub use error::{CoreError, Result};
pub use ids::{now_millis, Clock, MonotonicIds, MAX_OBSERVED_MILLIS};
pub use payload::{decode_collection, encode_collection, validate_collection};
pub use search::Query;
pub use types::EmployeeId;
