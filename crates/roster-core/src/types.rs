//! Strong type definitions for Roster.
//!
//! Identifiers are newtypes so a record id can never be confused with an
//! arbitrary field value.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Opaque, immutable identifier of an employee record.
///
/// Ids generated by this crate are the decimal rendering of a creation time
/// in Unix milliseconds, but any non-empty string read back from storage is
/// accepted as-is.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(String);

impl EmployeeId {
    /// Create an id from text. Rejects the empty string.
    pub fn new(id: impl Into<String>) -> Result<Self, CoreError> {
        let id = id.into();
        if id.is_empty() {
            return Err(CoreError::InvalidId("id must not be empty".into()));
        }
        Ok(Self(id))
    }

    /// Create an id from a millisecond timestamp.
    pub fn from_millis(ms: u64) -> Self {
        Self(ms.to_string())
    }

    /// Get the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Interpret the id as a millisecond timestamp, if it is one.
    pub fn as_millis(&self) -> Option<u64> {
        self.0.parse().ok()
    }

    /// Whether the id is empty. Only possible for ids decoded without validation.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume the id, returning the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Debug for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EmployeeId({})", self.0)
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EmployeeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for EmployeeId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl PartialEq<str> for EmployeeId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for EmployeeId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
