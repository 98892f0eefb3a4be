//! Edit-session state.
//!
//! Transient and never persisted. `Idle` until a record is loaded for
//! editing; back to `Idle` on save, cancel, or deletion of that record.

use roster_core::EmployeeId;

/// Which record, if any, is being edited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditSession {
    #[default]
    Idle,
    Editing(EmployeeId),
}

impl EditSession {
    /// The id under edit, if any.
    pub fn editing(&self) -> Option<&EmployeeId> {
        match self {
            Self::Idle => None,
            Self::Editing(id) => Some(id),
        }
    }

    /// Whether a session is active.
    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing(_))
    }

    /// Whether the session is editing this particular record.
    pub fn is_editing_id(&self, id: &EmployeeId) -> bool {
        self.editing() == Some(id)
    }

    /// End the session, returning the id that was under edit.
    pub fn end(&mut self) -> Option<EmployeeId> {
        match std::mem::take(self) {
            Self::Idle => None,
            Self::Editing(id) => Some(id),
        }
    }
}
