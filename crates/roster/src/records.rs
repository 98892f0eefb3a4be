//! The employee record store.
//!
//! Owns the authoritative, ordered record collection and the edit session,
//! and mirrors the collection into one durable slot after every mutation.
//!
//! Every mutation builds the next collection, writes it, and only then
//! replaces the in-memory copy. A failed write leaves memory, storage and
//! the edit session exactly as they were.

use roster_core::{
    decode_collection, encode_collection, CoreError, Employee, EmployeeFields, EmployeeId,
    MonotonicIds, Query,
};
use roster_store::Storage;

use crate::config::{CorruptPayloadPolicy, RosterConfig};
use crate::error::{Result, RosterError};
use crate::session::EditSession;

/// Which branch a [`EmployeeStore::save`] took.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// No session was active; a new record was appended.
    Created(EmployeeId),
    /// The record under edit was overwritten in place.
    Updated(EmployeeId),
    /// The record under edit no longer existed; nothing was written to it.
    Dropped(EmployeeId),
}

impl SaveOutcome {
    /// The id the save was about.
    pub fn id(&self) -> &EmployeeId {
        match self {
            Self::Created(id) | Self::Updated(id) | Self::Dropped(id) => id,
        }
    }
}

/// In-memory employee collection backed by a durable slot.
///
/// One instance per process (or per test). The collection is read from
/// storage on first use.
pub struct EmployeeStore<S: Storage> {
    storage: S,
    config: RosterConfig,
    /// `None` until the slot has been read successfully.
    records: Option<Vec<Employee>>,
    session: EditSession,
    ids: MonotonicIds,
}

impl<S: Storage> EmployeeStore<S> {
    /// Create a store over `storage`. Nothing is read until first use.
    pub fn new(storage: S, config: RosterConfig) -> Self {
        Self::with_ids(storage, config, MonotonicIds::new())
    }

    /// Create a store with a custom id source.
    pub fn with_ids(storage: S, config: RosterConfig, ids: MonotonicIds) -> Self {
        Self {
            storage,
            config,
            records: None,
            session: EditSession::Idle,
            ids,
        }
    }

    /// Create a store and read the collection immediately.
    pub fn open(storage: S, config: RosterConfig) -> Result<Self> {
        let mut store = Self::new(storage, config);
        store.load()?;
        Ok(store)
    }

    /// Get the storage backend.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Get the configuration.
    pub fn config(&self) -> &RosterConfig {
        &self.config
    }

    /// Whether the collection has been read from storage.
    pub fn is_loaded(&self) -> bool {
        self.records.is_some()
    }

    /// Current edit-session state.
    pub fn edit_session(&self) -> &EditSession {
        &self.session
    }

    /// The id under edit, if any.
    pub fn editing_id(&self) -> Option<&EmployeeId> {
        self.session.editing()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────

    /// The current collection, reading the slot if not already in memory.
    ///
    /// An absent slot is an empty collection. A malformed payload fails with
    /// [`RosterError::Deserialization`] unless the configured policy discards
    /// it.
    pub fn load(&mut self) -> Result<&[Employee]> {
        Ok(self.ensure_loaded()?.as_slice())
    }

    /// Look up a record without touching the edit session.
    pub fn get(&mut self, id: &EmployeeId) -> Result<Option<&Employee>> {
        Ok(self.ensure_loaded()?.iter().find(|e| &e.id == id))
    }

    /// Records whose name, email, department or position contains `query`,
    /// ignoring case. An empty query returns the whole collection.
    pub fn search(&mut self, query: &str) -> Result<Vec<Employee>> {
        let query = Query::new(query);
        let records = self.ensure_loaded()?;
        Ok(query.filter(records.iter()).cloned().collect())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Edit session
    // ─────────────────────────────────────────────────────────────────────────

    /// Enter an edit session for `id` and return a copy of the record.
    ///
    /// Unknown ids are a no-op: `None` is returned and the session is left as
    /// it was.
    pub fn begin_edit(&mut self, id: &EmployeeId) -> Result<Option<Employee>> {
        let found = self
            .ensure_loaded()?
            .iter()
            .find(|e| &e.id == id)
            .cloned();

        if let Some(employee) = &found {
            self.session = EditSession::Editing(employee.id.clone());
            tracing::debug!(id = %employee.id, "editing employee");
        }
        Ok(found)
    }

    /// Leave the edit session without saving.
    pub fn cancel(&mut self) {
        if let Some(id) = self.session.end() {
            tracing::debug!(id = %id, "edit cancelled");
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Save a record and end any edit session.
    ///
    /// While editing, the record under edit is overwritten in place; if it
    /// has disappeared the write is dropped. Otherwise a new record with a
    /// fresh id is appended. The collection is persisted either way.
    pub fn save(&mut self, fields: EmployeeFields) -> Result<SaveOutcome> {
        let mut next = self.ensure_loaded()?.clone();

        let outcome = match self.session.editing() {
            Some(id) => match next.iter_mut().find(|e| &e.id == id) {
                Some(existing) => {
                    existing.overwrite(fields);
                    SaveOutcome::Updated(id.clone())
                }
                None => SaveOutcome::Dropped(id.clone()),
            },
            None => {
                let id = Self::fresh_id(&mut self.ids, &next)?;
                next.push(Employee::new(id.clone(), fields));
                SaveOutcome::Created(id)
            }
        };

        self.commit(next)?;
        self.session.end();

        match &outcome {
            SaveOutcome::Created(id) => tracing::info!(id = %id, "employee created"),
            SaveOutcome::Updated(id) => tracing::info!(id = %id, "employee updated"),
            SaveOutcome::Dropped(id) => {
                tracing::warn!(id = %id, "edited employee no longer exists, save dropped")
            }
        }
        Ok(outcome)
    }

    /// Remove a record and persist. Returns whether a record was removed.
    ///
    /// Deleting the record under edit also ends the edit session.
    pub fn delete(&mut self, id: &EmployeeId) -> Result<bool> {
        let mut next = self.ensure_loaded()?.clone();
        let before = next.len();
        next.retain(|e| &e.id != id);
        let removed = next.len() != before;

        self.commit(next)?;

        if self.session.is_editing_id(id) {
            self.session.end();
        }
        if removed {
            tracing::info!(id = %id, "employee deleted");
        }
        Ok(removed)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internals
    // ─────────────────────────────────────────────────────────────────────────

    fn ensure_loaded(&mut self) -> Result<&mut Vec<Employee>> {
        if self.records.is_none() {
            let records = self.read_collection()?;
            for record in &records {
                self.ids.observe(&record.id);
            }
            self.records = Some(records);
        }
        Ok(self.records.get_or_insert_with(Vec::new))
    }

    fn read_collection(&self) -> Result<Vec<Employee>> {
        let key = &self.config.slot_key;
        let Some(payload) = self.storage.read_slot(key)? else {
            tracing::debug!(key = %key, "slot empty, starting with no employees");
            return Ok(Vec::new());
        };

        match decode_collection(&payload) {
            Ok(records) => {
                tracing::debug!(key = %key, count = records.len(), "loaded employees");
                Ok(records)
            }
            Err(e) => {
                let reason = match e {
                    CoreError::Deserialization(reason) => reason,
                    other => other.to_string(),
                };
                match self.config.corrupt_payload {
                    CorruptPayloadPolicy::Fail => Err(RosterError::Deserialization {
                        key: key.clone(),
                        reason,
                    }),
                    CorruptPayloadPolicy::DiscardAndStartEmpty => {
                        tracing::warn!(
                            key = %key,
                            bytes = payload.len(),
                            reason = %reason,
                            "discarding malformed employee payload"
                        );
                        self.storage.clear_slot(key)?;
                        Ok(Vec::new())
                    }
                }
            }
        }
    }

    /// Persist `records`, then adopt them as the in-memory collection.
    fn commit(&mut self, records: Vec<Employee>) -> Result<()> {
        let payload = encode_collection(&records)?;
        self.storage.write_slot(&self.config.slot_key, &payload)?;
        self.records = Some(records);
        Ok(())
    }

    /// Issued ids strictly increase, so each collision uses up a distinct
    /// record and `records.len() + 1` attempts always suffice.
    fn fresh_id(ids: &mut MonotonicIds, records: &[Employee]) -> Result<EmployeeId> {
        for _ in 0..=records.len() {
            let id = ids.next_id()?;
            if !records.iter().any(|e| e.id == id) {
                return Ok(id);
            }
        }
        Err(CoreError::IdsExhausted(ids.last()).into())
    }
}
