//! Test fixtures and helpers.
//!
//! Common setup code for store tests.

use roster::{EmployeeStore, Result, RosterConfig};
use roster_core::{Employee, EmployeeFields, EmployeeId, MonotonicIds};
use roster_store::{MemoryStorage, Storage};

use crate::generators::Op;

/// Fixed clock: every generated id collides on time and must be bumped.
pub fn frozen_clock() -> u64 {
    1_700_000_000_000
}

/// A store over `storage` whose ids start at [`frozen_clock`].
pub fn frozen_store<S: Storage>(storage: S) -> EmployeeStore<S> {
    EmployeeStore::with_ids(
        storage,
        RosterConfig::default(),
        MonotonicIds::with_clock(frozen_clock),
    )
}

/// An id no generated record will ever carry.
pub fn unknown_id() -> EmployeeId {
    EmployeeId::new("unknown").expect("non-empty id literal")
}

/// Fully populated fields for a named employee.
pub fn sample_fields(name: &str, department: &str) -> EmployeeFields {
    let handle = name.to_lowercase().replace(' ', ".");
    EmployeeFields::new(name)
        .with_email(format!("{}@example.com", handle))
        .with_phone("555-0100")
        .with_department(department)
        .with_position("Associate")
        .with_salary("55000")
        .with_hire_date("2023-01-09")
}

/// A small, varied staff list.
pub fn sample_staff() -> Vec<EmployeeFields> {
    vec![
        sample_fields("Alice Park", "Sales"),
        sample_fields("Bob Stone", "Engineering"),
        sample_fields("Chen Wei", "Human Resources"),
        sample_fields("Dana Ortiz", "Engineering").with_position("Engineering Manager"),
    ]
}

/// The two-record collection `[{1, Alice, Sales}, {2, Bob, Engineering}]`
/// stored under the default slot.
pub fn alice_and_bob() -> MemoryStorage {
    let records = vec![
        Employee::new(
            EmployeeId::from_millis(1),
            EmployeeFields::new("Alice").with_department("Sales"),
        ),
        Employee::new(
            EmployeeId::from_millis(2),
            EmployeeFields::new("Bob").with_department("Engineering"),
        ),
    ];
    let payload = roster_core::encode_collection(&records).unwrap_or_default();
    MemoryStorage::with_slot(roster::DEFAULT_SLOT_KEY, payload)
}

/// Run one generated action against a store.
pub fn apply<S: Storage>(store: &mut EmployeeStore<S>, op: &Op) -> Result<()> {
    match op {
        Op::Save(fields) => {
            store.save(fields.clone())?;
        }
        Op::BeginEdit(pick) => {
            if let Some(id) = pick_id(store, *pick)? {
                store.begin_edit(&id)?;
            }
        }
        Op::BeginEditUnknown => {
            store.begin_edit(&unknown_id())?;
        }
        Op::Cancel => store.cancel(),
        Op::Delete(pick) => {
            if let Some(id) = pick_id(store, *pick)? {
                store.delete(&id)?;
            }
        }
        Op::DeleteUnknown => {
            store.delete(&unknown_id())?;
        }
        Op::Search(query) => {
            store.search(query)?;
        }
    }
    Ok(())
}

fn pick_id<S: Storage>(store: &mut EmployeeStore<S>, pick: usize) -> Result<Option<EmployeeId>> {
    let records = store.load()?;
    if records.is_empty() {
        return Ok(None);
    }
    Ok(Some(records[pick % records.len()].id.clone()))
}
