//! Proptest generators for property-based testing.

use proptest::prelude::*;

use roster_core::EmployeeFields;

/// Generate free-form field text, including mixed case and non-ASCII.
pub fn field_text() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[A-Za-z ]{1,16}",
        "[a-z]{1,8}@[a-z]{1,8}\\.com",
        "\\PC{0,12}",
    ]
}

/// Generate a department drawn from a small pool, so searches hit.
pub fn department() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Engineering".to_string()),
        Just("Sales".to_string()),
        Just("ENGINEERING".to_string()),
        Just("Human Resources".to_string()),
        field_text(),
    ]
}

/// Generate a full set of employee fields.
pub fn employee_fields() -> impl Strategy<Value = EmployeeFields> {
    (
        field_text(),
        field_text(),
        field_text(),
        department(),
        field_text(),
        "[0-9]{0,7}",
        "(19|20)[0-9]{2}-[01][0-9]-[0-3][0-9]",
    )
        .prop_map(
            |(name, email, phone, department, position, salary, hire_date)| EmployeeFields {
                name,
                email,
                phone,
                department,
                position,
                salary,
                hire_date,
            },
        )
}

/// One caller action against the store.
///
/// Ids are addressed by index into the collection at the time the action
/// runs (modulo its length), so generated sequences mostly hit real records.
#[derive(Debug, Clone)]
pub enum Op {
    Save(EmployeeFields),
    BeginEdit(usize),
    BeginEditUnknown,
    Cancel,
    Delete(usize),
    DeleteUnknown,
    Search(String),
}

impl Arbitrary for Op {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            4 => employee_fields().prop_map(Op::Save),
            2 => any::<usize>().prop_map(Op::BeginEdit),
            1 => Just(Op::BeginEditUnknown),
            1 => Just(Op::Cancel),
            2 => any::<usize>().prop_map(Op::Delete),
            1 => Just(Op::DeleteUnknown),
            1 => field_text().prop_map(Op::Search),
        ]
        .boxed()
    }
}

/// Generate a sequence of caller actions.
pub fn ops(max_len: usize) -> impl Strategy<Value = Vec<Op>> {
    prop::collection::vec(any::<Op>(), 0..=max_len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::{decode_collection, Query};
    use roster_store::{MemoryStorage, Storage};
    use std::collections::HashSet;

    use crate::fixtures::{apply, frozen_store, unknown_id};

    proptest! {
        #[test]
        fn test_created_ids_unique(batch in prop::collection::vec(employee_fields(), 1..40)) {
            let mut store = frozen_store(MemoryStorage::new());
            let mut seen = HashSet::new();
            for fields in batch {
                let id = store.save(fields).unwrap().id().clone();
                prop_assert!(!id.is_empty());
                prop_assert!(seen.insert(id));
            }
        }

        #[test]
        fn test_edit_keeps_position_and_length(
            batch in prop::collection::vec(employee_fields(), 1..12),
            pick in any::<usize>(),
            replacement in employee_fields(),
        ) {
            let mut store = frozen_store(MemoryStorage::new());
            for fields in batch {
                store.save(fields).unwrap();
            }
            let before = store.load().unwrap().to_vec();
            let index = pick % before.len();
            let target = before[index].id.clone();

            store.begin_edit(&target).unwrap();
            store.save(replacement.clone()).unwrap();

            let after = store.load().unwrap();
            prop_assert_eq!(after.len(), before.len());
            prop_assert_eq!(&after[index].id, &target);
            prop_assert_eq!(&after[index].fields, &replacement);
            for (i, (a, b)) in after.iter().zip(&before).enumerate() {
                if i != index {
                    prop_assert_eq!(a, b);
                }
            }
        }

        #[test]
        fn test_delete_unknown_is_noop(batch in prop::collection::vec(employee_fields(), 0..8)) {
            let mut store = frozen_store(MemoryStorage::new());
            for fields in batch {
                store.save(fields).unwrap();
            }
            let before = store.load().unwrap().to_vec();
            prop_assert!(!store.delete(&unknown_id()).unwrap());
            prop_assert_eq!(store.load().unwrap(), before.as_slice());
        }

        #[test]
        fn test_invariants_hold_after_any_sequence(ops in ops(40)) {
            let storage = MemoryStorage::new();
            let mut store = frozen_store(storage.clone());

            for op in &ops {
                apply(&mut store, op).unwrap();

                let records = store.load().unwrap().to_vec();

                // Unique, non-empty ids.
                let ids: HashSet<_> = records.iter().map(|e| e.id.clone()).collect();
                prop_assert_eq!(ids.len(), records.len());
                prop_assert!(records.iter().all(|e| !e.id.is_empty()));

                // Session points at a live record or is idle.
                if let Some(id) = store.editing_id() {
                    prop_assert!(ids.contains(id));
                }

                // Storage mirrors memory once anything has been written.
                if let Some(payload) = storage.read_slot("employees").unwrap() {
                    prop_assert_eq!(decode_collection(&payload).unwrap(), records);
                }
            }
        }

        #[test]
        fn test_search_is_filter(
            batch in prop::collection::vec(employee_fields(), 0..12),
            query in field_text(),
        ) {
            let mut store = frozen_store(MemoryStorage::new());
            for fields in batch {
                store.save(fields).unwrap();
            }
            let all = store.load().unwrap().to_vec();
            let hits = store.search(&query).unwrap();

            let prepared = Query::new(&query);
            let expected: Vec<_> = all.iter().filter(|e| prepared.matches(e)).cloned().collect();
            prop_assert_eq!(&hits, &expected);
            if query.is_empty() {
                prop_assert_eq!(hits, all);
            }
        }
    }
}
