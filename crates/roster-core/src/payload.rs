//! The durable payload: a whole record collection as one JSON document.
//!
//! Format: a JSON array of flat employee objects, in collection order,
//!
//! ```text
//! [{"id":"1700000000000","name":"Alice","email":"..","phone":"..",
//!   "department":"Sales","position":"..","salary":"..","hireDate":".."}]
//! ```
//!
//! A payload is well formed when it parses as such an array, every object
//! carries all eight string fields, every id is non-empty, and no id repeats.

use std::collections::HashSet;

use crate::employee::Employee;
use crate::error::{CoreError, Result};

/// Serialize a record collection.
pub fn encode_collection(records: &[Employee]) -> Result<String> {
    serde_json::to_string(records).map_err(|e| CoreError::Serialization(e.to_string()))
}

/// Parse and validate a record collection.
pub fn decode_collection(payload: &str) -> Result<Vec<Employee>> {
    let records: Vec<Employee> =
        serde_json::from_str(payload).map_err(|e| CoreError::Deserialization(e.to_string()))?;
    validate_collection(&records)?;
    Ok(records)
}

/// Check the collection invariants: non-empty, unique ids.
pub fn validate_collection(records: &[Employee]) -> Result<()> {
    let mut seen = HashSet::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        if record.id.is_empty() {
            return Err(CoreError::Deserialization(format!(
                "record {} has an empty id",
                index
            )));
        }
        if !seen.insert(record.id.as_str()) {
            return Err(CoreError::Deserialization(format!(
                "duplicate id {} at record {}",
                record.id, index
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::employee::EmployeeFields;
    use crate::types::EmployeeId;

    #[test]
    fn test_reads_legacy_payload() {
        let payload = r#"[{"id":"1700000000000","name":"Alice","email":"alice@example.com","phone":"555-0101","department":"Sales","position":"Rep","salary":"50000","hireDate":"2021-03-01"}]"#;
        let records = decode_collection(payload).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "1700000000000");
        assert_eq!(records[0].fields.hire_date, "2021-03-01");
        assert_eq!(records[0].fields.salary, "50000");
    }

    #[test]
    fn test_encode_preserves_order() {
        let records = vec![
            Employee::new(EmployeeId::new("2").unwrap(), EmployeeFields::new("Bob")),
            Employee::new(EmployeeId::new("1").unwrap(), EmployeeFields::new("Alice")),
        ];
        let decoded = decode_collection(&encode_collection(&records).unwrap()).unwrap();
        assert_eq!(decoded, records);
    }

    #[test]
    fn test_empty_array() {
        assert!(decode_collection("[]").unwrap().is_empty());
        assert_eq!(encode_collection(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_rejects_garbage() {
        for payload in ["", "not json", "{}", "null", "[1,2]", r#"[{"id":"1"}]"#] {
            assert!(
                matches!(decode_collection(payload), Err(CoreError::Deserialization(_))),
                "accepted {:?}",
                payload
            );
        }
    }

    #[test]
    fn test_rejects_non_string_field() {
        let payload = r#"[{"id":"1","name":"A","email":"","phone":"","department":"","position":"","salary":50000,"hireDate":""}]"#;
        assert!(decode_collection(payload).is_err());
    }

    #[test]
    fn test_rejects_empty_id() {
        let payload = r#"[{"id":"","name":"A","email":"","phone":"","department":"","position":"","salary":"","hireDate":""}]"#;
        let err = decode_collection(payload).unwrap_err();
        assert!(err.to_string().contains("empty id"));
    }

    #[test]
    fn test_rejects_duplicate_id() {
        let one = r#"{"id":"7","name":"A","email":"","phone":"","department":"","position":"","salary":"","hireDate":""}"#;
        let payload = format!("[{},{}]", one, one);
        let err = decode_collection(&payload).unwrap_err();
        assert!(err.to_string().contains("duplicate id 7"));
    }
}
