//! Employee records: the unit of data held by the store.
//!
//! All attributes are free-form text exactly as the caller captured them.
//! No coercion or range validation happens here; presence of required
//! fields is the caller's concern.

use serde::{Deserialize, Serialize};

use crate::types::EmployeeId;

/// The caller-supplied attributes of an employee.
///
/// Serialized with camelCase names (`hireDate`) to stay compatible with
/// payloads written by earlier versions of the application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub position: String,
    pub salary: String,
    pub hire_date: String,
}

impl EmployeeFields {
    /// Start a field set with only a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the email address.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Set the phone number.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    /// Set the department.
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }

    /// Set the position.
    pub fn with_position(mut self, position: impl Into<String>) -> Self {
        self.position = position.into();
        self
    }

    /// Set the salary.
    pub fn with_salary(mut self, salary: impl Into<String>) -> Self {
        self.salary = salary.into();
        self
    }

    /// Set the hire date.
    pub fn with_hire_date(mut self, hire_date: impl Into<String>) -> Self {
        self.hire_date = hire_date.into();
        self
    }

    /// The fields consulted by search, in match order.
    pub fn searchable(&self) -> [&str; 4] {
        [&self.name, &self.email, &self.department, &self.position]
    }
}

/// A stored employee record: an immutable id plus its attributes.
///
/// Serializes flat: `{"id": .., "name": .., ..., "hireDate": ..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    #[serde(flatten)]
    pub fields: EmployeeFields,
}

impl Employee {
    /// Create a record from an id and field values.
    pub fn new(id: EmployeeId, fields: EmployeeFields) -> Self {
        Self { id, fields }
    }

    /// Get the record id.
    pub fn id(&self) -> &EmployeeId {
        &self.id
    }

    /// Get the employee's name.
    pub fn name(&self) -> &str {
        &self.fields.name
    }

    /// Get the employee's department.
    pub fn department(&self) -> &str {
        &self.fields.department
    }

    /// Replace every attribute, keeping the id.
    pub fn overwrite(&mut self, fields: EmployeeFields) {
        self.fields = fields;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        let employee = Employee::new(
            EmployeeId::new("1").unwrap(),
            EmployeeFields::new("Alice").with_hire_date("2020-01-15"),
        );
        let json = serde_json::to_value(&employee).unwrap();

        assert_eq!(json["id"], "1");
        assert_eq!(json["name"], "Alice");
        assert_eq!(json["hireDate"], "2020-01-15");
        assert!(json.get("hire_date").is_none());
        assert!(json.get("fields").is_none());
    }

    #[test]
    fn test_overwrite_keeps_id() {
        let mut employee = Employee::new(
            EmployeeId::new("2").unwrap(),
            EmployeeFields::new("Bob").with_department("Engineering"),
        );
        employee.overwrite(EmployeeFields::new("Robert").with_department("Engineering"));

        assert_eq!(employee.id(), "2");
        assert_eq!(employee.name(), "Robert");
        assert_eq!(employee.department(), "Engineering");
    }

    #[test]
    fn test_searchable_excludes_phone_and_salary() {
        let fields = EmployeeFields::new("n")
            .with_email("e")
            .with_phone("p")
            .with_department("d")
            .with_position("pos")
            .with_salary("s");
        assert_eq!(fields.searchable(), ["n", "e", "d", "pos"]);
    }
}
