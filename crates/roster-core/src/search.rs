//! Case-insensitive substring search over employee records.

use crate::employee::Employee;

/// A prepared search query.
///
/// Matching is plain substring containment on the lowercased `name`,
/// `email`, `department` and `position`. An empty query matches everything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    needle: String,
}

impl Query {
    /// Prepare a query from raw user input.
    pub fn new(query: &str) -> Self {
        Self {
            needle: query.to_lowercase(),
        }
    }

    /// Whether the query is empty (and therefore matches every record).
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// Check a single record against the query.
    pub fn matches(&self, employee: &Employee) -> bool {
        self.is_empty()
            || employee
                .fields
                .searchable()
                .iter()
                .any(|field| field.to_lowercase().contains(&self.needle))
    }

    /// Filter records, preserving their order.
    ///
    /// The yielded records borrow from `records`, not from the query.
    pub fn filter<'q, 'r: 'q, I>(&'q self, records: I) -> impl Iterator<Item = &'r Employee> + 'q
    where
        I: IntoIterator<Item = &'r Employee>,
        I::IntoIter: 'q,
    {
        records.into_iter().filter(move |e| self.matches(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::employee::EmployeeFields;
    use crate::types::EmployeeId;

    fn employee(id: &str, fields: EmployeeFields) -> Employee {
        Employee::new(EmployeeId::new(id).unwrap(), fields)
    }

    #[test]
    fn test_case_insensitive() {
        let e = employee("1", EmployeeFields::new("Bob").with_department("Engineering"));
        assert!(Query::new("eng").matches(&e));
        assert!(Query::new("ENG").matches(&e));
        assert!(Query::new("bOB").matches(&e));
    }

    #[test]
    fn test_ignores_phone_and_salary() {
        let e = employee(
            "1",
            EmployeeFields::new("Carol")
                .with_phone("555-0100")
                .with_salary("90000"),
        );
        assert!(!Query::new("555").matches(&e));
        assert!(!Query::new("90000").matches(&e));
    }

    #[test]
    fn test_matches_email_and_position() {
        let e = employee(
            "1",
            EmployeeFields::new("Dan")
                .with_email("dan@example.com")
                .with_position("Manager"),
        );
        assert!(Query::new("example.COM").matches(&e));
        assert!(Query::new("manag").matches(&e));
    }

    #[test]
    fn test_empty_query_matches_all() {
        let records = vec![
            employee("1", EmployeeFields::new("A")),
            employee("2", EmployeeFields::new("B")),
        ];
        let query = Query::new("");
        assert!(query.is_empty());
        assert_eq!(query.filter(&records).count(), 2);
    }

    #[test]
    fn test_filter_preserves_order() {
        let records = vec![
            employee("1", EmployeeFields::new("Sam").with_department("Sales")),
            employee("2", EmployeeFields::new("Ann")),
            employee("3", EmployeeFields::new("Sue").with_department("Sales")),
        ];
        let ids: Vec<_> = Query::new("sales")
            .filter(&records)
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_filter_results_outlive_query() {
        let records = vec![
            employee("1", EmployeeFields::new("Ann").with_position("Engineer")),
            employee("2", EmployeeFields::new("Ben")),
        ];
        let hits: Vec<&Employee> = {
            let query = Query::new("ENGINEER");
            query.filter(&records).collect()
        };
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name(), "Ann");
    }
}
