//! # Constraint Index
//!
//! Groups constraints by field and assembles the nested where document:
//!
//! ```text
//! { "<field>": { "<opTag>": <value>, ... }, ... }
//! ```
//!
//! Constraints within a field keep their insertion order. Field order across
//! the document is unspecified; the backend treats it as irrelevant.

use std::collections::HashMap;

use serde_json::{Map, Value};

use super::constraint::Constraint;
use super::errors::QueryResult;

/// Field name to the constraints targeting it
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConstraintIndex {
    constraints: HashMap<String, Vec<Constraint>>,
}

impl ConstraintIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a constraint to its field's list
    pub fn add(&mut self, constraint: Constraint) {
        self.constraints
            .entry(constraint.field().to_string())
            .or_default()
            .push(constraint);
    }

    /// Constraints on `field`, in insertion order
    pub fn constraints_for(&self, field: &str) -> &[Constraint] {
        self.constraints
            .get(field)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of constraints across all fields
    pub fn len(&self) -> usize {
        self.constraints.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// Build the where document
    ///
    /// A repeated operator on the same field overwrites the earlier entry.
    pub fn encode(&self) -> QueryResult<Map<String, Value>> {
        let mut document = Map::with_capacity(self.constraints.len());

        for (field, constraints) in &self.constraints {
            let mut operators = Map::with_capacity(constraints.len());
            for constraint in constraints {
                operators.insert(
                    constraint.operator().as_str().to_string(),
                    constraint.encode_value()?,
                );
            }
            document.insert(field.clone(), Value::Object(operators));
        }

        Ok(document)
    }
}

impl Extend<Constraint> for ConstraintIndex {
    fn extend<I: IntoIterator<Item = Constraint>>(&mut self, iter: I) {
        for constraint in iter {
            self.add(constraint);
        }
    }
}

impl FromIterator<Constraint> for ConstraintIndex {
    fn from_iter<I: IntoIterator<Item = Constraint>>(iter: I) -> Self {
        let mut index = ConstraintIndex::new();
        index.extend(iter);
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::constraint::{equals, greater_than, less_than};
    use crate::query::operator::Operator;
    use serde_json::json;

    #[test]
    fn test_empty_index_encodes_empty_object() {
        let index = ConstraintIndex::new();
        assert!(index.is_empty());
        assert_eq!(Value::Object(index.encode().unwrap()), json!({}));
    }

    #[test]
    fn test_range_on_one_field() {
        let index: ConstraintIndex =
            [greater_than("score", 5), less_than("score", 10)].into_iter().collect();
        assert_eq!(
            Value::Object(index.encode().unwrap()),
            json!({"score": {"$gt": 5, "$lt": 10}})
        );
    }

    #[test]
    fn test_insertion_order_within_field() {
        let mut index = ConstraintIndex::new();
        index.add(less_than("score", 10));
        index.add(equals("name", "x"));
        index.add(greater_than("score", 5));

        let ops: Vec<Operator> = index
            .constraints_for("score")
            .iter()
            .map(|c| c.operator())
            .collect();
        assert_eq!(ops, vec![Operator::LessThan, Operator::GreaterThan]);
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn test_unknown_field_has_no_constraints() {
        let index = ConstraintIndex::new();
        assert!(index.constraints_for("missing").is_empty());
    }

    #[test]
    fn test_same_operator_last_write_wins() {
        let mut index = ConstraintIndex::new();
        index.add(greater_than("score", 5));
        index.add(greater_than("score", 7));

        assert_eq!(index.len(), 2);
        assert_eq!(
            Value::Object(index.encode().unwrap()),
            json!({"score": {"$gt": 7}})
        );
    }

    #[test]
    fn test_multiple_fields() {
        let mut index = ConstraintIndex::new();
        index.add(equals("name", "Alice"));
        index.add(greater_than("age", 21));

        let encoded = Value::Object(index.encode().unwrap());
        assert_eq!(encoded["name"], json!({"$eq": "Alice"}));
        assert_eq!(encoded["age"], json!({"$gt": 21}));
    }
}
