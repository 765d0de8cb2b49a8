//! # Query Constraints
//!
//! A constraint is one `(field, operator, value)` condition. Constraints are
//! built with the named constructors in this module and never change after
//! construction.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{json, Value};

use super::document::Query;
use super::errors::{QueryError, QueryResult};
use super::finite;
use super::index::ConstraintIndex;
use super::operator::Operator;
use crate::object::ParseObject;
use crate::types::ParseDate;

/// Another class's constraints, nested inside a constraint value
#[derive(Debug, Clone, PartialEq)]
pub struct SubQuery {
    class_name: &'static str,
    constraints: ConstraintIndex,
}

impl SubQuery {
    /// Capture the constraints of `query`
    pub fn of<U: ParseObject>(query: &Query<U>) -> Self {
        Self {
            class_name: U::CLASS_NAME,
            constraints: query.constraints().clone(),
        }
    }

    /// Class the sub-query targets
    pub fn class_name(&self) -> &'static str {
        self.class_name
    }

    /// Encode as `{"className": ..., "where": ...}`
    pub fn encode(&self) -> QueryResult<Value> {
        Ok(json!({
            "className": self.class_name,
            "where": Value::Object(self.constraints.encode()?),
        }))
    }
}

/// Value carried by a constraint
#[derive(Debug, Clone, PartialEq)]
pub enum ConstraintValue {
    /// Plain JSON value (scalar, array, object)
    Json(Value),

    /// Date, encoded with its own canonical representation
    Date(ParseDate),

    /// Sequence whose elements may themselves be dates
    List(Vec<ConstraintValue>),

    /// Nested query for `$inQuery`
    Query(SubQuery),

    /// Nested query plus result key for `$select` / `$dontSelect`
    Select { query: SubQuery, key: String },

    /// Serialization failed when the constraint was built
    Unencodable(String),
}

impl ConstraintValue {
    /// Convert any serializable value
    ///
    /// Failures are kept and reported when the owning query is encoded.
    pub fn serialize<V: Serialize + ?Sized>(value: &V) -> Self {
        if let Err(e) = finite::check(value) {
            return ConstraintValue::Unencodable(e.to_string());
        }
        match serde_json::to_value(value) {
            Ok(v) => ConstraintValue::Json(v),
            Err(e) => ConstraintValue::Unencodable(e.to_string()),
        }
    }

    /// Encode for the wire; `field` names the owner in errors
    pub fn encode(&self, field: &str) -> QueryResult<Value> {
        match self {
            ConstraintValue::Json(v) => Ok(v.clone()),
            ConstraintValue::Date(date) => {
                serde_json::to_value(date).map_err(|e| QueryError::encoding(field, e.to_string()))
            }
            ConstraintValue::List(items) => items
                .iter()
                .map(|item| item.encode(field))
                .collect::<QueryResult<Vec<_>>>()
                .map(Value::Array),
            ConstraintValue::Query(sub) => sub.encode(),
            ConstraintValue::Select { query, key } => Ok(json!({
                "query": query.encode()?,
                "key": key,
            })),
            ConstraintValue::Unencodable(reason) => Err(QueryError::encoding(field, reason.clone())),
        }
    }
}

macro_rules! json_value_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for ConstraintValue {
                fn from(value: $ty) -> Self {
                    ConstraintValue::Json(Value::from(value))
                }
            }
        )*
    };
}

json_value_from!(bool, i32, i64, u32, u64, String, &str);

impl From<f64> for ConstraintValue {
    fn from(value: f64) -> Self {
        if value.is_finite() {
            ConstraintValue::Json(Value::from(value))
        } else {
            ConstraintValue::Unencodable(finite::non_finite(value))
        }
    }
}

impl From<f32> for ConstraintValue {
    fn from(value: f32) -> Self {
        ConstraintValue::from(f64::from(value))
    }
}

impl From<Value> for ConstraintValue {
    fn from(value: Value) -> Self {
        ConstraintValue::Json(value)
    }
}

impl From<ParseDate> for ConstraintValue {
    fn from(date: ParseDate) -> Self {
        ConstraintValue::Date(date)
    }
}

impl From<DateTime<Utc>> for ConstraintValue {
    fn from(at: DateTime<Utc>) -> Self {
        ConstraintValue::Date(ParseDate::new(at))
    }
}

impl<T: Into<ConstraintValue>> From<Vec<T>> for ConstraintValue {
    fn from(items: Vec<T>) -> Self {
        ConstraintValue::List(items.into_iter().map(Into::into).collect())
    }
}

/// One field condition
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint {
    field: String,
    operator: Operator,
    value: ConstraintValue,
}

impl Constraint {
    /// Create a constraint
    pub fn new(field: impl Into<String>, operator: Operator, value: impl Into<ConstraintValue>) -> Self {
        Self {
            field: field.into(),
            operator,
            value: value.into(),
        }
    }

    /// Field the constraint targets
    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn value(&self) -> &ConstraintValue {
        &self.value
    }

    /// Encode the value that sits under the operator tag
    pub fn encode_value(&self) -> QueryResult<Value> {
        self.value.encode(&self.field)
    }
}

/// `field > value`
pub fn greater_than(field: impl Into<String>, value: impl Into<ConstraintValue>) -> Constraint {
    Constraint::new(field, Operator::GreaterThan, value)
}

/// `field >= value`
pub fn greater_than_or_equal(field: impl Into<String>, value: impl Into<ConstraintValue>) -> Constraint {
    Constraint::new(field, Operator::GreaterThanOrEqual, value)
}

/// `field < value`
pub fn less_than(field: impl Into<String>, value: impl Into<ConstraintValue>) -> Constraint {
    Constraint::new(field, Operator::LessThan, value)
}

/// `field <= value`
pub fn less_than_or_equal(field: impl Into<String>, value: impl Into<ConstraintValue>) -> Constraint {
    Constraint::new(field, Operator::LessThanOrEqual, value)
}

/// `field == value`
pub fn equals(field: impl Into<String>, value: impl Into<ConstraintValue>) -> Constraint {
    Constraint::new(field, Operator::Equals, value)
}

/// `field == query`: the field must point at a record matched by `query`
pub fn equals_query<U: ParseObject>(field: impl Into<String>, query: &Query<U>) -> Constraint {
    Constraint::new(field, Operator::InQuery, ConstraintValue::Query(SubQuery::of(query)))
}

/// `field != value`
pub fn not_equal(field: impl Into<String>, value: impl Into<ConstraintValue>) -> Constraint {
    Constraint::new(field, Operator::NotEqual, value)
}

/// Field value is one of `values`
pub fn contained_in<V: Into<ConstraintValue>>(
    field: impl Into<String>,
    values: impl IntoIterator<Item = V>,
) -> Constraint {
    Constraint::new(field, Operator::ContainedIn, list(values))
}

/// Field value is none of `values`
pub fn not_contained_in<V: Into<ConstraintValue>>(
    field: impl Into<String>,
    values: impl IntoIterator<Item = V>,
) -> Constraint {
    Constraint::new(field, Operator::NotContainedIn, list(values))
}

/// Array field contains every one of `values`
pub fn contains_all<V: Into<ConstraintValue>>(
    field: impl Into<String>,
    values: impl IntoIterator<Item = V>,
) -> Constraint {
    Constraint::new(field, Operator::All, list(values))
}

/// Field is set (`true`) or unset (`false`)
pub fn exists(field: impl Into<String>, present: bool) -> Constraint {
    Constraint::new(field, Operator::Exists, present)
}

/// String field matches `pattern`
pub fn matches_regex(field: impl Into<String>, pattern: impl Into<String>) -> Constraint {
    Constraint::new(field, Operator::Regex, pattern.into())
}

/// Field value equals `key` of some record matched by `query`
pub fn select<U: ParseObject>(
    field: impl Into<String>,
    query: &Query<U>,
    key: impl Into<String>,
) -> Constraint {
    Constraint::new(field, Operator::Select, select_value(query, key))
}

/// Field value equals `key` of no record matched by `query`
pub fn dont_select<U: ParseObject>(
    field: impl Into<String>,
    query: &Query<U>,
    key: impl Into<String>,
) -> Constraint {
    Constraint::new(field, Operator::DontSelect, select_value(query, key))
}

fn list<V: Into<ConstraintValue>>(values: impl IntoIterator<Item = V>) -> ConstraintValue {
    ConstraintValue::List(values.into_iter().map(Into::into).collect())
}

fn select_value<U: ParseObject>(query: &Query<U>, key: impl Into<String>) -> ConstraintValue {
    ConstraintValue::Select {
        query: SubQuery::of(query),
        key: key.into(),
    }
}
