//! # Query Document
//!
//! The full query payload: constraints plus pagination, ordering and
//! projection. Configuration methods consume the query and return the
//! updated value, so a base query is reused by cloning it.

use std::fmt;
use std::marker::PhantomData;

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use super::constraint::Constraint;
use super::errors::{QueryError, QueryResult};
use super::index::ConstraintIndex;
use crate::object::ParseObject;
use crate::observability::Event;

/// Default page size
pub const DEFAULT_LIMIT: usize = 100;

/// Method marker carried in the body; the request itself is a POST
pub const METHOD_MARKER: &str = "GET";

/// Sort key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Order {
    Ascending(String),
    Descending(String),
}

impl Order {
    pub fn ascending(field: impl Into<String>) -> Self {
        Order::Ascending(field.into())
    }

    pub fn descending(field: impl Into<String>) -> Self {
        Order::Descending(field.into())
    }

    /// Wire form: `field` or `-field`
    pub fn encoded(&self) -> String {
        match self {
            Order::Ascending(field) => field.clone(),
            Order::Descending(field) => format!("-{}", field),
        }
    }
}

impl Serialize for Order {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.encoded())
    }
}

/// A query against class `T`
pub struct Query<T> {
    limit: usize,
    skip: usize,
    constraints: ConstraintIndex,
    keys: Option<Vec<String>>,
    include: Option<Vec<String>>,
    order: Option<Vec<Order>>,
    count: Option<bool>,
    _class: PhantomData<fn() -> T>,
}

// Manual impls: `T` is only a marker and need not be Clone/Debug.
impl<T> Clone for Query<T> {
    fn clone(&self) -> Self {
        Self {
            limit: self.limit,
            skip: self.skip,
            constraints: self.constraints.clone(),
            keys: self.keys.clone(),
            include: self.include.clone(),
            order: self.order.clone(),
            count: self.count,
            _class: PhantomData,
        }
    }
}

impl<T> fmt::Debug for Query<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Query")
            .field("limit", &self.limit)
            .field("skip", &self.skip)
            .field("constraints", &self.constraints)
            .field("keys", &self.keys)
            .field("include", &self.include)
            .field("order", &self.order)
            .field("count", &self.count)
            .finish()
    }
}

impl<T> Default for Query<T> {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            skip: 0,
            constraints: ConstraintIndex::new(),
            keys: None,
            include: None,
            order: None,
            count: None,
            _class: PhantomData,
        }
    }
}

impl<T: ParseObject> Query<T> {
    /// Query matching every record of `T`
    pub fn all() -> Self {
        Self::default()
    }

    /// Query from a list of constraints
    pub fn new(constraints: impl IntoIterator<Item = Constraint>) -> Self {
        Self::default().filter(constraints)
    }

    /// Class this query targets
    pub fn class_name(&self) -> &'static str {
        T::CLASS_NAME
    }
}

impl<T> Query<T> {
    /// Add constraints to the existing set
    pub fn filter(mut self, constraints: impl IntoIterator<Item = Constraint>) -> Self {
        self.constraints.extend(constraints);
        self
    }

    /// Maximum number of results
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Number of results to skip
    pub fn skip(mut self, skip: usize) -> Self {
        self.skip = skip;
        self
    }

    /// Append sort keys, applied in order
    pub fn order(mut self, order: impl IntoIterator<Item = Order>) -> Self {
        self.order.get_or_insert_with(Vec::new).extend(order);
        self
    }

    /// Restrict returned fields
    pub fn keys<S: Into<String>>(mut self, keys: impl IntoIterator<Item = S>) -> Self {
        self.keys
            .get_or_insert_with(Vec::new)
            .extend(keys.into_iter().map(Into::into));
        self
    }

    /// Embed pointed-to records for these fields
    pub fn include<S: Into<String>>(mut self, include: impl IntoIterator<Item = S>) -> Self {
        self.include
            .get_or_insert_with(Vec::new)
            .extend(include.into_iter().map(Into::into));
        self
    }

    pub(crate) fn with_count(mut self) -> Self {
        self.count = Some(true);
        self
    }

    pub fn constraints(&self) -> &ConstraintIndex {
        &self.constraints
    }

    pub fn limit_value(&self) -> usize {
        self.limit
    }

    pub fn skip_value(&self) -> usize {
        self.skip
    }

    pub fn is_count(&self) -> bool {
        self.count.unwrap_or(false)
    }

    /// Encode the request body
    ///
    /// An empty constraint set encodes as `"where": {}`.
    pub fn encode(&self) -> QueryResult<Value> {
        let mut body = Map::new();
        body.insert("_method".to_string(), Value::from(METHOD_MARKER));
        body.insert("where".to_string(), Value::Object(self.constraints.encode()?));
        body.insert("limit".to_string(), Value::from(self.limit));
        body.insert("skip".to_string(), Value::from(self.skip));

        if let Some(keys) = &self.keys {
            body.insert("keys".to_string(), Value::from(keys.clone()));
        }
        if let Some(include) = &self.include {
            body.insert("include".to_string(), Value::from(include.clone()));
        }
        if let Some(order) = &self.order {
            let order: Vec<Value> = order.iter().map(|o| Value::from(o.encoded())).collect();
            body.insert("order".to_string(), Value::Array(order));
        }
        if self.count == Some(true) {
            body.insert("count".to_string(), Value::from(1));
        }

        tracing::debug!(
            event = %Event::QueryEncoded,
            constraints = self.constraints.len(),
            limit = self.limit,
            skip = self.skip,
            count = self.is_count(),
            "Query encoded"
        );

        Ok(Value::Object(body))
    }

    /// Encode the request body as a JSON string
    pub fn to_json(&self) -> QueryResult<String> {
        let body = self.encode()?;
        serde_json::to_string(&body).map_err(|e| QueryError::encoding("<body>", e.to_string()))
    }
}
