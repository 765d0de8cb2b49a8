//! # Query Model
//!
//! Typed constraints and the query document sent to the class query
//! endpoint.
//!
//! ```ignore
//! use parse_query::query::{greater_than, less_than, Order, Query};
//!
//! let query = Query::<GameScore>::new([greater_than("score", 5), less_than("score", 10)])
//!     .order([Order::descending("score")])
//!     .limit(10);
//! let body = query.encode()?;
//! ```

pub mod constraint;
pub mod document;
pub mod errors;
mod finite;
pub mod index;
pub mod operator;

pub use constraint::{
    contained_in, contains_all, dont_select, equals, equals_query, exists, greater_than,
    greater_than_or_equal, less_than, less_than_or_equal, matches_regex, not_contained_in,
    not_equal, select, Constraint, ConstraintValue, SubQuery,
};
pub use document::{Order, Query, DEFAULT_LIMIT};
pub use errors::{QueryError, QueryResult};
pub use index::ConstraintIndex;
pub use operator::Operator;
