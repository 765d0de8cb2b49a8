//! parse-query - typed queries for Parse-style backends
//!
//! Builds field constraints, encodes them into the nested JSON body the
//! class query endpoint expects, and wraps the body in a request descriptor
//! with a typed response decoder.
//!
//! ```ignore
//! use parse_query::query::{greater_than, less_than, Query};
//!
//! let command = Query::<GameScore>::new([greater_than("score", 5), less_than("score", 10)])
//!     .limit(10)
//!     .find()?;
//! let scores = command.execute(&transport)?;
//! ```

pub mod command;
pub mod config;
pub mod object;
pub mod observability;
pub mod query;
pub mod types;

pub use command::{HttpMethod, Request, RestCommand, Transport, TransportError};
pub use config::ClientConfig;
pub use object::ParseObject;
pub use query::{Constraint, ConstraintValue, Operator, Order, Query, QueryError, QueryResult};
pub use types::ParseDate;
