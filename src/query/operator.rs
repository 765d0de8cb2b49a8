//! # Query Operators
//!
//! The closed set of comparison tags understood by the query endpoint.
//! Tags are a wire contract with the backend and never change.

use std::fmt;

use serde::Serialize;

/// Comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Operator {
    /// Less than
    #[serde(rename = "$lt")]
    LessThan,

    /// Less than or equal
    #[serde(rename = "$lte")]
    LessThanOrEqual,

    /// Greater than
    #[serde(rename = "$gt")]
    GreaterThan,

    /// Greater than or equal
    #[serde(rename = "$gte")]
    GreaterThanOrEqual,

    /// Equals
    #[serde(rename = "$eq")]
    Equals,

    /// Not equals
    #[serde(rename = "$neq")]
    NotEqual,

    /// Value in list
    #[serde(rename = "$in")]
    ContainedIn,

    /// Value not in list
    #[serde(rename = "$nin")]
    NotContainedIn,

    /// Field is set / unset
    #[serde(rename = "$exists")]
    Exists,

    /// Value matches a key in another query's results
    #[serde(rename = "$select")]
    Select,

    /// Value does not match a key in another query's results
    #[serde(rename = "$dontSelect")]
    DontSelect,

    /// Array field contains every listed value
    #[serde(rename = "$all")]
    All,

    /// String field matches a regular expression
    #[serde(rename = "$regex")]
    Regex,

    /// Pointer field matches a record returned by a sub-query
    #[serde(rename = "$inQuery")]
    InQuery,
}

impl Operator {
    /// Every operator, in declaration order
    pub const ALL: [Operator; 14] = [
        Operator::LessThan,
        Operator::LessThanOrEqual,
        Operator::GreaterThan,
        Operator::GreaterThanOrEqual,
        Operator::Equals,
        Operator::NotEqual,
        Operator::ContainedIn,
        Operator::NotContainedIn,
        Operator::Exists,
        Operator::Select,
        Operator::DontSelect,
        Operator::All,
        Operator::Regex,
        Operator::InQuery,
    ];

    /// Get the wire tag
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::LessThan => "$lt",
            Operator::LessThanOrEqual => "$lte",
            Operator::GreaterThan => "$gt",
            Operator::GreaterThanOrEqual => "$gte",
            Operator::Equals => "$eq",
            Operator::NotEqual => "$neq",
            Operator::ContainedIn => "$in",
            Operator::NotContainedIn => "$nin",
            Operator::Exists => "$exists",
            Operator::Select => "$select",
            Operator::DontSelect => "$dontSelect",
            Operator::All => "$all",
            Operator::Regex => "$regex",
            Operator::InQuery => "$inQuery",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
