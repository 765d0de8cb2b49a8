//! Backend date value
//!
//! Dates travel as `{"__type": "Date", "iso": "..."}` with millisecond
//! precision and a `Z` suffix.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

const DATE_TYPE: &str = "Date";

/// A UTC instant in the backend's date encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParseDate(DateTime<Utc>);

impl ParseDate {
    /// Wrap a UTC timestamp
    pub fn new(at: DateTime<Utc>) -> Self {
        Self(at)
    }

    /// The wrapped timestamp
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// ISO-8601 string with millisecond precision
    pub fn iso(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

impl From<DateTime<Utc>> for ParseDate {
    fn from(at: DateTime<Utc>) -> Self {
        Self(at)
    }
}

#[derive(Serialize, Deserialize)]
struct DateRepr {
    #[serde(rename = "__type")]
    kind: String,
    iso: String,
}

impl Serialize for ParseDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        DateRepr {
            kind: DATE_TYPE.to_string(),
            iso: self.iso(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ParseDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = DateRepr::deserialize(deserializer)?;
        if repr.kind != DATE_TYPE {
            return Err(D::Error::custom(format!(
                "expected __type \"{}\", found \"{}\"",
                DATE_TYPE, repr.kind
            )));
        }
        let at = DateTime::parse_from_rfc3339(&repr.iso).map_err(D::Error::custom)?;
        Ok(Self(at.with_timezone(&Utc)))
    }
}
