//! Response envelope
//!
//! Query responses arrive as `{"results": [...], "count": n}` with both keys
//! optional.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::query::{QueryError, QueryResult};

const RESULTS_ENVELOPE: &str = "{\"results\": [record], \"count\"?: integer}";

#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
struct FindResult<T> {
    #[serde(default = "Vec::new")]
    results: Vec<T>,
    #[serde(default)]
    count: Option<u64>,
}

fn parse<T: DeserializeOwned>(bytes: &[u8]) -> QueryResult<FindResult<T>> {
    serde_json::from_slice(bytes).map_err(|e| QueryError::decoding(RESULTS_ENVELOPE, e.to_string()))
}

/// All records in the envelope, empty when `results` is missing
pub fn decode_results<T: DeserializeOwned>(bytes: &[u8]) -> QueryResult<Vec<T>> {
    Ok(parse::<T>(bytes)?.results)
}

/// First record in the envelope, if any
pub fn decode_first<T: DeserializeOwned>(bytes: &[u8]) -> QueryResult<Option<T>> {
    Ok(parse::<T>(bytes)?.results.into_iter().next())
}

/// Count field of the envelope, zero when missing
pub fn decode_count<T: DeserializeOwned>(bytes: &[u8]) -> QueryResult<u64> {
    Ok(parse::<T>(bytes)?.count.unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Score {
        score: i64,
    }

    #[test]
    fn test_decode_results() {
        let body = br#"{"results": [{"score": 5}, {"score": 9}]}"#;
        let results: Vec<Score> = decode_results(body).unwrap();
        assert_eq!(results, vec![Score { score: 5 }, Score { score: 9 }]);
    }

    #[test]
    fn test_missing_results_is_empty() {
        let results: Vec<Score> = decode_results(b"{}").unwrap();
        assert!(results.is_empty());
        assert_eq!(decode_first::<Score>(b"{}").unwrap(), None);
    }

    #[test]
    fn test_decode_first() {
        let body = br#"{"results": [{"score": 5}, {"score": 9}]}"#;
        assert_eq!(decode_first::<Score>(body).unwrap(), Some(Score { score: 5 }));
    }

    #[test]
    fn test_decode_count() {
        assert_eq!(decode_count::<Score>(br#"{"results": [], "count": 42}"#).unwrap(), 42);
        assert_eq!(decode_count::<Score>(br#"{"results": []}"#).unwrap(), 0);
    }

    #[test]
    fn test_malformed_envelope_names_shape() {
        let err = decode_results::<Score>(br#"{"results": 5}"#).unwrap_err();
        match err {
            QueryError::Decoding { expected, .. } => assert!(expected.contains("results")),
            other => panic!("Expected Decoding error, got {:?}", other),
        }
        assert!(decode_results::<Score>(b"not json").is_err());
    }
}
