//! Command Execution Tests
//!
//! Commands sent through a transport:
//! - The transport sees the exact descriptor
//! - Decoded results follow the command shape
//! - Transport failures come back unchanged
//! - Bad envelopes become decoding errors

use std::cell::RefCell;

use parse_query::command::{HttpMethod, Request, Transport, TransportError};
use parse_query::query::{equals, greater_than, Query, QueryError};
use parse_query::{ClientConfig, ParseObject};
use serde::Deserialize;
use serde_json::json;

// =============================================================================
// Helpers
// =============================================================================

#[derive(Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
struct GameScore {
    object_id: String,
    score: i64,
}

impl ParseObject for GameScore {
    const CLASS_NAME: &'static str = "GameScore";
}

/// Replays a canned response and records every request it receives.
struct MockTransport {
    response: Result<Vec<u8>, TransportError>,
    sent: RefCell<Vec<Request>>,
}

impl MockTransport {
    fn replying(body: &str) -> Self {
        Self {
            response: Ok(body.as_bytes().to_vec()),
            sent: RefCell::new(Vec::new()),
        }
    }

    fn failing(err: TransportError) -> Self {
        Self {
            response: Err(err),
            sent: RefCell::new(Vec::new()),
        }
    }
}

impl Transport for MockTransport {
    fn send(&self, request: &Request) -> Result<Vec<u8>, TransportError> {
        self.sent.borrow_mut().push(request.clone());
        self.response.clone()
    }
}

// =============================================================================
// Happy path
// =============================================================================

#[test]
fn test_find_sends_descriptor_and_decodes() {
    let transport = MockTransport::replying(
        r#"{"results": [{"objectId": "a1", "score": 12}, {"objectId": "b2", "score": 30}]}"#,
    );
    let query = Query::<GameScore>::new([greater_than("score", 10)]);

    let scores = query.find().unwrap().execute(&transport).unwrap();
    assert_eq!(scores.len(), 2);
    assert_eq!(scores[1].object_id, "b2");

    let sent = transport.sent.borrow();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].method(), HttpMethod::Post);
    assert_eq!(sent[0].path(), "/classes/GameScore");
    assert_eq!(sent[0].body()["where"], json!({"score": {"$gt": 10}}));
}

#[test]
fn test_first_with_no_results() {
    let transport = MockTransport::replying(r#"{"results": []}"#);
    let first = Query::<GameScore>::new([equals("objectId", "missing")])
        .first()
        .unwrap()
        .execute(&transport)
        .unwrap();
    assert_eq!(first, None);
    assert_eq!(transport.sent.borrow()[0].body()["limit"], json!(1));
}

#[test]
fn test_count_defaults_to_zero() {
    let transport = MockTransport::replying(r#"{"results": []}"#);
    let count = Query::<GameScore>::all()
        .count()
        .unwrap()
        .execute(&transport)
        .unwrap();
    assert_eq!(count, 0);
}

#[test]
fn test_count_reads_envelope() {
    let transport = MockTransport::replying(r#"{"results": [], "count": 17}"#);
    let count = Query::<GameScore>::all()
        .count()
        .unwrap()
        .execute(&transport)
        .unwrap();
    assert_eq!(count, 17);
}

#[test]
fn test_request_resolves_against_config() {
    let config = ClientConfig::new("https://api.example.com/parse", "app");
    let command = Query::<GameScore>::all().find().unwrap();
    assert_eq!(
        command.request().url(&config),
        "https://api.example.com/parse/classes/GameScore"
    );
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn test_transport_error_passes_through() {
    let failure = TransportError::Status {
        status: 403,
        body: r#"{"code": 119, "error": "unauthorized"}"#.to_string(),
    };
    let transport = MockTransport::failing(failure.clone());

    let err = Query::<GameScore>::all()
        .find()
        .unwrap()
        .execute(&transport)
        .unwrap_err();
    match err {
        QueryError::Transport(inner) => assert_eq!(inner, failure),
        other => panic!("Expected Transport error, got {:?}", other),
    }
}

#[test]
fn test_connection_error_passes_through() {
    let transport = MockTransport::failing(TransportError::Connection("refused".to_string()));
    let err = Query::<GameScore>::all()
        .count()
        .unwrap()
        .execute(&transport)
        .unwrap_err();
    assert_eq!(err.code(), "PARSE_TRANSPORT_FAILED");
    assert!(err.to_string().contains("refused"));
}

#[test]
fn test_malformed_envelope_is_decoding_error() {
    let transport = MockTransport::replying(r#"{"results": [{"score": "high"}]}"#);
    let err = Query::<GameScore>::all()
        .find()
        .unwrap()
        .execute(&transport)
        .unwrap_err();
    assert!(matches!(err, QueryError::Decoding { .. }));
    assert_eq!(err.code(), "PARSE_RESPONSE_DECODING_FAILED");
}
