//! Logging Event Tests
//!
//! Encoding and command building tag their log lines with event names.

use std::fmt;
use std::sync::{Arc, Mutex};

use parse_query::query::{greater_than, Query};
use parse_query::ParseObject;
use serde::Deserialize;
use tracing::field::{Field, Visit};
use tracing::span::{Attributes, Id, Record};
use tracing::{Metadata, Subscriber};

// =============================================================================
// Helpers
// =============================================================================

#[derive(Debug, Deserialize)]
struct GameScore;

impl ParseObject for GameScore {
    const CLASS_NAME: &'static str = "GameScore";
}

/// Collects the `event` field of every emitted log line.
#[derive(Clone, Default)]
struct EventCapture {
    names: Arc<Mutex<Vec<String>>>,
}

impl EventCapture {
    fn names(&self) -> Vec<String> {
        self.names.lock().unwrap().clone()
    }
}

struct EventName(Option<String>);

impl Visit for EventName {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "event" {
            self.0 = Some(format!("{:?}", value));
        }
    }
}

impl Subscriber for EventCapture {
    fn enabled(&self, _: &Metadata<'_>) -> bool {
        true
    }

    fn new_span(&self, _: &Attributes<'_>) -> Id {
        Id::from_u64(1)
    }

    fn record(&self, _: &Id, _: &Record<'_>) {}

    fn record_follows_from(&self, _: &Id, _: &Id) {}

    fn event(&self, event: &tracing::Event<'_>) {
        let mut name = EventName(None);
        event.record(&mut name);
        if let Some(name) = name.0 {
            self.names.lock().unwrap().push(name);
        }
    }

    fn enter(&self, _: &Id) {}

    fn exit(&self, _: &Id) {}
}

// =============================================================================
// Events
// =============================================================================

#[test]
fn test_encode_emits_query_encoded() {
    let capture = EventCapture::default();
    tracing::subscriber::with_default(capture.clone(), || {
        Query::<GameScore>::new([greater_than("score", 5)])
            .encode()
            .unwrap();
    });
    assert_eq!(capture.names(), vec!["QUERY_ENCODED".to_string()]);
}

#[test]
fn test_find_emits_encode_then_command_built() {
    let capture = EventCapture::default();
    tracing::subscriber::with_default(capture.clone(), || {
        Query::<GameScore>::all().find().unwrap();
    });
    assert_eq!(
        capture.names(),
        vec!["QUERY_ENCODED".to_string(), "COMMAND_BUILT".to_string()]
    );
}
