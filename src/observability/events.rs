//! Observable events
//!
//! Every log line emitted by the crate carries one of these names in its
//! `event` field.

use std::fmt;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Configuration
    /// Client configuration loaded from disk
    ConfigLoaded,

    // Queries
    /// Query document encoded into a request body
    QueryEncoded,

    // Commands
    /// Query encoded and bound to a request descriptor
    CommandBuilt,
    /// Request handed to the transport
    RequestSent,
    /// Response body decoded
    ResponseDecoded,
    /// Response body did not match the expected envelope
    ResponseDecodeFailed,
}

impl Event {
    /// Returns the event name
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::QueryEncoded => "QUERY_ENCODED",
            Event::CommandBuilt => "COMMAND_BUILT",
            Event::RequestSent => "REQUEST_SENT",
            Event::ResponseDecoded => "RESPONSE_DECODED",
            Event::ResponseDecodeFailed => "RESPONSE_DECODE_FAILED",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
