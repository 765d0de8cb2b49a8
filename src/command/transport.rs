//! Transport boundary
//!
//! The command layer hands a finished [`Request`] to a transport and gets raw
//! response bytes back. Connection handling, authentication, retries and
//! threading all live on the other side of this trait.

use thiserror::Error;

use super::request::Request;

/// Failure reported by a transport
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The request never produced a response
    #[error("Connection failed: {0}")]
    Connection(String),

    /// The backend answered with a non-success status
    #[error("Backend returned status {status}: {body}")]
    Status { status: u16, body: String },
}

/// Sends requests to the backend
pub trait Transport {
    /// Send `request` and return the raw response body
    fn send(&self, request: &Request) -> Result<Vec<u8>, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, request: &Request) -> Result<Vec<u8>, TransportError> {
        (**self).send(request)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn send(&self, request: &Request) -> Result<Vec<u8>, TransportError> {
        (**self).send(request)
    }
}
