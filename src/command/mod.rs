//! # Command Module
//!
//! Request descriptors for class queries, the response envelope decoders,
//! and the transport boundary they are sent through.

pub mod envelope;
pub mod request;
pub mod rest;
pub mod transport;

pub use request::{HttpMethod, Request};
pub use rest::{Decoder, RestCommand};
pub use transport::{Transport, TransportError};
