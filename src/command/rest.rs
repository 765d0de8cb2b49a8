//! # REST Commands
//!
//! Binds an encoded query to the class endpoint and a response decoder.
//! Every read shape is a POST to `/classes/{className}`; the body's
//! `_method`, `limit` and `count` tell the backend what to do.

use std::fmt;

use serde_json::Value;

use super::envelope::{decode_count, decode_first, decode_results};
use super::request::{HttpMethod, Request};
use super::transport::Transport;
use crate::object::ParseObject;
use crate::observability::Event;
use crate::query::{Query, QueryError, QueryResult};

/// Response decoder
pub type Decoder<T> = fn(&[u8]) -> QueryResult<T>;

/// A request plus the decoder for its response
pub struct RestCommand<T> {
    request: Request,
    decoder: Decoder<T>,
}

impl<T> Clone for RestCommand<T> {
    fn clone(&self) -> Self {
        Self {
            request: self.request.clone(),
            decoder: self.decoder,
        }
    }
}

impl<T> fmt::Debug for RestCommand<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RestCommand")
            .field("request", &self.request)
            .finish_non_exhaustive()
    }
}

impl<T> RestCommand<T> {
    pub fn new(request: Request, decoder: Decoder<T>) -> Self {
        Self { request, decoder }
    }

    pub fn request(&self) -> &Request {
        &self.request
    }

    pub fn method(&self) -> HttpMethod {
        self.request.method()
    }

    pub fn path(&self) -> &str {
        self.request.path()
    }

    pub fn body(&self) -> &Value {
        self.request.body()
    }

    /// Apply the decoder to a raw response body
    pub fn decode(&self, bytes: &[u8]) -> QueryResult<T> {
        let decoded = (self.decoder)(bytes);
        if let Err(e) = &decoded {
            tracing::warn!(
                event = %Event::ResponseDecodeFailed,
                path = self.request.path(),
                error = %e,
                "Response did not match expected envelope"
            );
        } else {
            tracing::debug!(
                event = %Event::ResponseDecoded,
                path = self.request.path(),
                bytes = bytes.len(),
                "Response decoded"
            );
        }
        decoded
    }

    /// Send through `transport` and decode the response
    ///
    /// Transport errors are returned unchanged inside [`QueryError::Transport`].
    pub fn execute<Tr: Transport + ?Sized>(&self, transport: &Tr) -> QueryResult<T> {
        tracing::debug!(
            event = %Event::RequestSent,
            method = %self.request.method(),
            path = self.request.path(),
            "Sending query"
        );
        let bytes = transport.send(&self.request).map_err(QueryError::from)?;
        self.decode(&bytes)
    }
}

impl<T: ParseObject> Query<T> {
    /// Every record matching the query
    pub fn find(&self) -> QueryResult<RestCommand<Vec<T>>> {
        build(self, decode_results::<T>)
    }

    /// The first matching record, if any
    pub fn first(&self) -> QueryResult<RestCommand<Option<T>>> {
        let query = self.clone().limit(1);
        build(&query, decode_first::<T>)
    }

    /// Number of matching records
    pub fn count(&self) -> QueryResult<RestCommand<u64>> {
        let query = self.clone().limit(1).with_count();
        build(&query, decode_count::<T>)
    }
}

fn class_path(class_name: &str) -> String {
    format!("/classes/{}", class_name)
}

fn build<T: ParseObject, R>(query: &Query<T>, decoder: Decoder<R>) -> QueryResult<RestCommand<R>> {
    let body = query.encode()?;
    tracing::debug!(
        event = %Event::CommandBuilt,
        class = T::CLASS_NAME,
        limit = query.limit_value(),
        skip = query.skip_value(),
        count = query.is_count(),
        constraints = query.constraints().len(),
        "Query command built"
    );
    let request = Request::new(HttpMethod::Post, class_path(T::CLASS_NAME), body);
    Ok(RestCommand::new(request, decoder))
}
