//! Request descriptor handed to the transport.

use std::fmt;

use serde_json::Value;

use crate::config::ClientConfig;

/// HTTP verb
///
/// Class queries always POST; the body's `_method` marker carries the read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Method, path and JSON body of an outbound call
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    method: HttpMethod,
    path: String,
    body: Value,
}

impl Request {
    pub fn new(method: HttpMethod, path: impl Into<String>, body: Value) -> Self {
        Self {
            method,
            path: path.into(),
            body,
        }
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    /// Path relative to the server URL, e.g. `/classes/GameScore`
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn body(&self) -> &Value {
        &self.body
    }

    /// Absolute URL under the configured server
    pub fn url(&self, config: &ClientConfig) -> String {
        format!("{}{}", config.server_url.trim_end_matches('/'), self.path)
    }

    /// Headers the backend expects on every call
    pub fn headers(&self, config: &ClientConfig) -> Vec<(&'static str, String)> {
        let mut headers = vec![
            ("X-Parse-Application-Id", config.application_id.clone()),
            ("Content-Type", "application/json".to_string()),
        ];
        if let Some(key) = &config.rest_api_key {
            headers.push(("X-Parse-REST-API-Key", key.clone()));
        }
        if let Some(key) = &config.master_key {
            headers.push(("X-Parse-Master-Key", key.clone()));
        }
        headers
    }
}
