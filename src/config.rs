//! Client Configuration
//!
//! Server location and application credentials used to resolve request
//! descriptors into concrete calls.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::observability::Event;
use crate::query::{QueryError, QueryResult};

/// Backend client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the backend (default: "http://localhost:1337/parse")
    #[serde(default = "default_server_url")]
    pub server_url: String,

    /// Application id sent with every request
    pub application_id: String,

    /// REST API key (optional)
    #[serde(default)]
    pub rest_api_key: Option<String>,

    /// Master key (optional, bypasses ACLs)
    #[serde(default)]
    pub master_key: Option<String>,
}

fn default_server_url() -> String {
    "http://localhost:1337/parse".to_string()
}

impl ClientConfig {
    /// Create a config with no API keys
    pub fn new(server_url: impl Into<String>, application_id: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into(),
            application_id: application_id.into(),
            rest_api_key: None,
            master_key: None,
        }
    }

    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> QueryResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| QueryError::config(format!("Failed to read config: {}", e)))?;

        let config: ClientConfig = serde_json::from_str(&content)
            .map_err(|e| QueryError::config(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        tracing::debug!(
            event = %Event::ConfigLoaded,
            server_url = %config.server_url,
            "Client configuration loaded"
        );

        Ok(config)
    }

    /// Check required values
    pub fn validate(&self) -> QueryResult<()> {
        if self.application_id.trim().is_empty() {
            return Err(QueryError::config("application_id must not be empty"));
        }

        if !(self.server_url.starts_with("http://") || self.server_url.starts_with("https://")) {
            return Err(QueryError::config(format!(
                "Invalid server_url: '{}'. Expected an http or https URL.",
                self.server_url
            )));
        }

        Ok(())
    }
}
