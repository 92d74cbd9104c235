//! Server configuration.
//!
//! Settings come from an optional YAML file, then command-line flags (or
//! their `PIPELINE_DAG_*` environment variables) override individual fields.
//!
//! ```yaml
//! host: 0.0.0.0
//! port: 8000
//! allowed_origin: http://localhost:3000
//! max_body_bytes: 2097152
//! ```

use crate::error::{Error, Result};
use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;

/// Default bind host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default bind port
pub const DEFAULT_PORT: u16 = 8000;

/// Default origin allowed to make cross-origin requests
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

/// Default request body limit (2 MiB)
pub const DEFAULT_MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Configuration for the HTTP server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to listen on
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// The single origin allowed by CORS
    pub allowed_origin: String,

    /// Maximum accepted request body size in bytes
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            allowed_origin: DEFAULT_ALLOWED_ORIGIN.to_string(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl ServerConfig {
    /// Load configuration from a YAML file. Missing fields take defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigLoad`] if the file cannot be read or parsed.
    pub async fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| Error::ConfigLoad {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        Self::from_yaml(&content).map_err(|e| match e {
            Error::ConfigLoad { reason, .. } => Error::ConfigLoad {
                path: path.display().to_string(),
                reason,
            },
            other => other,
        })
    }

    /// Parse configuration from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigLoad`] if the text is not valid configuration.
    pub fn from_yaml(text: &str) -> Result<Self> {
        // An empty file is a valid, all-defaults configuration.
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text).map_err(|e| Error::ConfigLoad {
            path: "<inline>".to_string(),
            reason: e.to_string(),
        })
    }

    /// Address string for logging and errors, e.g. `127.0.0.1:8000` or `[::1]:8000`.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }

    /// The allowed origin as a header value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if the origin is empty, a wildcard, or
    /// not a valid header value.
    pub fn origin_header(&self) -> Result<HeaderValue> {
        let origin = self.allowed_origin.trim();
        if origin.is_empty() || origin == "*" {
            return Err(Error::InvalidConfig {
                field: "allowed_origin",
                value: self.allowed_origin.clone(),
                reason: "Expected a single origin such as http://localhost:3000",
            });
        }
        HeaderValue::from_str(origin).map_err(|_| Error::InvalidConfig {
            field: "allowed_origin",
            value: self.allowed_origin.clone(),
            reason: "Not a valid header value",
        })
    }

    /// Check that every field is usable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] for the first unusable field.
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(Error::InvalidConfig {
                field: "host",
                value: self.host.clone(),
                reason: "Host cannot be empty",
            });
        }
        if self.max_body_bytes == 0 {
            return Err(Error::InvalidConfig {
                field: "max_body_bytes",
                value: self.max_body_bytes.to_string(),
                reason: "Body limit must be greater than zero",
            });
        }
        self.origin_header()?;
        Ok(())
    }
}
