//! HTTP response models.
//!
//! The analysis result itself is [`pipeline_dag::PipelineSummary`]; the
//! types here cover the remaining endpoints and error bodies.

use schemars::Schema;
use serde::{Deserialize, Serialize};

/// Response from `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PingResponse {
    /// Always "Pong".
    #[serde(rename = "Ping")]
    pub ping: String,
}

impl Default for PingResponse {
    fn default() -> Self {
        Self {
            ping: "Pong".to_string(),
        }
    }
}

/// Body of every client-error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Why the request was rejected.
    pub detail: String,
}

/// Response from `GET /schema`.
#[derive(Debug, Clone, Serialize)]
pub struct SchemaResponse {
    /// Schema of the `POST /pipelines/parse` request body.
    pub request: Schema,

    /// Schema of the `POST /pipelines/parse` response body.
    pub response: Schema,
}

impl SchemaResponse {
    /// Build the schemas for the pipeline endpoint.
    #[must_use]
    pub fn pipeline() -> Self {
        Self {
            request: pipeline_dag::schema::request_schema(),
            response: pipeline_dag::schema::response_schema(),
        }
    }
}
