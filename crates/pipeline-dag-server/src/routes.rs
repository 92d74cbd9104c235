//! HTTP handlers.
//!
//! Handlers own no state. Each pipeline request is decoded, analyzed and
//! dropped within the request.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use pipeline_dag::{Pipeline, PipelineSummary};
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::models::{PingResponse, SchemaResponse};

/// `GET /` - liveness check.
pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse::default())
}

/// `POST /pipelines/parse` - count nodes and edges and detect cycles.
///
/// Bodies that fail to decode are rejected before analysis with the status
/// the JSON extractor reports (400 for syntax, 415 for content type, 422 for
/// schema mismatches, 413 for oversize bodies).
///
/// # Errors
///
/// Returns an [`ApiError`] when the request body is not a valid pipeline.
pub async fn parse_pipeline(
    payload: Result<Json<Pipeline>, JsonRejection>,
) -> Result<Json<PipelineSummary>, ApiError> {
    let Json(pipeline) = payload.map_err(|rejection| {
        warn!(status = %rejection.status(), reason = %rejection.body_text(), "Rejected pipeline");
        ApiError::from(rejection)
    })?;

    let summary = pipeline.summarize();
    debug!(
        num_nodes = summary.num_nodes,
        num_edges = summary.num_edges,
        is_dag = summary.is_dag,
        "Parsed pipeline"
    );
    Ok(Json(summary))
}

/// `GET /schema` - JSON Schemas of the pipeline endpoint.
pub async fn schema() -> Json<SchemaResponse> {
    Json(SchemaResponse::pipeline())
}
