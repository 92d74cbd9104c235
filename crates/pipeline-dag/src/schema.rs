//! JSON Schemas for the pipeline wire format.

use crate::domain::{Pipeline, PipelineSummary};
use schemars::{Schema, schema_for};

/// Schema of a pipeline submission (the request body).
#[must_use]
pub fn request_schema() -> Schema {
    schema_for!(Pipeline)
}

/// Schema of a pipeline summary (the response body).
#[must_use]
pub fn response_schema() -> Schema {
    schema_for!(PipelineSummary)
}
