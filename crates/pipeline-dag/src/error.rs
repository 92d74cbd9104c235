//! Error types for loading pipeline documents.

use std::io;
use thiserror::Error;

/// The error type for pipeline-dag operations.
///
/// Analysis itself is total; errors only arise while reading or decoding
/// pipeline documents.
#[derive(Debug, Error)]
pub enum Error {
    /// A pipeline file could not be read.
    #[error("Failed to read {path}: {source}")]
    Read {
        /// Path of the file.
        path: String,
        /// The underlying IO error.
        #[source]
        source: io::Error,
    },

    /// A pipeline document is not valid JSON or does not match the schema.
    #[error("Invalid pipeline JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A pipeline document is not valid YAML or does not match the schema.
    #[error("Invalid pipeline YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A pipeline file could be read but not decoded.
    #[error("Invalid pipeline in {path}: {reason}")]
    Parse {
        /// Path of the file.
        path: String,
        /// Decoder message.
        reason: String,
    },
}

/// A specialized Result type for pipeline-dag operations.
pub type Result<T> = std::result::Result<T, Error>;
