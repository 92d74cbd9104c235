//! Loading pipeline documents from disk.
//!
//! Files ending in `.yaml` or `.yml` are read as YAML; anything else is
//! treated as JSON, the format pipeline editors export.

use crate::domain::Pipeline;
use crate::error::{Error, Result};
use std::path::Path;
use tokio::fs;
use tracing::debug;

/// Document format of a pipeline file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// JSON document
    Json,
    /// YAML document
    Yaml,
}

impl Format {
    /// Pick the format from a file extension, defaulting to JSON.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Self::Yaml
            }
            _ => Self::Json,
        }
    }
}

/// Parse a pipeline from a JSON string.
///
/// # Errors
///
/// Returns [`Error::Json`] if the text is not a valid pipeline document.
pub fn parse_pipeline_json(text: &str) -> Result<Pipeline> {
    Ok(serde_json::from_str(text)?)
}

/// Parse a pipeline from a YAML string.
///
/// # Errors
///
/// Returns [`Error::Yaml`] if the text is not a valid pipeline document.
pub fn parse_pipeline_yaml(text: &str) -> Result<Pipeline> {
    Ok(serde_yaml::from_str(text)?)
}

/// Load a pipeline file, choosing the decoder from its extension.
///
/// # Errors
///
/// Returns [`Error::Read`] if the file cannot be read and [`Error::Parse`]
/// if its contents are not a valid pipeline document.
pub async fn load_pipeline(path: &Path) -> Result<Pipeline> {
    let content = fs::read_to_string(path).await.map_err(|source| Error::Read {
        path: path.display().to_string(),
        source,
    })?;

    let format = Format::from_path(path);
    debug!(path = %path.display(), ?format, "Loading pipeline");

    let parsed = match format {
        Format::Json => parse_pipeline_json(&content),
        Format::Yaml => parse_pipeline_yaml(&content),
    };

    parsed.map_err(|e| Error::Parse {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}
