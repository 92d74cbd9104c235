//! Command-line arguments for the server binary.

use crate::config::ServerConfig;
use crate::error::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::debug;

/// Pipeline DAG server - reports node/edge counts and acyclicity over HTTP
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "pipeline-dag-server")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// YAML configuration file
    #[arg(short, long, env = "PIPELINE_DAG_CONFIG")]
    pub config: Option<PathBuf>,

    /// Interface to listen on
    #[arg(long, env = "PIPELINE_DAG_HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "PIPELINE_DAG_PORT")]
    pub port: Option<u16>,

    /// Origin allowed to make cross-origin requests
    #[arg(long, env = "PIPELINE_DAG_ALLOWED_ORIGIN")]
    pub allowed_origin: Option<String>,

    /// Maximum request body size in bytes
    #[arg(long, env = "PIPELINE_DAG_MAX_BODY_BYTES")]
    pub max_body_bytes: Option<usize>,
}

impl Args {
    /// Build the effective configuration: file (or defaults), then flags.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file cannot be loaded or the
    /// result fails validation.
    pub async fn resolve(&self) -> Result<ServerConfig> {
        let mut config = match &self.config {
            Some(path) => ServerConfig::load(path).await?,
            None => ServerConfig::default(),
        };

        if let Some(host) = &self.host {
            config.host.clone_from(host);
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(origin) = &self.allowed_origin {
            config.allowed_origin.clone_from(origin);
        }
        if let Some(limit) = self.max_body_bytes {
            config.max_body_bytes = limit;
        }

        config.validate()?;
        debug!(?config, "Resolved server configuration");
        Ok(config)
    }
}
