//! Pipeline DAG CLI binary.

use anyhow::Result;
use pipeline_dag::cli::{Cli, DEFAULT_LOG_FILTER};
use tracing_subscriber::EnvFilter;

/// Main entry point for the pipeline-dag CLI.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Example: RUST_LOG=pipeline_dag=debug pipeline-dag check flow.json
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse_args();
    cli.execute().await
}
