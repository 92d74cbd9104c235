//! Pipeline DAG HTTP server binary.

use clap::Parser;
use pipeline_dag_server::PipelineServer;
use pipeline_dag_server::cli::Args;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Can be controlled via RUST_LOG, e.g. RUST_LOG=pipeline_dag=debug,tower_http=debug
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("pipeline_dag_server=info,pipeline_dag=info,tower_http=info")
        }))
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Starting pipeline-dag-server");

    let config = Args::parse().resolve().await?;
    PipelineServer::new(config)?.run().await?;

    Ok(())
}
