//! CLI argument parsing and command dispatch.
//!
//! # Commands
//!
//! - `check`: Count nodes and edges and detect cycles in pipeline files
//! - `schema`: Print the JSON Schema of the pipeline wire format
//!
//! # Example
//!
//! ```bash
//! pipeline-dag check flow.json other.yaml
//! pipeline-dag --json check flow.json --fail-on-cycle
//! pipeline-dag schema --response
//! ```

mod args;
mod execute;

use anyhow::Result;
use clap::{Parser, Subcommand};

pub use args::{CheckArgs, SchemaArgs};

use crate::output::{OutputConfig, OutputMode};

/// Log filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "pipeline_dag=info";

/// Pipeline DAG - structural checks for node-and-edge pipelines
#[derive(Parser, Debug)]
#[command(name = "pipeline-dag")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output in JSON format for programmatic use
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Check pipeline files for cycles
    ///
    /// Prints node and edge counts and whether each pipeline is a DAG.
    Check(CheckArgs),

    /// Print the pipeline JSON Schema
    Schema(SchemaArgs),
}

impl Cli {
    /// Parse CLI arguments from command line
    #[must_use]
    pub fn parse_args() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse CLI arguments from an iterator (for testing)
    ///
    /// # Errors
    ///
    /// Returns a clap error if the arguments are invalid.
    pub fn try_parse_from<I, T>(iter: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// Execute the CLI command
    ///
    /// # Errors
    ///
    /// Returns an error if a pipeline cannot be loaded, output fails, or
    /// `--fail-on-cycle` is set and a cycle is found.
    pub async fn execute(&self) -> Result<()> {
        let mode = if self.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        };
        let config = if self.no_color {
            OutputConfig::new(false)
        } else {
            OutputConfig::from_env()
        };

        match &self.command {
            Commands::Check(args) => execute::execute_check(args, mode, &config).await,
            Commands::Schema(args) => execute::execute_schema(args),
        }
    }
}
