//! CLI argument structs for all commands.

use clap::Parser;
use std::path::PathBuf;

/// Arguments for the `check` command
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Pipeline files to check (JSON, or YAML with a .yaml/.yml extension)
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Exit with an error if any pipeline contains a cycle
    #[arg(long)]
    pub fail_on_cycle: bool,
}

/// Arguments for the `schema` command
#[derive(Parser, Debug, Clone)]
pub struct SchemaArgs {
    /// Print the response schema instead of the request schema
    #[arg(long)]
    pub response: bool,
}
