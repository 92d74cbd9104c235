//! Command execution logic.

use anyhow::{Result, bail};

use super::args::{CheckArgs, SchemaArgs};
use crate::load::load_pipeline;
use crate::output::{self, CheckReport, OutputConfig, OutputMode};
use crate::schema;

/// Execute the check command
pub async fn execute_check(
    args: &CheckArgs,
    mode: OutputMode,
    config: &OutputConfig,
) -> Result<()> {
    let mut reports = Vec::with_capacity(args.files.len());
    let mut failures = 0usize;

    for path in &args.files {
        match load_pipeline(path).await {
            Ok(pipeline) => reports.push(CheckReport {
                path: path.display().to_string(),
                summary: pipeline.summarize(),
            }),
            Err(e) => {
                failures += 1;
                tracing::warn!(path = %path.display(), error = %e, "Skipping pipeline");
                eprintln!("{}", output::error(&e.to_string(), config));
            }
        }
    }

    output::print_reports(&reports, mode, config)?;

    if failures > 0 {
        bail!("{failures} pipeline file(s) could not be loaded");
    }

    let cyclic = reports.iter().filter(|r| !r.summary.is_dag).count();
    if args.fail_on_cycle && cyclic > 0 {
        bail!("{cyclic} pipeline(s) contain a cycle");
    }

    Ok(())
}

/// Execute the schema command
pub fn execute_schema(args: &SchemaArgs) -> Result<()> {
    let schema = if args.response {
        schema::response_schema()
    } else {
        schema::request_schema()
    };
    output::print_json(&schema)?;
    Ok(())
}
