//! Output formatting for CLI commands.
//!
//! Text output is one line per checked file; JSON output is an array of
//! [`CheckReport`] objects for programmatic use.

pub mod color;

use crate::domain::PipelineSummary;
use serde::Serialize;
use std::env;
use std::io::{self, Write};

pub use color::{error, info, success};

/// Output mode for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable text
    Text,
    /// JSON for scripts
    Json,
}

/// Configuration for text output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Whether to use colors in output.
    pub use_colors: bool,
}

impl OutputConfig {
    /// Create a new `OutputConfig` with explicit values.
    #[must_use]
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Detect settings from the environment.
    ///
    /// Colors are disabled when `NO_COLOR` is set (see <https://no-color.org>).
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(env::var_os("NO_COLOR").is_none())
    }
}

/// Analysis result for one pipeline file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    /// Path of the checked file
    pub path: String,

    /// Counts and acyclicity
    #[serde(flatten)]
    pub summary: PipelineSummary,
}

/// Print any serializable value as pretty JSON to stdout.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn print_json<T: Serialize>(value: &T) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    writeln!(handle, "{json}")
}

/// Write one text line describing a check result.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_report<W: Write>(
    w: &mut W,
    report: &CheckReport,
    config: &OutputConfig,
) -> io::Result<()> {
    let counts = format!(
        "{} {}, {} {}",
        report.summary.num_nodes,
        plural(report.summary.num_nodes, "node", "nodes"),
        report.summary.num_edges,
        plural(report.summary.num_edges, "edge", "edges"),
    );
    let verdict = if report.summary.is_dag {
        success("acyclic", config)
    } else {
        error("cycle detected", config)
    };

    writeln!(
        w,
        "{}: {} ({})",
        info(&report.path, config),
        verdict,
        color::dimmed(&counts, config)
    )
}

/// Print check results in the requested mode.
///
/// # Errors
///
/// Returns an error if writing to stdout fails.
pub fn print_reports(
    reports: &[CheckReport],
    mode: OutputMode,
    config: &OutputConfig,
) -> io::Result<()> {
    match mode {
        OutputMode::Json => print_json(&reports),
        OutputMode::Text => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            for report in reports {
                write_report(&mut handle, report, config)?;
            }
            Ok(())
        }
    }
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
