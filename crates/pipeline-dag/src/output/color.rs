//! Color helpers for CLI output.
//!
//! Semantic Color Theme:
//!   - Success: green  (acyclic pipelines)
//!   - Error:   red    (cycles, load failures)
//!   - Info:    cyan   (file paths)
//!   - Muted:   dimmed (counts)

use colored::Colorize;

use super::OutputConfig;

/// Apply semantic "success" color (green) to text.
pub fn success(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.green().to_string()
}

/// Apply semantic "error" color (red) to text.
pub fn error(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.red().to_string()
}

/// Apply semantic "info" color (cyan) to text.
pub fn info(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.cyan().to_string()
}

pub(crate) fn dimmed(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.dimmed().to_string()
}
