// crates/agriverse-cli/src/output.rs
//
// Output formatting utilities for the Agriverse CLI.
// Supports table and JSON output modes.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tabled::{Table, Tabled};

use agriverse_core::AgriverseError;

/// Output format for CLI commands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed table output (default).
    #[default]
    Table,
    /// JSON output for machine consumption.
    Json,
}

/// Format a slice of Tabled items as a table string.
pub fn format_table<T: Tabled>(data: &[T]) -> String {
    Table::new(data).to_string()
}

/// Format a serializable value as a pretty-printed JSON string.
pub fn format_json<T: Serialize>(data: &T) -> String {
    serde_json::to_string_pretty(data).unwrap_or_else(|e| format!("JSON serialization error: {}", e))
}

/// Format a command failure for the chosen output mode.
///
/// In JSON mode, calculator errors carry their structured form (including
/// the failing field) next to the message.
pub fn format_error(err: &(dyn std::error::Error + 'static), format: OutputFormat) -> String {
    match format {
        OutputFormat::Table => format!("error: {}", err),
        OutputFormat::Json => {
            let report = match err.downcast_ref::<AgriverseError>() {
                Some(e) => serde_json::json!({ "error": e, "message": e.to_string() }),
                None => serde_json::json!({ "error": null, "message": err.to_string() }),
            };
            format_json(&report)
        }
    }
}
