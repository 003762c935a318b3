//! Rendering of sort results for display

use crate::error::Result;
use crate::sort::SortOutcome;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Printed in place of a report when there is no sequence
pub const NULL_ARRAY_MESSAGE: &str = "Array is null";

/// How sort results are rendered on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "unknown output format '{}' (expected text or json)",
                other
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

/// Three-line block: label, sequence, swap count
pub fn format_result(label: &str, sequence: Option<&[i64]>, swaps: u64) -> String {
    let Some(values) = sequence else {
        return NULL_ARRAY_MESSAGE.to_string();
    };

    format!("{} Result:\nArray: {:?}\nSwaps: {}", label, values, swaps)
}

/// Render an outcome in the requested format
pub fn render(outcome: &SortOutcome, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format_result(
            outcome.algorithm.label(),
            Some(outcome.sorted.as_slice()),
            outcome.swaps,
        )),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(outcome)?),
    }
}
