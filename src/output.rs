//! Rendering of reduction outcomes.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AddError;

/// How results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The bare integer, or `Error: <message>` (default)
    #[default]
    Text,
    /// One JSON object per input
    Json,
}

/// Same names and case rule as the `--output-format` flag and the settings
/// file: exact lowercase.
impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as clap::ValueEnum>::from_str(s, false)
            .map_err(|_| format!("unknown output format `{s}` (expected `text` or `json`)"))
    }
}

#[derive(Debug, Serialize)]
struct ErrorReport {
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    character: Option<char>,
    message: String,
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    input: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    sum: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorReport>,
}

impl<'a> Report<'a> {
    fn new(input: &'a str, outcome: Result<i64, AddError>) -> Self {
        match outcome {
            Ok(sum) => Self {
                input,
                sum: Some(sum),
                error: None,
            },
            Err(e) => Self {
                input,
                sum: None,
                error: Some(ErrorReport {
                    kind: e.kind(),
                    character: e.character(),
                    message: e.to_string(),
                }),
            },
        }
    }
}

/// Format the outcome of reducing `input` as a single line (no newline).
///
/// # Errors
///
/// Only if JSON serialization fails.
pub fn render(
    format: OutputFormat,
    input: &str,
    outcome: Result<i64, AddError>,
) -> serde_json::Result<String> {
    match (format, outcome) {
        (OutputFormat::Text, Ok(sum)) => Ok(sum.to_string()),
        (OutputFormat::Text, Err(e)) => Ok(format!("Error: {e}")),
        (OutputFormat::Json, outcome) => serde_json::to_string(&Report::new(input, outcome)),
    }
}
