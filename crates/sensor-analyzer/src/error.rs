//! Analyzer Error Types

use thiserror::Error;

/// Errors that abort an analysis
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalyzerError {
    /// Header row lacks one or more required columns
    #[error("Malformed input: missing required column(s): {}", .missing.join(", "))]
    MalformedInput { missing: Vec<&'static str> },

    /// A `value` field is not a number
    #[error("Invalid value {value:?} on line {line}")]
    InvalidValue { line: u64, value: String },

    /// CSV structure could not be read
    #[error("CSV error on line {line}: {message}")]
    Csv { line: u64, message: String },
}

impl From<csv::Error> for AnalyzerError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line()).unwrap_or(0);
        AnalyzerError::Csv {
            line,
            message: err.to_string(),
        }
    }
}
