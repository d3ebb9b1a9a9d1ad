//! Error types for data operations
//!
//! Provides unified error handling for ingestion and binding operations.

use crate::types::{BindingField, ChartKind};
use thiserror::Error;

// Re-export CSV limits from constants module for consistency
pub use crate::constants::{MAX_CSV_ROWS, MAX_CSV_SIZE_MB};

/// Errors that can occur while ingesting an uploaded file
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// Source name does not end in `.csv`; raised before any parsing
    #[error("Please upload a valid CSV file ({name} is not a .csv file)")]
    WrongExtension { name: String },

    /// The CSV tokenizer rejected a record
    #[error("Error parsing CSV file: {}", describe_malformed(*line, message))]
    Malformed { line: Option<u64>, message: String },

    /// File is too large to load
    #[error("File too large: {size_mb}MB (max {max_mb}MB)")]
    TooLarge { size_mb: u64, max_mb: usize },

    /// Too many data rows to load
    #[error("Too many rows: {rows} (max {max_rows})")]
    TooManyRows { rows: usize, max_rows: usize },

    /// No header line at all
    #[error("Empty file")]
    Empty,
}

fn describe_malformed(line: Option<u64>, message: &str) -> String {
    match line {
        Some(line) => format!("line {}: {}", line, message),
        None => message.to_string(),
    }
}

impl From<csv::Error> for ParseError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line());
        let message = match err.kind() {
            csv::ErrorKind::UnequalLengths {
                expected_len, len, ..
            } => format!("expected {} fields, found {}", expected_len, len),
            csv::ErrorKind::Utf8 { .. } => "invalid UTF-8".to_string(),
            _ => err.to_string(),
        };
        ParseError::Malformed { line, message }
    }
}

/// Result type alias for ingestion
pub type ParseResult<T> = Result<T, ParseError>;

/// Attempted binding the current session cannot accept
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidBinding {
    /// The header is not part of the current schema
    #[error("Column \"{header}\" does not exist for {field}")]
    UnknownHeader { field: BindingField, header: String },

    /// The field is derived for this chart kind and cannot be chosen
    #[error("{field} is fixed for {} charts", kind.label())]
    FixedField { field: BindingField, kind: ChartKind },
}
