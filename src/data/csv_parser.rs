//! CSV file ingestion
//!
//! Parses an uploaded CSV file into a [`Dataset`] with per-field type
//! coercion. The file source supplies the bytes and the file name; this
//! module never touches the filesystem.
//!
//! ## Memory Limits
//!
//! To prevent unbounded memory growth:
//! - Files larger than [`MAX_CSV_SIZE_MB`] are rejected with [`ParseError::TooLarge`]
//! - Files with more than [`MAX_CSV_ROWS`] rows are rejected with [`ParseError::TooManyRows`]

use crate::constants::{CSV_EXTENSION, MAX_CSV_ROWS, MAX_CSV_SIZE_MB, MAX_EXACT_INTEGER};
use crate::data::error::{ParseError, ParseResult};
use crate::settings::Settings;
use crate::types::{CellValue, Dataset, Row};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// Decimal literal, optionally signed, with optional exponent
static NUMBER_LITERAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^-?(\d+\.?|\.\d+|\d+\.\d+)([eE][-+]?\d+)?$").expect("number literal regex")
});

/// Upload limits applied before and during parsing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IngestLimits {
    pub max_file_size_mb: usize,
    pub max_rows: usize,
}

impl Default for IngestLimits {
    fn default() -> Self {
        Self {
            max_file_size_mb: MAX_CSV_SIZE_MB,
            max_rows: MAX_CSV_ROWS,
        }
    }
}

impl From<&Settings> for IngestLimits {
    fn from(settings: &Settings) -> Self {
        Self {
            max_file_size_mb: settings.max_file_size_mb,
            max_rows: settings.max_rows,
        }
    }
}

/// Ingest an uploaded file with the default limits.
///
/// The extension check runs first; nothing is parsed for a non-CSV name.
pub fn ingest(file_name: &str, bytes: &[u8]) -> ParseResult<Dataset> {
    ingest_with_limits(file_name, bytes, IngestLimits::default())
}

/// Ingest an uploaded file under explicit limits
pub fn ingest_with_limits(
    file_name: &str,
    bytes: &[u8],
    limits: IngestLimits,
) -> ParseResult<Dataset> {
    check_extension(file_name)?;

    let size_mb = bytes.len() as u64 / (1024 * 1024);
    if size_mb > limits.max_file_size_mb as u64 {
        return Err(ParseError::TooLarge {
            size_mb,
            max_mb: limits.max_file_size_mb,
        });
    }

    let dataset = parse_csv_content(bytes, limits.max_rows)?;
    tracing::debug!(
        file = file_name,
        rows = dataset.row_count(),
        columns = dataset.column_count(),
        "Parsed CSV"
    );
    Ok(dataset)
}

/// Pre-flight validation: the name must end in `.csv` (case-sensitive)
pub fn check_extension(file_name: &str) -> ParseResult<()> {
    if file_name.ends_with(CSV_EXTENSION) {
        Ok(())
    } else {
        Err(ParseError::WrongExtension {
            name: file_name.to_string(),
        })
    }
}

/// Parse CSV bytes whose first record is the header line.
///
/// Any record-level error rejects the whole input. Rows whose fields are
/// all empty text are dropped.
pub fn parse_csv_content(bytes: &[u8], max_rows: usize) -> ParseResult<Dataset> {
    // The tokenizer reads an open quote to end of input without complaint
    if let Some(line) = unterminated_quote_line(bytes) {
        return Err(ParseError::Malformed {
            line: Some(line),
            message: "unterminated quoted field".to_string(),
        });
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(bytes);

    let header_record = reader.headers()?.clone();
    if header_record.is_empty() {
        return Err(ParseError::Empty);
    }
    let headers = unique_headers(header_record.iter().map(str::to_string).collect());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row = Row::new(record.iter().map(parse_field).collect());
        if row.is_empty_row() {
            continue;
        }
        if rows.len() >= max_rows {
            return Err(ParseError::TooManyRows {
                rows: rows.len() + 1, // +1 for the current row that exceeded limit
                max_rows,
            });
        }
        rows.push(row);
    }

    Dataset::new(headers, rows)
}

/// Type one field: number or boolean literal if the whole trimmed field is
/// one, otherwise the untouched text. Depends on nothing but the field.
pub fn parse_field(raw: &str) -> CellValue {
    let trimmed = raw.trim();
    match trimmed {
        "true" | "TRUE" => return CellValue::Boolean(true),
        "false" | "FALSE" => return CellValue::Boolean(false),
        _ => {}
    }

    if looks_like_number(trimmed) {
        if let Ok(n) = trimmed.parse::<f64>() {
            if n.abs() < MAX_EXACT_INTEGER {
                return CellValue::Number(n);
            }
        }
    }

    CellValue::Text(raw.to_string())
}

/// Check if a trimmed string is a plain decimal literal
///
/// # Examples
/// - `"123"`, `"-1.5"`, `".5"`, `"2e10"` -> true
/// - `"$123"`, `"1,000"`, `"0x10"`, `"NaN"` -> false
fn looks_like_number(s: &str) -> bool {
    !s.is_empty() && NUMBER_LITERAL.is_match(s)
}

/// Line on which a quoted field opens and never closes, if any.
///
/// A quote only opens a quoted field at the start of a field; stray quotes
/// inside unquoted fields are literal text.
fn unterminated_quote_line(bytes: &[u8]) -> Option<u64> {
    let mut line = 1;
    let mut open_line = None;
    let mut field_start = true;
    let mut iter = bytes.iter().peekable();

    while let Some(&b) = iter.next() {
        if open_line.is_some() {
            if b == b'"' {
                if iter.peek() == Some(&&b'"') {
                    iter.next();
                } else {
                    open_line = None;
                }
            }
        } else if b == b'"' && field_start {
            open_line = Some(line);
        }
        if b == b'\n' {
            line += 1;
        }
        field_start = open_line.is_none() && matches!(b, b',' | b'\n' | b'\r');
    }

    open_line
}

/// Make header names unique by suffixing `_1`, `_2`, ... to repeats
fn unique_headers(raw: Vec<String>) -> Vec<String> {
    let originals: HashSet<String> = raw.iter().cloned().collect();
    let mut seen: HashSet<String> = HashSet::with_capacity(raw.len());
    let mut headers = Vec::with_capacity(raw.len());

    for name in raw {
        if seen.insert(name.clone()) {
            headers.push(name);
            continue;
        }
        let mut suffix = 1;
        let renamed = loop {
            let candidate = format!("{}_{}", name, suffix);
            if !originals.contains(&candidate) && !seen.contains(&candidate) {
                break candidate;
            }
            suffix += 1;
        };
        tracing::debug!(header = %name, renamed = %renamed, "Renamed duplicate header");
        seen.insert(renamed.clone());
        headers.push(renamed);
    }

    headers
}
