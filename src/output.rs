//! Output formatting for parsed records.
//!
//! Provides functions to format cat records and salary summaries as plain
//! text or JSON, and to write the formatted result to a file.

use crate::{CatRecord, RecordkitError};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Formats cat records, one per line in text mode or as a JSON array.
pub fn format_cats(
    cats: &[CatRecord],
    format: OutputFormat,
    pretty: bool,
) -> Result<String, RecordkitError> {
    match format {
        OutputFormat::Text => Ok(format_cats_text(cats)),
        OutputFormat::Json => format_json(cats, pretty),
    }
}

/// Formats the `(total, average)` pair of a salary file.
///
/// Text mode always prints the average with a fractional part, so `2000`
/// comes out as `2000.0`.
pub fn format_salary(
    total: i64,
    average: f64,
    format: OutputFormat,
    pretty: bool,
) -> Result<String, RecordkitError> {
    match format {
        OutputFormat::Text => Ok(format!(
            "Total salary: {}, Average salary: {:?}\n",
            total, average
        )),
        OutputFormat::Json => format_json(&SalaryTotals { total, average }, pretty),
    }
}

/// Writes already formatted output to a file.
pub fn write_to_file(content: &str, path: impl AsRef<Path>) -> Result<(), RecordkitError> {
    fs::write(&path, content).map_err(|e| RecordkitError::io(path.as_ref(), e))
}

// ----------------------- Internal formatting -----------------------

#[derive(Serialize)]
struct SalaryTotals {
    total: i64,
    average: f64,
}

fn format_cats_text(cats: &[CatRecord]) -> String {
    let mut out = String::with_capacity(cats.len() * 48);
    for cat in cats {
        out.push_str(&format!(
            "id: {}, name: {}, age: {}\n",
            cat.id, cat.name, cat.age
        ));
    }
    out
}

fn format_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String, RecordkitError> {
    let mut json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    json.push('\n');
    Ok(json)
}
