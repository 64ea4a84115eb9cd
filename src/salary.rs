//! Salary totals from `Name,Salary` files.
//!
//! Two entry points share one line scanner:
//!
//! - [`summarize_salaries`] returns a [`SalarySummary`] or a typed error, so a
//!   missing file and a file without valid lines can be told apart.
//! - [`total_salary`] never fails. Every problem is reported as a message on
//!   stdout and the result falls back to `(0, 0.0)`.

use crate::emit::{Emit, Style, Terminal};
use crate::error::RecordkitError;
use crate::types::{SalarySummary, SkippedLine};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
#[cfg(feature = "logging")]
use tracing;

/// Parses one stripped line into a salary. `None` means the line is malformed.
fn parse_salary(line: &str) -> Option<i64> {
    let mut fields = line.split(',');
    let (_name, salary) = match (fields.next(), fields.next(), fields.next()) {
        (Some(name), Some(salary), None) => (name, salary),
        _ => return None,
    };
    salary.trim().parse::<i64>().ok()
}

fn scan<F>(path: &Path, mut on_skip: F) -> Result<SalarySummary, RecordkitError>
where
    F: FnMut(&SkippedLine),
{
    let file = File::open(path).map_err(|e| RecordkitError::io(path, e))?;
    let reader = BufReader::new(file);
    let mut total: i64 = 0;
    let mut count = 0usize;
    let mut skipped = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = line.map_err(|e| RecordkitError::io(path, e))?;
        let line = line.trim();
        match parse_salary(line) {
            Some(salary) => {
                total = total
                    .checked_add(salary)
                    .ok_or(RecordkitError::SalaryOverflow { line_number })?;
                count += 1;
            }
            None => {
                #[cfg(feature = "logging")]
                tracing::debug!("Skipping malformed salary line {}: {:?}", line_number, line);
                let skip = SkippedLine {
                    line_number,
                    line: line.to_string(),
                };
                on_skip(&skip);
                skipped.push(skip);
            }
        }
    }
    let average = if count == 0 {
        0.0
    } else {
        total as f64 / count as f64
    };
    Ok(SalarySummary {
        total,
        average,
        count,
        skipped,
    })
}

/// Sums and averages the salaries in the file at `path`.
///
/// Malformed lines (not exactly two comma-separated fields, or a salary that
/// is not an integer) are skipped and listed in [`SalarySummary::skipped`].
/// A file with no valid lines yields a summary with `count == 0`.
///
/// # Errors
///
/// [`RecordkitError::NotFound`] if the file does not exist,
/// [`RecordkitError::Processing`] for any other I/O or decoding failure, and
/// [`RecordkitError::SalaryOverflow`] if the total does not fit in an `i64`.
pub fn summarize_salaries(path: impl AsRef<Path>) -> Result<SalarySummary, RecordkitError> {
    scan(path.as_ref(), |_| {})
}

/// Returns `(total, average)` for the file at `path`, printing warnings and
/// errors to stdout without color.
///
/// Never returns an error: a missing or unreadable file yields `(0, 0.0)`,
/// exactly like a file without valid lines.
pub fn total_salary(path: impl AsRef<Path>) -> (i64, f64) {
    total_salary_to(path, Terminal::stdout(false))
}

/// Same as [`total_salary`], but sends the messages to `emitter`.
///
/// Skipped lines are tagged [`Style::Warning`], a missing or unreadable file
/// [`Style::Error`].
pub fn total_salary_to<E: Emit>(path: impl AsRef<Path>, mut emitter: E) -> (i64, f64) {
    let path = path.as_ref();
    // Message delivery is best effort; a broken sink must not change the result.
    let result = scan(path, |skip| {
        let _ = emitter.emit(&skip.warning(), Style::Warning);
    });
    match result {
        Ok(summary) => summary.totals(),
        Err(RecordkitError::NotFound { path }) => {
            #[cfg(feature = "logging")]
            tracing::warn!("Salary file not found: {}", path.display());
            let _ = emitter.emit(
                &format!("Error: File not found at path '{}'", path.display()),
                Style::Error,
            );
            (0, 0.0)
        }
        Err(e) => {
            #[cfg(feature = "logging")]
            tracing::warn!("Salary aggregation failed: {}", e);
            let _ = emitter.emit(
                &format!("Unexpected error: {}", unexpected_detail(&e)),
                Style::Error,
            );
            (0, 0.0)
        }
    }
}

fn unexpected_detail(error: &RecordkitError) -> String {
    match error {
        RecordkitError::Processing { source, .. } => source.to_string(),
        other => other.to_string(),
    }
}
