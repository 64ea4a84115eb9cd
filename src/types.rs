use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One `Id,Name,Age` record from a cat file.
///
/// All three fields keep the exact text found between the commas. `age` is
/// not converted to a number; callers decide how to interpret it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatRecord {
    pub id: String,
    pub name: String,
    pub age: String,
}

/// A salary line that was skipped because it did not parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedLine {
    /// 1-indexed position of the line in the file.
    pub line_number: usize,
    /// The line with surrounding whitespace stripped.
    pub line: String,
}

/// Aggregate over every valid `Name,Salary` line of a file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalarySummary {
    /// Sum of all valid salaries.
    pub total: i64,
    /// `total / count`, or `0.0` when no line was valid.
    pub average: f64,
    /// Number of valid lines.
    pub count: usize,
    /// Lines that were skipped, in file order.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub skipped: Vec<SkippedLine>,
}

impl SkippedLine {
    /// The message printed for this line.
    pub fn warning(&self) -> String {
        format!("Warning: Skipping malformed line: {}", self.line)
    }
}

impl SalarySummary {
    /// The `(total, average)` pair.
    pub fn totals(&self) -> (i64, f64) {
        (self.total, self.average)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Directory,
    File,
}

/// A node visited while walking a directory tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeEntry {
    /// The full path to the entry.
    pub path: PathBuf,
    /// The final path component, lossily converted to UTF-8.
    pub name: String,
    pub kind: EntryKind,
    /// Nesting level below the root; direct children of the root are at depth 1.
    pub depth: usize,
}
