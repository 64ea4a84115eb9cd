use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum RecordkitError {
    #[error("File not found at path: '{path}'")]
    NotFound { path: PathBuf },
    #[error("Error processing file: {source}")]
    Processing {
        path: Option<PathBuf>,
        source: std::io::Error,
    },
    #[error("Malformed line {line_number}: '{line}'")]
    MalformedLine { line_number: usize, line: String },
    #[error("Salary total overflowed at line {line_number}")]
    SalaryOverflow { line_number: usize },
    #[error("Path '{0}' does not exist.")]
    MissingPath(PathBuf),
    #[error("Path '{0}' is not a directory.")]
    NotADirectory(PathBuf),
    #[error("Walk error: {0}")]
    Walk(String),
    #[error("Failed to write output: {0}")]
    Output(#[source] std::io::Error),
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
impl RecordkitError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            RecordkitError::NotFound { path }
        } else {
            RecordkitError::Processing {
                path: Some(path),
                source,
            }
        }
    }
}
