//! Strict parser for `Id,Name,Age` cat files.
//!
//! Parsing is all-or-nothing: the first line without exactly three
//! comma-separated fields aborts the whole file and no records are returned.

use crate::error::RecordkitError;
use crate::types::CatRecord;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
#[cfg(feature = "logging")]
use tracing;

/// Reads every cat record from the file at `path`, in file order.
///
/// # Errors
///
/// - [`RecordkitError::NotFound`] if the file does not exist.
/// - [`RecordkitError::MalformedLine`] for the first line whose field count is not 3.
/// - [`RecordkitError::Processing`] for any other I/O or decoding failure.
pub fn get_cats_info(path: impl AsRef<Path>) -> Result<Vec<CatRecord>, RecordkitError> {
    let path = path.as_ref();
    #[cfg(feature = "logging")]
    tracing::debug!("Reading cat records from {}", path.display());
    let file = File::open(path).map_err(|e| RecordkitError::io(path, e))?;
    parse_cats(BufReader::new(file)).map_err(|e| match e {
        RecordkitError::Processing { source, .. } => RecordkitError::Processing {
            path: Some(path.to_path_buf()),
            source,
        },
        other => other,
    })
}

/// Parses cat records from any buffered reader.
///
/// Each line is stripped of surrounding whitespace and split on `,`. The
/// fields themselves are kept verbatim. Read failures come back as
/// [`RecordkitError::Processing`] without a path.
pub fn parse_cats<R: BufRead>(reader: R) -> Result<Vec<CatRecord>, RecordkitError> {
    let mut cats = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = line.map_err(|source| RecordkitError::Processing { path: None, source })?;
        let line = line.trim();
        let fields: Vec<&str> = line.split(',').collect();
        let [id, name, age] = fields.as_slice() else {
            #[cfg(feature = "logging")]
            tracing::debug!("Malformed cat line {}: {:?}", line_number, line);
            return Err(RecordkitError::MalformedLine {
                line_number,
                line: line.to_string(),
            });
        };
        cats.push(CatRecord {
            id: id.to_string(),
            name: name.to_string(),
            age: age.to_string(),
        });
    }
    Ok(cats)
}
