//! Tabular source adapter.
//!
//! Thin boundary over the `csv` crate with a fixed contract: one file in,
//! ordered rows of string cells out. Header handling, column offsets, and
//! all validation belong to the per-kind normalizers, so rows are read
//! unconditionally and ragged rows are allowed.

use std::path::Path;

use crate::CompileError;

/// One raw row: ordered string cells exactly as exported.
pub type Row = Vec<String>;

/// Read every row of a CSV table.
pub fn read_table(path: &Path) -> Result<Vec<Row>, CompileError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| CompileError::TableRead {
            path: path.to_path_buf(),
            source,
        })?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| CompileError::TableRead {
            path: path.to_path_buf(),
            source,
        })?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(rows)
}
