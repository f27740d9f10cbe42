//! Table file loading.
//!
//! Every named table lives in `<dir>/<name>.txt`. Data tables are
//! comma-separated; the localized label tables are tab-separated.

use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use dlwiki_model::RawRow;

use crate::error::{IngestError, Result};

/// File extension shared by every table export.
pub const TABLE_EXT: &str = "txt";

/// Read all records of a delimited table file into ordered row maps.
///
/// Column order is preserved per row. A BOM on the first header is
/// stripped. Values are kept verbatim; placeholder filtering is the
/// caller's concern.
pub fn read_rows(path: &Path, delimiter: u8) -> Result<Vec<RawRow>> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .delimiter(delimiter)
        .from_path(path)
        .map_err(|source| map_csv_error(path, source))?;
    let headers: Vec<String> = reader
        .headers()
        .map_err(|source| map_csv_error(path, source))?
        .iter()
        .map(|header| header.trim_start_matches('\u{feff}').to_string())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| map_csv_error(path, source))?;
        let row: RawRow = headers
            .iter()
            .zip(record.iter())
            .map(|(header, value)| (header.clone(), value.to_string()))
            .collect();
        rows.push(row);
    }
    debug!(path = %path.display(), rows = rows.len(), "loaded table");
    Ok(rows)
}

/// Read the named comma-separated data table from `dir`.
pub fn read_table(dir: &Path, name: &str) -> Result<Vec<RawRow>> {
    read_rows(&dir.join(format!("{name}.{TABLE_EXT}")), b',')
}

/// Read a tab-separated label table as rows; see
/// [`crate::index::build_index`] for collapsing it into a key→value map.
pub fn read_label_table(path: &Path) -> Result<Vec<RawRow>> {
    read_rows(path, b'\t')
}

fn map_csv_error(path: &Path, source: csv::Error) -> IngestError {
    let message = source.to_string();
    match source.into_kind() {
        csv::ErrorKind::Io(io) => IngestError::FileRead {
            path: path.to_path_buf(),
            source: io,
        },
        _ => IngestError::CsvParse {
            path: path.to_path_buf(),
            message,
        },
    }
}
