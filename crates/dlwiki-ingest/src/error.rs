//! Error types for table ingestion.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    /// Table file not found.
    #[error("table file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to open or read a table file.
    #[error("failed to read table {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV content.
    #[error("failed to parse {path}: {message}")]
    CsvParse { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, IngestError>;
