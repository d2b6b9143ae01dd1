//! Error types for catalog loading and data scanning.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the catalog or scanning extracts.
///
/// Catalog and directory errors abort a run. Every per-file error is caught by
/// the scanner and recorded as a skipped file instead.
#[derive(Debug, Error)]
pub enum IngestError {
    // === Catalog Errors ===
    /// Catalog could not be opened or parsed.
    #[error("failed to read catalog {path}: {source}")]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Catalog header lacks the required columns.
    #[error("invalid catalog format in {path}: {reason}")]
    CatalogFormat { path: PathBuf, reason: String },

    // === File System Errors ===
    /// Data directory not found or not a directory.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to open or read a data file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === TSV Errors ===
    /// File starts with a byte-order mark for an encoding other than UTF-8.
    #[error("unsupported encoding {encoding} in {path}")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    /// File has no header row.
    #[error("file is empty: {path}")]
    EmptyFile { path: PathBuf },

    /// Header row cannot be turned into a column list.
    #[error("malformed header in {path}: {reason}")]
    MalformedHeader { path: PathBuf, reason: String },

    /// The same column name appears twice in the header.
    #[error("duplicate column '{column}' in header of {path}")]
    DuplicateColumn { path: PathBuf, column: String },

    /// A data row has more fields than the header.
    #[error("line {line} of {path} has {fields} fields, header has {expected}")]
    RaggedRow {
        path: PathBuf,
        line: u64,
        fields: usize,
        expected: usize,
    },

    /// Tab-delimited content could not be parsed.
    #[error("failed to parse TSV {path}: {source}")]
    TsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
