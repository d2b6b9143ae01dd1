use std::path::PathBuf;

use thiserror::Error;

/// Failure to persist a report artifact. Never retried.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write report {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to flush report {path}: {source}")]
    Flush {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ReportError>;
