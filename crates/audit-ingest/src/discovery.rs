//! Data file discovery.

use std::path::{Path, PathBuf};

use crate::error::{IngestError, Result};

/// Lists all `.tsv` files in a directory (not recursive).
///
/// The extension must be exactly `tsv`; `.TSV` files are ignored. Returns
/// files sorted by filename.
pub fn list_tsv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let is_tsv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext == "tsv");

        if is_tsv {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(files)
}

/// File name of a path as a displayable string.
pub(crate) fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
