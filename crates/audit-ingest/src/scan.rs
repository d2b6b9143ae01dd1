//! Feature inventory scanning over a directory of TSV extracts.

use std::path::Path;
use std::time::Instant;

use tracing::{debug, info, warn};

use audit_model::{DataFile, FeatureInventory, SkippedFile};

use crate::discovery::{file_name, list_tsv_files};
use crate::error::Result;
use crate::tsv::{TsvTable, read_tsv_schema, read_tsv_table};

/// A successfully scanned extract with its rows.
#[derive(Debug, Clone)]
pub struct ScannedFile {
    pub name: String,
    pub table: TsvTable,
}

impl ScannedFile {
    pub fn data_file(&self) -> DataFile {
        DataFile::new(self.name.clone(), self.table.schema.columns().to_vec())
    }
}

/// Output of a full directory scan.
#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    /// Readable files, sorted by name.
    pub files: Vec<ScannedFile>,
    /// Files that could not be read, sorted by name.
    pub skipped: Vec<SkippedFile>,
}

impl ScanResult {
    /// File name -> header columns for every readable file.
    pub fn inventory(&self) -> FeatureInventory {
        FeatureInventory::from_files(self.files.iter().map(ScannedFile::data_file))
    }
}

fn skip(name: String, reason: String) -> SkippedFile {
    warn!(file = %name, %reason, "skipping data file");
    SkippedFile { file: name, reason }
}

/// Reads every `.tsv` file in `dir`, headers and rows.
///
/// A file that cannot be read is recorded in [`ScanResult::skipped`] and the
/// scan continues.
///
/// # Errors
///
/// Fails only when the directory itself cannot be listed.
pub fn scan_directory(dir: &Path) -> Result<ScanResult> {
    let start = Instant::now();
    let paths = list_tsv_files(dir)?;
    let mut result = ScanResult::default();

    for path in paths {
        let name = file_name(&path);
        match read_tsv_table(&path) {
            Ok(table) => {
                debug!(
                    file = %name,
                    columns = table.schema.len(),
                    rows = table.row_count(),
                    "scanned data file"
                );
                result.files.push(ScannedFile { name, table });
            }
            Err(error) => result.skipped.push(skip(name, error.to_string())),
        }
    }

    info!(
        dir = %dir.display(),
        file_count = result.files.len(),
        skipped_count = result.skipped.len(),
        duration_ms = start.elapsed().as_millis(),
        "scan complete"
    );
    Ok(result)
}

/// Reads only the header row of every `.tsv` file in `dir`.
pub fn scan_headers(dir: &Path) -> Result<(FeatureInventory, Vec<SkippedFile>)> {
    let mut files = Vec::new();
    let mut skipped = Vec::new();

    for path in list_tsv_files(dir)? {
        let name = file_name(&path);
        match read_tsv_schema(&path) {
            Ok(schema) => files.push(DataFile::new(name, schema.columns().to_vec())),
            Err(error) => skipped.push(skip(name, error.to_string())),
        }
    }

    info!(
        dir = %dir.display(),
        file_count = files.len(),
        skipped_count = skipped.len(),
        "header scan complete"
    );
    Ok((FeatureInventory::from_files(files), skipped))
}
