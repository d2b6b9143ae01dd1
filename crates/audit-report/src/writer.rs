//! CSV artifact writer.

use std::path::{Path, PathBuf};

use csv::{Terminator, WriterBuilder};
use serde::Serialize;
use tracing::{debug, info};

use audit_analysis::{critical_coverage, missing_features};
use audit_model::{CoverageRecord, CriticalFeatureSet, ExistenceRecord, FeatureInventory};

use crate::error::{ReportError, Result};
use crate::records::{CriticalCoverage, InventoryRow, MissingFeature, ReportRecord};

pub const CRITICAL_FEATURES_FILE: &str = "critical_features.csv";
pub const NODES_FEATURES_FILE: &str = "nodes_features.csv";
pub const FEATURE_EXISTENCE_FILE: &str = "feature_existence.csv";
pub const FEATURE_COVERAGE_FILE: &str = "feature_coverage.csv";
pub const MISSING_CRITICAL_FEATURES_FILE: &str = "missing_critical_features.csv";
pub const CRITICAL_FEATURES_COVERAGE_FILE: &str = "critical_features_coverage.csv";

/// Writes `records` to `path` as CSV with a header row, replacing any existing file.
pub fn write_report<R: ReportRecord>(path: &Path, records: &[R]) -> Result<()> {
    let write_err = |source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_path(path)
        .map_err(write_err)?;
    writer.write_record(R::HEADER).map_err(write_err)?;
    for record in records {
        writer.write_record(record.fields()).map_err(write_err)?;
    }
    writer.flush().map_err(|source| ReportError::Flush {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), rows = records.len(), "report written");
    Ok(())
}

/// Everything one run reports on.
#[derive(Debug, Clone, Copy)]
pub struct ReportBundle<'a> {
    pub features: &'a CriticalFeatureSet,
    pub inventory: &'a FeatureInventory,
    pub existence: &'a [ExistenceRecord],
    pub coverage: &'a [CoverageRecord],
}

/// Paths of the artifacts written by [`ReportWriter::write_all`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportPaths {
    pub critical_features: PathBuf,
    pub nodes_features: PathBuf,
    pub feature_existence: PathBuf,
    pub feature_coverage: PathBuf,
    pub missing_critical_features: PathBuf,
    pub critical_features_coverage: PathBuf,
}

impl ReportPaths {
    pub fn all(&self) -> [&Path; 6] {
        [
            self.critical_features.as_path(),
            self.nodes_features.as_path(),
            self.feature_existence.as_path(),
            self.feature_coverage.as_path(),
            self.missing_critical_features.as_path(),
            self.critical_features_coverage.as_path(),
        ]
    }
}

/// Writes report artifacts into one output directory.
#[derive(Debug, Clone)]
pub struct ReportWriter {
    output_dir: PathBuf,
}

impl ReportWriter {
    /// Creates the writer, creating `output_dir` if it does not exist.
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self> {
        let output_dir = output_dir.into();
        std::fs::create_dir_all(&output_dir).map_err(|source| ReportError::CreateDir {
            path: output_dir.clone(),
            source,
        })?;
        Ok(Self { output_dir })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Writes one artifact named `file_name` and returns its path.
    pub fn write<R: ReportRecord>(&self, file_name: &str, records: &[R]) -> Result<PathBuf> {
        let path = self.output_dir.join(file_name);
        write_report(&path, records)?;
        Ok(path)
    }

    /// Writes all six artifacts.
    pub fn write_all(&self, bundle: &ReportBundle<'_>) -> Result<ReportPaths> {
        let features: Vec<_> = bundle.features.iter().collect();
        let inventory: Vec<InventoryRow<'_>> = bundle
            .inventory
            .entries()
            .into_iter()
            .map(|(file, column)| InventoryRow { file, column })
            .collect();
        let missing: Vec<MissingFeature<'_>> = missing_features(bundle.existence)
            .into_iter()
            .map(MissingFeature)
            .collect();
        let critical: Vec<CriticalCoverage<'_>> =
            critical_coverage(bundle.coverage, bundle.features)
                .into_iter()
                .map(CriticalCoverage)
                .collect();

        let paths = ReportPaths {
            critical_features: self.write(CRITICAL_FEATURES_FILE, &features)?,
            nodes_features: self.write(NODES_FEATURES_FILE, &inventory)?,
            feature_existence: self.write(FEATURE_EXISTENCE_FILE, bundle.existence)?,
            feature_coverage: self.write(FEATURE_COVERAGE_FILE, bundle.coverage)?,
            missing_critical_features: self.write(MISSING_CRITICAL_FEATURES_FILE, &missing)?,
            critical_features_coverage: self.write(CRITICAL_FEATURES_COVERAGE_FILE, &critical)?,
        };

        info!(output_dir = %self.output_dir.display(), "reports written");
        Ok(paths)
    }
}
