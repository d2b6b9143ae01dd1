//! Run summary shared by the table and JSON outputs.

use std::path::PathBuf;

use serde::Serialize;

use audit_analysis::RunStatistics;
use crate::pipeline::AuditOutcome;
use audit_model::SkippedFile;
use audit_report::ReportPaths;

/// What `analyze` prints, as tables or as JSON.
#[derive(Debug, Serialize)]
pub struct AuditSummary {
    pub catalog: PathBuf,
    pub data_dir: PathBuf,
    pub output_dir: PathBuf,
    pub threshold: f64,
    pub statistics: RunStatistics,
    pub missing_features: Vec<String>,
    pub skipped_files: Vec<SkippedFile>,
    pub reports: ReportPaths,
}

impl AuditSummary {
    pub fn new(
        catalog: PathBuf,
        data_dir: PathBuf,
        output_dir: PathBuf,
        threshold: f64,
        outcome: AuditOutcome,
    ) -> Self {
        let missing_features = audit_analysis::missing_features(&outcome.analysis.existence)
            .into_iter()
            .map(|record| record.feature.clone())
            .collect();
        Self {
            catalog,
            data_dir,
            output_dir,
            threshold,
            statistics: outcome.analysis.statistics,
            missing_features,
            skipped_files: outcome.skipped,
            reports: outcome.reports,
        }
    }
}
