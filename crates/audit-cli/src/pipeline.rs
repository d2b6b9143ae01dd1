//! Audit pipeline with explicit stages.
//!
//! The pipeline runs these stages in order:
//! 1. **Catalog**: extract the critical feature set from the catalog
//! 2. **Scan**: read every `.tsv` extract in the data directory
//! 3. **Analyze**: existence and coverage of every feature
//! 4. **Report**: write the six CSV artifacts
//!
//! Each stage takes the output of the previous stage and returns typed results.
//! Catalog, directory, and report failures abort the run; unreadable data
//! files are recorded as skipped.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use audit_analysis::{RunStatistics, analyze_coverage, analyze_existence};
use audit_ingest::{ScanResult, load_critical_features, scan_directory};
use audit_model::{
    AnalysisOptions, CoverageRecord, CriticalFeatureSet, ExistenceRecord, FeatureInventory,
    SkippedFile,
};
use audit_report::{ReportBundle, ReportPaths, ReportWriter};

/// Inputs of one audit run.
#[derive(Debug, Clone)]
pub struct AuditRequest {
    pub catalog: PathBuf,
    pub data_dir: PathBuf,
    pub output_dir: PathBuf,
    pub options: AnalysisOptions,
}

// ============================================================================
// Stage 1: Catalog
// ============================================================================

/// Load the critical feature set from the catalog.
pub fn extract_stage(catalog: &Path) -> Result<CriticalFeatureSet> {
    let span = info_span!("catalog", path = %catalog.display());
    let _guard = span.enter();
    let start = Instant::now();

    let features = load_critical_features(catalog)
        .with_context(|| format!("load catalog {}", catalog.display()))?;

    info!(
        critical_count = features.len(),
        duration_ms = start.elapsed().as_millis(),
        "critical features extracted"
    );
    Ok(features)
}

// ============================================================================
// Stage 2: Scan
// ============================================================================

/// Read every `.tsv` file of the data directory.
pub fn scan_stage(data_dir: &Path) -> Result<ScanResult> {
    let span = info_span!("scan", dir = %data_dir.display());
    let _guard = span.enter();

    scan_directory(data_dir).with_context(|| format!("scan {}", data_dir.display()))
}

// ============================================================================
// Stage 3: Analyze
// ============================================================================

/// Result of the analysis stage.
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub inventory: FeatureInventory,
    /// One record per mapped feature, in catalog order.
    pub existence: Vec<ExistenceRecord>,
    /// One record per (file, column), sorted by file then column.
    pub coverage: Vec<CoverageRecord>,
    pub statistics: RunStatistics,
}

/// Run existence and coverage analysis over a completed scan.
pub fn analyze_stage(
    features: &CriticalFeatureSet,
    scan: &ScanResult,
    options: &AnalysisOptions,
) -> AnalysisResult {
    let span = info_span!("analyze");
    let _guard = span.enter();
    let start = Instant::now();

    let inventory = scan.inventory();
    let existence = analyze_existence(features, &inventory);
    let coverage = analyze_coverage(&scan.files, features, options);
    let statistics = RunStatistics::compute(
        features,
        &inventory,
        &existence,
        &coverage,
        scan.skipped.len(),
        options,
    );

    info!(
        present = statistics.present_features,
        missing = statistics.missing_features,
        coverage_rows = coverage.len(),
        duration_ms = start.elapsed().as_millis(),
        "analysis complete"
    );
    AnalysisResult {
        inventory,
        existence,
        coverage,
        statistics,
    }
}

// ============================================================================
// Stage 4: Report
// ============================================================================

/// Write all report artifacts into `output_dir`.
pub fn report_stage(
    output_dir: &Path,
    features: &CriticalFeatureSet,
    analysis: &AnalysisResult,
) -> Result<ReportPaths> {
    let span = info_span!("report", output_dir = %output_dir.display());
    let _guard = span.enter();
    let start = Instant::now();

    let writer = ReportWriter::new(output_dir).context("prepare output directory")?;
    let paths = writer
        .write_all(&ReportBundle {
            features,
            inventory: &analysis.inventory,
            existence: &analysis.existence,
            coverage: &analysis.coverage,
        })
        .context("write reports")?;

    info!(duration_ms = start.elapsed().as_millis(), "report stage complete");
    Ok(paths)
}

/// Everything produced by a successful run.
#[derive(Debug, Clone)]
pub struct AuditOutcome {
    pub features: CriticalFeatureSet,
    pub analysis: AnalysisResult,
    pub skipped: Vec<SkippedFile>,
    pub reports: ReportPaths,
}

/// Run all four stages.
pub fn run_audit(request: &AuditRequest) -> Result<AuditOutcome> {
    let span = info_span!("audit", data_dir = %request.data_dir.display());
    let _guard = span.enter();
    let start = Instant::now();

    let features = extract_stage(&request.catalog)?;
    let scan = scan_stage(&request.data_dir)?;
    let analysis = analyze_stage(&features, &scan, &request.options);
    let reports = report_stage(&request.output_dir, &features, &analysis)?;

    info!(duration_ms = start.elapsed().as_millis(), "audit complete");
    Ok(AuditOutcome {
        features,
        analysis,
        skipped: scan.skipped,
        reports,
    })
}
