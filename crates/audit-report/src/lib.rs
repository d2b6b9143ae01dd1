//! Report artifacts for critical-feature audits.
//!
//! Each analyzer output is written as its own comma-separated file with a
//! fixed header and a deterministic row order, so unchanged inputs always
//! produce byte-identical reports:
//!
//! - `critical_features.csv`
//! - `nodes_features.csv`
//! - `feature_existence.csv`
//! - `feature_coverage.csv`
//! - `missing_critical_features.csv`
//! - `critical_features_coverage.csv`

mod error;
mod records;
mod writer;

pub use error::{ReportError, Result};
pub use records::{
    CriticalCoverage, InventoryRow, LOCATION_SEPARATOR, MissingFeature, ReportRecord,
};
pub use writer::{
    CRITICAL_FEATURES_COVERAGE_FILE, CRITICAL_FEATURES_FILE, FEATURE_COVERAGE_FILE,
    FEATURE_EXISTENCE_FILE, MISSING_CRITICAL_FEATURES_FILE, NODES_FEATURES_FILE, ReportBundle,
    ReportPaths, ReportWriter, write_report,
};
