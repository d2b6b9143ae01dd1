//! Filtered views over analyzer output.

use audit_model::{CoverageRecord, CriticalFeatureSet, ExistenceRecord};

/// Critical features found in no scanned file, in catalog order.
pub fn missing_features(existence: &[ExistenceRecord]) -> Vec<&ExistenceRecord> {
    existence.iter().filter(|r| !r.exists()).collect()
}

/// Coverage records of critical columns, ordered by catalog order, then file.
pub fn critical_coverage<'a>(
    coverage: &'a [CoverageRecord],
    features: &CriticalFeatureSet,
) -> Vec<&'a CoverageRecord> {
    let mut view = Vec::new();
    for feature in features.feature_names() {
        view.extend(coverage.iter().filter(|r| r.column == feature));
    }
    view
}

/// Mean coverage of `feature` over the files that contain it.
///
/// Returns `None` when no file has the column.
pub fn mean_coverage(coverage: &[CoverageRecord], feature: &str) -> Option<f64> {
    let ratios: Vec<f64> = coverage
        .iter()
        .filter(|r| r.column == feature)
        .map(|r| r.non_null_ratio)
        .collect();
    if ratios.is_empty() {
        return None;
    }
    Some(ratios.iter().sum::<f64>() / ratios.len() as f64)
}
