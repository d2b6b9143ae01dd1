//! Cross-reference of critical features against the feature inventory.

use tracing::info;

use audit_model::{CriticalFeatureSet, ExistenceRecord, FeatureInventory};

/// Finds the files that provide each critical feature.
///
/// Returns one record per unique mapped feature name, in catalog order.
/// Features found nowhere are kept with empty locations.
pub fn analyze_existence(
    features: &CriticalFeatureSet,
    inventory: &FeatureInventory,
) -> Vec<ExistenceRecord> {
    let by_feature = inventory.by_feature();
    let records: Vec<ExistenceRecord> = features
        .feature_names()
        .into_iter()
        .map(|feature| {
            let locations = by_feature.get(feature).cloned().unwrap_or_default();
            ExistenceRecord::new(feature, locations)
        })
        .collect();

    let missing = records.iter().filter(|r| !r.exists()).count();
    info!(
        feature_count = records.len(),
        missing_count = missing,
        "existence analysis complete"
    );
    records
}
