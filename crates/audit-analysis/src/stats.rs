//! Headline counts for the run summary.

use serde::Serialize;

use audit_model::{
    AnalysisOptions, CoverageRecord, CriticalFeatureSet, ExistenceRecord, FeatureInventory,
};

use crate::views::mean_coverage;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunStatistics {
    /// Unique critical names in the catalog.
    pub critical_features: usize,
    /// Unique mapped names the data is searched for.
    pub mapped_features: usize,
    /// Distinct column names across all scanned files.
    pub data_columns: usize,
    pub missing_features: usize,
    pub present_features: usize,
    /// Present features whose mean coverage reaches the threshold.
    pub features_meeting_threshold: usize,
    pub scanned_files: usize,
    pub skipped_files: usize,
}

impl RunStatistics {
    pub fn compute(
        features: &CriticalFeatureSet,
        inventory: &FeatureInventory,
        existence: &[ExistenceRecord],
        coverage: &[CoverageRecord],
        skipped_files: usize,
        options: &AnalysisOptions,
    ) -> Self {
        let present = existence.iter().filter(|r| r.exists()).count();
        let meeting = existence
            .iter()
            .filter_map(|r| mean_coverage(coverage, &r.feature))
            .filter(|mean| options.passes(*mean))
            .count();
        Self {
            critical_features: features.len(),
            mapped_features: features.feature_names().len(),
            data_columns: inventory.distinct_columns().len(),
            missing_features: existence.len() - present,
            present_features: present,
            features_meeting_threshold: meeting,
            scanned_files: inventory.len(),
            skipped_files,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    use audit_model::{CriticalFeature, DataFile};

    fn locations(files: &[&str]) -> BTreeSet<String> {
        files.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn counts_missing_present_and_mean_coverage() {
        let features: CriticalFeatureSet = vec![
            CriticalFeature::new("A"),
            CriticalFeature::new("B"),
            CriticalFeature::new("C"),
        ]
        .into_iter()
        .collect();
        let inventory = FeatureInventory::from_files(vec![
            DataFile::new("f1.tsv", vec!["A".into(), "C".into()]),
            DataFile::new("f2.tsv", vec!["A".into(), "D".into()]),
        ]);
        let existence = vec![
            ExistenceRecord::new("A", locations(&["f1.tsv", "f2.tsv"])),
            ExistenceRecord::new("B", BTreeSet::new()),
            ExistenceRecord::new("C", locations(&["f1.tsv"])),
        ];
        // A: 0.1 in f1 alone fails, but its mean with 0.4 in f2 is 0.25.
        let coverage = vec![
            CoverageRecord::new("f1.tsv", "A", 1, 10, true, 0.2),
            CoverageRecord::new("f1.tsv", "C", 1, 10, true, 0.2),
            CoverageRecord::new("f2.tsv", "A", 4, 10, true, 0.2),
            CoverageRecord::new("f2.tsv", "D", 10, 10, false, 0.2),
        ];

        let stats = RunStatistics::compute(
            &features,
            &inventory,
            &existence,
            &coverage,
            1,
            &AnalysisOptions::default(),
        );

        assert_eq!(
            stats,
            RunStatistics {
                critical_features: 3,
                mapped_features: 3,
                data_columns: 3,
                missing_features: 1,
                present_features: 2,
                features_meeting_threshold: 1,
                scanned_files: 2,
                skipped_files: 1,
            }
        );
    }

    #[test]
    fn empty_run_counts_nothing() {
        let stats = RunStatistics::compute(
            &CriticalFeatureSet::new(),
            &FeatureInventory::default(),
            &[],
            &[],
            0,
            &AnalysisOptions::default(),
        );
        assert_eq!(stats, RunStatistics::default());
    }
}
