//! Analyzer output records.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Where a critical feature was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExistenceRecord {
    pub feature: String,
    /// Files whose header contains the feature, in lexical order.
    pub locations: BTreeSet<String>,
}

impl ExistenceRecord {
    pub fn new(feature: impl Into<String>, locations: BTreeSet<String>) -> Self {
        Self {
            feature: feature.into(),
            locations,
        }
    }

    pub fn exists(&self) -> bool {
        !self.locations.is_empty()
    }
}

/// Non-null coverage of one column in one file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageRecord {
    pub file: String,
    pub column: String,
    pub non_null_count: usize,
    pub row_count: usize,
    /// `non_null_count / row_count`, or `0.0` for a file without data rows.
    pub non_null_ratio: f64,
    pub is_critical: bool,
    pub passes_threshold: bool,
}

impl CoverageRecord {
    pub fn new(
        file: impl Into<String>,
        column: impl Into<String>,
        non_null_count: usize,
        row_count: usize,
        is_critical: bool,
        threshold: f64,
    ) -> Self {
        let non_null_ratio = if row_count == 0 {
            0.0
        } else {
            (non_null_count.min(row_count) as f64 / row_count as f64).clamp(0.0, 1.0)
        };
        Self {
            file: file.into(),
            column: column.into(),
            non_null_count,
            row_count,
            non_null_ratio,
            is_critical,
            passes_threshold: non_null_ratio >= threshold,
        }
    }
}
