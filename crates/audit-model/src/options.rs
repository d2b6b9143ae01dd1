//! Configuration passed explicitly into every analyzer.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{OptionsError, Result};

/// Minimum non-null ratio a column needs to pass when nothing else is configured.
pub const DEFAULT_COVERAGE_THRESHOLD: f64 = 0.2;

/// Decides which cell values count as missing.
///
/// Absent values, empty strings and whitespace-only strings are always null.
/// Extra sentinels (such as `NA`) are only null when added as markers; they are
/// compared against the trimmed value, case-sensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NullPolicy {
    pub markers: BTreeSet<String>,
}

impl NullPolicy {
    pub fn blank_only() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        let marker = marker.into();
        let trimmed = marker.trim();
        if !trimmed.is_empty() {
            self.markers.insert(trimmed.to_string());
        }
        self
    }

    #[must_use]
    pub fn with_markers<I, S>(self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        markers
            .into_iter()
            .fold(self, |policy, marker| policy.with_marker(marker))
    }

    pub fn is_null(&self, value: Option<&str>) -> bool {
        match value {
            None => true,
            Some(raw) => {
                let trimmed = raw.trim();
                trimmed.is_empty() || self.markers.contains(trimmed)
            }
        }
    }
}

/// Options for one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisOptions {
    /// Non-null ratio at or above which a column passes.
    pub threshold: f64,
    pub null_policy: NullPolicy,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_COVERAGE_THRESHOLD,
            null_policy: NullPolicy::default(),
        }
    }
}

impl AnalysisOptions {
    /// Creates options with the given threshold and the blank-only null policy.
    pub fn new(threshold: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(OptionsError::ThresholdOutOfRange(threshold));
        }
        Ok(Self {
            threshold,
            ..Self::default()
        })
    }

    #[must_use]
    pub fn with_null_policy(mut self, policy: NullPolicy) -> Self {
        self.null_policy = policy;
        self
    }

    pub fn passes(&self, ratio: f64) -> bool {
        ratio >= self.threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_policy_only_treats_blanks_as_null() {
        let policy = NullPolicy::blank_only();
        assert!(policy.is_null(None));
        assert!(policy.is_null(Some("")));
        assert!(policy.is_null(Some(" \t ")));
        assert!(!policy.is_null(Some("NA")));
        assert!(!policy.is_null(Some("0")));
    }

    #[test]
    fn markers_match_trimmed_values() {
        let policy = NullPolicy::blank_only().with_markers(["NA", " NULL ", "  "]);
        assert_eq!(policy.markers.len(), 2);
        assert!(policy.is_null(Some(" NA ")));
        assert!(policy.is_null(Some("NULL")));
        assert!(!policy.is_null(Some("na")));
    }

    #[test]
    fn threshold_range_is_validated() {
        assert!(AnalysisOptions::new(0.0).is_ok());
        assert!(AnalysisOptions::new(1.0).is_ok());
        assert_eq!(
            AnalysisOptions::new(1.5),
            Err(OptionsError::ThresholdOutOfRange(1.5))
        );
        assert!(AnalysisOptions::new(f64::NAN).is_err());
    }

    #[test]
    fn default_threshold() {
        let options = AnalysisOptions::default();
        assert!((options.threshold - DEFAULT_COVERAGE_THRESHOLD).abs() < f64::EPSILON);
        assert!(options.passes(0.2));
        assert!(!options.passes(0.19));
    }
}
