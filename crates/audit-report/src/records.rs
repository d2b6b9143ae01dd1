//! Row layouts of the report artifacts.

use audit_model::{CoverageRecord, CriticalFeature, ExistenceRecord};

/// Separator between file names inside a single `locations` cell.
pub const LOCATION_SEPARATOR: &str = "; ";

/// A record type that can be written as one row of a CSV report.
pub trait ReportRecord {
    /// Column names, in output order.
    const HEADER: &'static [&'static str];

    /// Cell values, one per header column.
    fn fields(&self) -> Vec<String>;
}

impl<R: ReportRecord> ReportRecord for &R {
    const HEADER: &'static [&'static str] = R::HEADER;

    fn fields(&self) -> Vec<String> {
        (*self).fields()
    }
}

pub(crate) fn yes_no(value: bool) -> String {
    let flag = if value { "y" } else { "n" };
    flag.to_string()
}

/// Shortest text that parses back to the same `f64`.
///
/// `passes_threshold` is decided on the exact ratio, so the written value must
/// not be rounded.
pub(crate) fn format_ratio(ratio: f64) -> String {
    format!("{ratio}")
}

impl ReportRecord for CriticalFeature {
    const HEADER: &'static [&'static str] = &["name", "mapped_name"];

    fn fields(&self) -> Vec<String> {
        vec![self.name.clone(), self.mapped_name.clone()]
    }
}

/// One `(file, column)` pair of the feature inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InventoryRow<'a> {
    pub file: &'a str,
    pub column: &'a str,
}

impl ReportRecord for InventoryRow<'_> {
    const HEADER: &'static [&'static str] = &["file", "column"];

    fn fields(&self) -> Vec<String> {
        vec![self.file.to_string(), self.column.to_string()]
    }
}

impl ReportRecord for ExistenceRecord {
    const HEADER: &'static [&'static str] = &["feature", "exists", "locations"];

    fn fields(&self) -> Vec<String> {
        let locations: Vec<&str> = self.locations.iter().map(String::as_str).collect();
        vec![
            self.feature.clone(),
            yes_no(self.exists()),
            locations.join(LOCATION_SEPARATOR),
        ]
    }
}

impl ReportRecord for CoverageRecord {
    const HEADER: &'static [&'static str] = &[
        "file",
        "column",
        "non_null_ratio",
        "is_critical",
        "passes_threshold",
    ];

    fn fields(&self) -> Vec<String> {
        vec![
            self.file.clone(),
            self.column.clone(),
            format_ratio(self.non_null_ratio),
            yes_no(self.is_critical),
            yes_no(self.passes_threshold),
        ]
    }
}

/// A critical feature absent from every scanned file.
#[derive(Debug, Clone, Copy)]
pub struct MissingFeature<'a>(pub &'a ExistenceRecord);

impl ReportRecord for MissingFeature<'_> {
    const HEADER: &'static [&'static str] = &["feature"];

    fn fields(&self) -> Vec<String> {
        vec![self.0.feature.clone()]
    }
}

/// Coverage of a critical column, with its raw counts.
#[derive(Debug, Clone, Copy)]
pub struct CriticalCoverage<'a>(pub &'a CoverageRecord);

impl ReportRecord for CriticalCoverage<'_> {
    const HEADER: &'static [&'static str] = &[
        "feature",
        "file",
        "non_null_ratio",
        "non_null_count",
        "row_count",
        "passes_threshold",
    ];

    fn fields(&self) -> Vec<String> {
        let record = self.0;
        vec![
            record.column.clone(),
            record.file.clone(),
            format_ratio(record.non_null_ratio),
            record.non_null_count.to_string(),
            record.row_count.to_string(),
            yes_no(record.passes_threshold),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn existence_row_joins_locations() {
        let record = ExistenceRecord::new(
            "case_id",
            BTreeSet::from(["sample.tsv".to_string(), "case.tsv".to_string()]),
        );
        assert_eq!(record.fields(), vec!["case_id", "y", "case.tsv; sample.tsv"]);

        let missing = ExistenceRecord::new("bmi", BTreeSet::new());
        assert_eq!(missing.fields(), vec!["bmi", "n", ""]);
    }

    #[test]
    fn coverage_row_formats_ratio() {
        let record = CoverageRecord::new("f1.tsv", "A", 1, 3, true, 0.2);
        assert_eq!(
            record.fields(),
            vec!["f1.tsv", "A", "0.3333333333333333", "y", "y"]
        );
        assert_eq!(
            CriticalCoverage(&record).fields(),
            vec!["A", "f1.tsv", "0.3333333333333333", "1", "3", "y"]
        );
    }

    #[test]
    fn written_ratio_agrees_with_pass_flag_at_threshold() {
        let below = CoverageRecord::new("f.tsv", "A", 1000, 5001, true, 0.2);
        let fields = below.fields();
        let written: f64 = fields[2].parse().unwrap();
        assert_eq!(written, below.non_null_ratio);
        assert!(written < 0.2);
        assert_eq!(fields[4], "n");

        let at = CoverageRecord::new("f.tsv", "A", 1000, 5000, true, 0.2);
        assert_eq!(at.fields(), vec!["f.tsv", "A", "0.2", "y", "y"]);
    }

    #[test]
    fn headers_match_field_counts() {
        let record = CoverageRecord::new("f", "c", 0, 0, false, 0.2);
        assert_eq!(CoverageRecord::HEADER.len(), record.fields().len());
        assert_eq!(
            <&CoverageRecord as ReportRecord>::HEADER,
            CoverageRecord::HEADER
        );
        let existence = ExistenceRecord::new("x", BTreeSet::new());
        assert_eq!(MissingFeature::HEADER.len(), MissingFeature(&existence).fields().len());
    }
}
