//! Per-column non-null coverage.

use std::collections::BTreeSet;

use tracing::{debug, info};

use audit_ingest::{ScannedFile, TsvTable};
use audit_model::{AnalysisOptions, CoverageRecord, CriticalFeatureSet};

/// Counts values of `column` that the null policy does not treat as missing.
///
/// Returns `None` if the table has no such column.
pub fn non_null_count(table: &TsvTable, column: &str, options: &AnalysisOptions) -> Option<usize> {
    let values = table.column_values(column)?;
    Some(
        values
            .filter(|value| !options.null_policy.is_null(*value))
            .count(),
    )
}

/// Computes coverage for every column of every scanned file.
///
/// Records are ordered by file name, then column name.
pub fn analyze_coverage(
    files: &[ScannedFile],
    features: &CriticalFeatureSet,
    options: &AnalysisOptions,
) -> Vec<CoverageRecord> {
    let critical: BTreeSet<&str> = features.feature_names().into_iter().collect();
    let mut records = Vec::new();

    for file in files {
        let row_count = file.table.row_count();
        for column in file.table.schema.columns() {
            let Some(count) = non_null_count(&file.table, column, options) else {
                continue;
            };
            records.push(CoverageRecord::new(
                file.name.clone(),
                column.clone(),
                count,
                row_count,
                critical.contains(column.as_str()),
                options.threshold,
            ));
        }
        debug!(file = %file.name, row_count, "coverage computed");
    }

    records.sort_by(|a, b| (&a.file, &a.column).cmp(&(&b.file, &b.column)));

    let failing = records.iter().filter(|r| !r.passes_threshold).count();
    info!(
        record_count = records.len(),
        below_threshold = failing,
        threshold = options.threshold,
        "coverage analysis complete"
    );
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    use audit_ingest::RowSchema;
    use audit_model::{CriticalFeature, NullPolicy};

    fn scanned(name: &str, columns: &[&str], rows: &[&[&str]]) -> ScannedFile {
        let schema = RowSchema::from_header(columns.iter().copied(), Path::new(name)).unwrap();
        ScannedFile {
            name: name.to_string(),
            table: TsvTable {
                schema,
                rows: rows
                    .iter()
                    .map(|row| row.iter().map(ToString::to_string).collect())
                    .collect(),
            },
        }
    }

    #[test]
    fn ratios_and_order() {
        let files = vec![
            scanned("f2.tsv", &["C"], &[]),
            scanned("f1.tsv", &["D", "A"], &[&["x", "1"], &["y", "  "]]),
        ];
        let features: CriticalFeatureSet = vec![CriticalFeature::new("A"), CriticalFeature::new("C")]
            .into_iter()
            .collect();
        let records = analyze_coverage(&files, &features, &AnalysisOptions::default());

        let summary: Vec<(&str, &str, f64, bool, bool)> = records
            .iter()
            .map(|r| {
                (
                    r.file.as_str(),
                    r.column.as_str(),
                    r.non_null_ratio,
                    r.is_critical,
                    r.passes_threshold,
                )
            })
            .collect();
        assert_eq!(
            summary,
            vec![
                ("f1.tsv", "A", 0.5, true, true),
                ("f1.tsv", "D", 1.0, false, true),
                ("f2.tsv", "C", 0.0, true, false),
            ]
        );
    }

    #[test]
    fn null_markers_are_opt_in() {
        let files = vec![scanned("f.tsv", &["A"], &[&["NA"], &["1"], &[]])];
        let features = CriticalFeatureSet::new();

        let blank = analyze_coverage(&files, &features, &AnalysisOptions::default());
        assert_eq!(blank[0].non_null_count, 2);

        let options =
            AnalysisOptions::default().with_null_policy(NullPolicy::blank_only().with_marker("NA"));
        let marked = analyze_coverage(&files, &features, &options);
        assert_eq!(marked[0].non_null_count, 1);
        assert_eq!(marked[0].row_count, 3);
    }

    #[test]
    fn non_null_count_checks_column_exists() {
        let file = scanned("f.tsv", &["A"], &[&["1"]]);
        let options = AnalysisOptions::default();
        assert_eq!(non_null_count(&file.table, "A", &options), Some(1));
        assert_eq!(non_null_count(&file.table, "B", &options), None);
    }
}
