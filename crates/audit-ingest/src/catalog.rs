//! Critical-feature catalog loading and extraction.
//!
//! The catalog is a comma-separated file with one row per data field. The
//! relevant columns are looked up by header name (`name`, `classification`,
//! `property`) and otherwise taken from their fixed positions A, D and K.

use std::path::Path;

use csv::ReaderBuilder;
use tracing::{debug, warn};

use audit_model::{CriticalFeature, CriticalFeatureSet};

use crate::error::{IngestError, Result};
use crate::tsv::normalize_header;

/// Classification value that marks a row as critical (exact, case-sensitive).
pub const CRITICAL_CLASSIFICATION: &str = "Critical";

const NAME_POSITION: usize = 0;
const CLASSIFICATION_POSITION: usize = 3;
const PROPERTY_POSITION: usize = 10;

/// Positions of the catalog columns the extractor reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogLayout {
    pub name: usize,
    pub classification: usize,
    pub property: Option<usize>,
}

impl CatalogLayout {
    /// Resolves column positions from the catalog header.
    pub fn resolve(headers: &[String], path: &Path) -> Result<Self> {
        if headers.iter().all(String::is_empty) {
            return Err(IngestError::CatalogFormat {
                path: path.to_path_buf(),
                reason: "catalog has no header row".to_string(),
            });
        }

        let find = |label: &str| headers.iter().position(|h| h.eq_ignore_ascii_case(label));
        let name = find("name").unwrap_or(NAME_POSITION);
        let classification = find("classification").unwrap_or(CLASSIFICATION_POSITION);
        let property = find("property").or_else(|| {
            (headers.len() > PROPERTY_POSITION).then_some(PROPERTY_POSITION)
        });

        if name >= headers.len() || classification >= headers.len() {
            return Err(IngestError::CatalogFormat {
                path: path.to_path_buf(),
                reason: format!(
                    "expected a name column and a classification column, header has {} column(s)",
                    headers.len()
                ),
            });
        }

        Ok(Self {
            name,
            classification,
            property,
        })
    }
}

/// One catalog data row, reduced to the fields the extractor needs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogRow {
    /// 1-based line number in the catalog file.
    pub line: u64,
    /// Trimmed name; `None` when the cell is absent or blank.
    pub name: Option<String>,
    /// Raw classification cell.
    pub classification: Option<String>,
    /// Trimmed mapped column name; `None` when absent or blank.
    pub property: Option<String>,
}

impl CatalogRow {
    pub fn is_critical(&self) -> bool {
        self.classification.as_deref() == Some(CRITICAL_CLASSIFICATION)
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(ToString::to_string)
}

/// Reads every data row of a catalog file.
///
/// # Errors
///
/// Returns [`IngestError::CatalogRead`] if the file cannot be read and
/// [`IngestError::CatalogFormat`] if the header lacks the required columns.
pub fn read_catalog(path: &Path) -> Result<Vec<CatalogRow>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|e| IngestError::CatalogRead {
            path: path.to_path_buf(),
            source: e,
        })?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| IngestError::CatalogRead {
            path: path.to_path_buf(),
            source: e,
        })?
        .iter()
        .map(normalize_header)
        .collect();
    let layout = CatalogLayout::resolve(&headers, path)?;
    debug!(?layout, columns = headers.len(), "resolved catalog layout");

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| IngestError::CatalogRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        rows.push(CatalogRow {
            line: record.position().map_or(0, csv::Position::line),
            name: non_blank(record.get(layout.name)),
            classification: record.get(layout.classification).map(ToString::to_string),
            property: layout.property.and_then(|idx| non_blank(record.get(idx))),
        });
    }
    Ok(rows)
}

/// Selects the critical rows and returns their features in catalog order.
///
/// Critical rows without a name are skipped with a warning. Duplicate names
/// keep their first occurrence.
pub fn extract_critical_features(rows: &[CatalogRow]) -> CriticalFeatureSet {
    let mut features = CriticalFeatureSet::new();
    for row in rows.iter().filter(|row| row.is_critical()) {
        let Some(name) = row.name.as_ref() else {
            warn!(line = row.line, "critical catalog row has no name, skipping");
            continue;
        };
        let feature = match &row.property {
            Some(mapped) => CriticalFeature::mapped(name.clone(), mapped.clone()),
            None => CriticalFeature::new(name.clone()),
        };
        if !features.insert(feature) {
            debug!(line = row.line, name = %name, "duplicate critical feature");
        }
    }
    features
}

/// Reads a catalog file and extracts its critical features.
pub fn load_critical_features(path: &Path) -> Result<CriticalFeatureSet> {
    let rows = read_catalog(path)?;
    Ok(extract_critical_features(&rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn catalog(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{content}").unwrap();
        file
    }

    fn row(name: Option<&str>, classification: &str) -> CatalogRow {
        CatalogRow {
            line: 0,
            name: name.map(ToString::to_string),
            classification: Some(classification.to_string()),
            property: None,
        }
    }

    #[test]
    fn layout_prefers_named_columns() {
        let headers: Vec<String> = ["classification", "x", "name"]
            .iter()
            .map(ToString::to_string)
            .collect();
        let layout = CatalogLayout::resolve(&headers, Path::new("c.csv")).unwrap();
        assert_eq!(layout.name, 2);
        assert_eq!(layout.classification, 0);
        assert_eq!(layout.property, None);
    }

    #[test]
    fn layout_falls_back_to_positions() {
        let headers: Vec<String> = (0..11).map(|i| format!("col{i}")).collect();
        let layout = CatalogLayout::resolve(&headers, Path::new("c.csv")).unwrap();
        assert_eq!(
            layout,
            CatalogLayout {
                name: 0,
                classification: 3,
                property: Some(10)
            }
        );
    }

    #[test]
    fn layout_rejects_short_header() {
        let headers = vec!["field".to_string(), "type".to_string()];
        let result = CatalogLayout::resolve(&headers, Path::new("c.csv"));
        assert!(matches!(result, Err(IngestError::CatalogFormat { .. })));
    }

    #[test]
    fn extract_is_exact_and_deduplicated() {
        let rows = vec![
            row(Some("A"), "Critical"),
            row(Some("B"), "critical"),
            row(Some("C"), "Critical "),
            row(None, "Critical"),
            row(Some("A"), "Critical"),
            row(Some("D"), "Critical"),
        ];
        let features = extract_critical_features(&rows);
        assert_eq!(features.names(), vec!["A", "D"]);
    }

    #[test]
    fn read_catalog_positional() {
        let file = catalog(
            "Field,Node,Type,Class\nA,case,string,Critical\nB,case,string,Optional\n,case,string,Critical\nC,sample,int,Critical\n",
        );
        let features = load_critical_features(file.path()).unwrap();
        assert_eq!(features.names(), vec!["A", "C"]);
    }

    #[test]
    fn read_catalog_with_property_mapping() {
        let file = catalog(
            "name,node,type,classification,property\nAge,case,int,Critical,age_at_index\nSex,case,string,Critical,\n",
        );
        let features = load_critical_features(file.path()).unwrap();
        let collected: Vec<(&str, &str)> = features
            .iter()
            .map(|f| (f.name.as_str(), f.mapped_name.as_str()))
            .collect();
        assert_eq!(collected, vec![("Age", "age_at_index"), ("Sex", "Sex")]);
    }

    #[test]
    fn read_catalog_short_rows_are_not_critical() {
        let file = catalog("name,a,b,classification\nA\nB,x,y,Critical\n");
        let features = load_critical_features(file.path()).unwrap();
        assert_eq!(features.names(), vec!["B"]);
    }

    #[test]
    fn read_catalog_missing_columns() {
        let file = catalog("field\nA\n");
        let result = load_critical_features(file.path());
        assert!(matches!(result, Err(IngestError::CatalogFormat { .. })));
    }

    #[test]
    fn read_catalog_empty_file() {
        let file = catalog("");
        let result = load_critical_features(file.path());
        assert!(matches!(result, Err(IngestError::CatalogFormat { .. })));
    }
}
