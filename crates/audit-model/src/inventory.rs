//! Scanned data files and the feature inventory built from them.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// One scanned tabular extract: its file name and header row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataFile {
    /// File name without directory (e.g. `demographic.tsv`).
    pub name: String,
    /// Column names in header order.
    pub columns: Vec<String>,
}

impl DataFile {
    pub fn new(name: impl Into<String>, columns: Vec<String>) -> Self {
        Self {
            name: name.into(),
            columns,
        }
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }
}

/// A data file that could not be scanned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedFile {
    pub file: String,
    pub reason: String,
}

/// File name -> columns, built once per run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureInventory {
    files: BTreeMap<String, DataFile>,
}

impl FeatureInventory {
    pub fn from_files(files: impl IntoIterator<Item = DataFile>) -> Self {
        Self {
            files: files
                .into_iter()
                .map(|file| (file.name.clone(), file))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Files in lexical name order.
    pub fn files(&self) -> impl Iterator<Item = &DataFile> {
        self.files.values()
    }

    pub fn get(&self, file: &str) -> Option<&DataFile> {
        self.files.get(file)
    }

    /// Names of the files whose header contains `feature` (exact match).
    pub fn locations_of(&self, feature: &str) -> BTreeSet<String> {
        self.files
            .values()
            .filter(|file| file.has_column(feature))
            .map(|file| file.name.clone())
            .collect()
    }

    /// Feature name -> files providing it.
    pub fn by_feature(&self) -> BTreeMap<String, BTreeSet<String>> {
        let mut map: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for file in self.files.values() {
            for column in &file.columns {
                map.entry(column.clone())
                    .or_default()
                    .insert(file.name.clone());
            }
        }
        map
    }

    /// Every distinct column name across all files.
    pub fn distinct_columns(&self) -> BTreeSet<&str> {
        self.files
            .values()
            .flat_map(|file| file.columns.iter().map(String::as_str))
            .collect()
    }

    /// `(file, column)` pairs ordered by file name, then column name.
    pub fn entries(&self) -> Vec<(&str, &str)> {
        let mut entries = Vec::new();
        for file in self.files.values() {
            let mut columns: Vec<&str> = file.columns.iter().map(String::as_str).collect();
            columns.sort_unstable();
            for column in columns {
                entries.push((file.name.as_str(), column));
            }
        }
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inventory() -> FeatureInventory {
        FeatureInventory::from_files(vec![
            DataFile::new("sample.tsv", vec!["sample_id".into(), "case_id".into()]),
            DataFile::new("case.tsv", vec!["case_id".into(), "age".into()]),
        ])
    }

    #[test]
    fn locations_are_exact_and_sorted() {
        let inv = inventory();
        let locations: Vec<String> = inv.locations_of("case_id").into_iter().collect();
        assert_eq!(locations, vec!["case.tsv", "sample.tsv"]);
        assert!(inv.locations_of("Case_ID").is_empty());
    }

    #[test]
    fn entries_sort_files_then_columns() {
        let inv = inventory();
        assert_eq!(
            inv.entries(),
            vec![
                ("case.tsv", "age"),
                ("case.tsv", "case_id"),
                ("sample.tsv", "case_id"),
                ("sample.tsv", "sample_id"),
            ]
        );
    }

    #[test]
    fn by_feature_groups_files() {
        let map = inventory().by_feature();
        assert_eq!(map["case_id"].len(), 2);
        assert_eq!(map["age"].iter().next().map(String::as_str), Some("case.tsv"));
        assert_eq!(inventory().distinct_columns().len(), 3);
    }
}
