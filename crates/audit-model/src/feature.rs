//! Critical features extracted from the catalog.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A catalog field flagged as `Critical`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriticalFeature {
    /// Name as written in the catalog.
    pub name: String,
    /// Column name expected in the data files (the catalog `property`, or `name`).
    pub mapped_name: String,
}

impl CriticalFeature {
    /// Creates a feature whose data column carries the catalog name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            mapped_name: name.clone(),
            name,
        }
    }

    /// Creates a feature that appears under a different column name in the data.
    pub fn mapped(name: impl Into<String>, mapped_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mapped_name: mapped_name.into(),
        }
    }
}

/// Critical features in catalog order, unique by `name`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriticalFeatureSet {
    features: Vec<CriticalFeature>,
}

impl CriticalFeatureSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a feature unless one with the same name is already present.
    ///
    /// Returns `false` when the feature was a duplicate; the first occurrence wins.
    pub fn insert(&mut self, feature: CriticalFeature) -> bool {
        if self.features.iter().any(|f| f.name == feature.name) {
            return false;
        }
        self.features.push(feature);
        true
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CriticalFeature> {
        self.features.iter()
    }

    /// Catalog names in catalog order.
    pub fn names(&self) -> Vec<&str> {
        self.features.iter().map(|f| f.name.as_str()).collect()
    }

    /// Unique mapped names in catalog order.
    ///
    /// These are the names the analyzers look for in the data files.
    pub fn feature_names(&self) -> Vec<&str> {
        let mut seen = BTreeSet::new();
        self.features
            .iter()
            .map(|f| f.mapped_name.as_str())
            .filter(|name| seen.insert(*name))
            .collect()
    }

    /// Returns true if `column` is the mapped name of any critical feature.
    pub fn is_critical(&self, column: &str) -> bool {
        self.features.iter().any(|f| f.mapped_name == column)
    }
}

impl FromIterator<CriticalFeature> for CriticalFeatureSet {
    fn from_iter<I: IntoIterator<Item = CriticalFeature>>(iter: I) -> Self {
        let mut set = Self::new();
        for feature in iter {
            set.insert(feature);
        }
        set
    }
}
