//! Row schema derived from a header, and the table it describes.

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{IngestError, Result};

/// Normalizes a header value by trimming whitespace and a leading BOM.
pub fn normalize_header(value: &str) -> String {
    value.trim_start_matches('\u{feff}').trim().to_string()
}

/// Column layout of one extract, fixed when its header is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowSchema {
    columns: Vec<String>,
    index: BTreeMap<String, usize>,
}

impl RowSchema {
    /// Builds a schema from raw header cells.
    ///
    /// Cells are normalized first and trailing empty cells (a trailing tab)
    /// are dropped. An empty header, an empty column name or a repeated column
    /// name is rejected.
    pub fn from_header<'a>(cells: impl IntoIterator<Item = &'a str>, path: &Path) -> Result<Self> {
        let mut columns: Vec<String> = cells.into_iter().map(normalize_header).collect();

        if columns.iter().all(String::is_empty) {
            return Err(IngestError::MalformedHeader {
                path: path.to_path_buf(),
                reason: "header row has no column names".to_string(),
            });
        }
        while columns.last().is_some_and(String::is_empty) {
            columns.pop();
        }

        let mut index = BTreeMap::new();
        for (position, column) in columns.iter().enumerate() {
            if column.is_empty() {
                return Err(IngestError::MalformedHeader {
                    path: path.to_path_buf(),
                    reason: format!("column {} has an empty name", position + 1),
                });
            }
            if index.insert(column.clone(), position).is_some() {
                return Err(IngestError::DuplicateColumn {
                    path: path.to_path_buf(),
                    column: column.clone(),
                });
            }
        }

        Ok(Self { columns, index })
    }

    /// Column names in header order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn index_of(&self, column: &str) -> Option<usize> {
        self.index.get(column).copied()
    }
}

/// A fully read extract.
///
/// Rows may be shorter than the schema; the missing trailing values are absent.
#[derive(Debug, Clone)]
pub struct TsvTable {
    pub schema: RowSchema,
    pub rows: Vec<Vec<String>>,
}

impl TsvTable {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Values of `column` for every row, or `None` if the schema has no such column.
    pub fn column_values(&self, column: &str) -> Option<impl Iterator<Item = Option<&str>>> {
        let idx = self.schema.index_of(column)?;
        Some(
            self.rows
                .iter()
                .map(move |row| row.get(idx).map(String::as_str)),
        )
    }
}
