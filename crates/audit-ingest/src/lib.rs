//! Data ingestion for critical-feature audits.
//!
//! This crate reads the two inputs of an audit run:
//!
//! - **Catalog**: a comma-separated file listing data fields and their
//!   classification; the rows classified `Critical` become the feature set.
//! - **Data directory**: tab-separated `.tsv` extracts whose header rows form
//!   the feature inventory and whose rows feed coverage analysis.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use audit_ingest::{load_critical_features, scan_directory};
//!
//! let features = load_critical_features(Path::new("critical_data.csv"))?;
//! let scan = scan_directory(Path::new("data"))?;
//! let inventory = scan.inventory();
//! for skipped in &scan.skipped {
//!     eprintln!("{}: {}", skipped.file, skipped.reason);
//! }
//! ```

mod catalog;
mod discovery;
mod error;
mod scan;
mod tsv;

// === Error Types ===
pub use error::{IngestError, Result};

// === Catalog ===
pub use catalog::{
    CRITICAL_CLASSIFICATION, CatalogLayout, CatalogRow, extract_critical_features,
    load_critical_features, read_catalog,
};

// === File Discovery ===
pub use discovery::list_tsv_files;

// === TSV Reading ===
pub use tsv::{
    RowSchema, TsvTable, normalize_header, read_tsv_schema, read_tsv_table, validate_encoding,
};

// === Scanning ===
pub use scan::{ScanResult, ScannedFile, scan_directory, scan_headers};
