//! Data model for critical-feature coverage audits.
//!
//! Every type here is transient: a run rebuilds all of them from the catalog
//! and the data directory, and nothing is persisted between runs.

pub mod error;
pub mod feature;
pub mod inventory;
pub mod options;
pub mod records;

pub use error::{OptionsError, Result};
pub use feature::{CriticalFeature, CriticalFeatureSet};
pub use inventory::{DataFile, FeatureInventory, SkippedFile};
pub use options::{AnalysisOptions, DEFAULT_COVERAGE_THRESHOLD, NullPolicy};
pub use records::{CoverageRecord, ExistenceRecord};
