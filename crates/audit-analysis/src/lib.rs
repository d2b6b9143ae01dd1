//! Critical-feature existence and coverage analysis.
//!
//! Both analyzers take immutable inputs and return new record vectors in a
//! deterministic order:
//!
//! - [`analyze_existence`]: catalog order of the critical features
//! - [`analyze_coverage`]: file name, then column name

mod coverage;
mod existence;
mod stats;
mod views;

pub use coverage::{analyze_coverage, non_null_count};
pub use existence::analyze_existence;
pub use stats::RunStatistics;
pub use views::{critical_coverage, mean_coverage, missing_features};
