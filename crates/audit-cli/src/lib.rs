//! CLI library components for the critical-feature coverage audit.

pub mod logging;
pub mod pipeline;
pub mod types;
