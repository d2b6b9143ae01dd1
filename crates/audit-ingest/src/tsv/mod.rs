//! Tab-separated extract reading.

mod reader;
mod schema;

pub use reader::{read_tsv_schema, read_tsv_table, validate_encoding};
pub use schema::{RowSchema, TsvTable, normalize_header};
