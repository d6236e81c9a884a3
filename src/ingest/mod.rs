//! Tabular ingestion
//!
//! Turns raw comma-delimited text into validated rows:
//! - Header names are resolved to semantic fields by `schema`
//! - Data lines are split, coerced and filtered by `parser`
//! - Pure functions over resident text; no I/O here

pub mod parser;
pub mod schema;

pub use parser::{IngestReport, OreRow, ParsedRows, parse_rows};
pub use schema::{ColumnMap, Field, resolve_columns};
