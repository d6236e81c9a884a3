//! Ingestion error types
//!
//! Only whole-dataset failures are errors. Malformed rows are dropped and
//! counted in [`crate::IngestReport`] instead.

use std::fmt;

use crate::ingest::Field;

/// Required semantic columns could not be resolved from the header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaError {
    /// Header columns actually present (trimmed, original case)
    pub found: Vec<String>,
    /// Required fields with no matching column
    pub missing: Vec<Field>,
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let missing: Vec<&str> = self.missing.iter().map(|m| m.as_str()).collect();
        write!(
            f,
            "Missing required column(s) {}; found [{}]",
            missing.join(", "),
            self.found.join(", ")
        )
    }
}

impl std::error::Error for SchemaError {}

/// Errors that abort building a grid from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestError {
    /// Header row lacks an x, y or material column.
    Schema(SchemaError),
    /// No data row survived validation.
    EmptyDataset { rows_read: usize },
}

impl fmt::Display for IngestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IngestError::Schema(e) => write!(f, "Schema error: {e}"),
            IngestError::EmptyDataset { rows_read } => {
                write!(f, "Empty dataset: none of {rows_read} data row(s) were valid")
            }
        }
    }
}

impl std::error::Error for IngestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IngestError::Schema(e) => Some(e),
            IngestError::EmptyDataset { .. } => None,
        }
    }
}

impl From<SchemaError> for IngestError {
    fn from(e: SchemaError) -> Self {
        IngestError::Schema(e)
    }
}
