use std::io;

use thiserror::Error;

use crate::sentiment::SentimentLabel;
use crate::types::FieldName;

/// Error type for frame access, ingestion, and scoring failures.
#[derive(Debug, Error)]
pub enum EnrichError {
    #[error("column '{field}' not found")]
    MissingColumn { field: FieldName },
    #[error("column '{field}' has length {actual}, expected {expected}")]
    ColumnLengthMismatch {
        field: FieldName,
        expected: usize,
        actual: usize,
    },
    #[error("classifier response for record {index} is missing label '{label}'")]
    MissingLabel { label: SentimentLabel, index: usize },
    #[error("classifier invocation failed: {0}")]
    Classifier(String),
    #[error("ingest error: {0}")]
    Ingest(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}
