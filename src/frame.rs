//! Ordered, named-column record store.
//!
//! Ownership model:
//! - `RecordFrame` owns one `Column` per named field; all columns share the
//!   same length and row order.
//! - Stages read columns, map them per value, or append whole columns; no
//!   operation reorders, drops, or adds rows.

use std::io::BufRead;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::EnrichError;
use crate::types::FieldName;

/// A single cell in a record-frame column.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Absent value or invalid-parse sentinel.
    Null,
    /// Free text (identifiers, headlines, raw timestamps).
    Text(String),
    /// Numeric value (sentiment scores).
    Float(f64),
    /// UTC-normalized point in time.
    Instant(DateTime<Utc>),
}

impl Value {
    /// Borrow the text payload, if this cell is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Copy out the numeric payload, if this cell is a float.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(value) => Some(*value),
            _ => None,
        }
    }

    /// Copy out the instant payload, if this cell is a timestamp.
    pub fn as_instant(&self) -> Option<DateTime<Utc>> {
        match self {
            Value::Instant(instant) => Some(*instant),
            _ => None,
        }
    }

    /// True for the null/invalid sentinel.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    fn from_json(value: serde_json::Value) -> Result<Self, EnrichError> {
        match value {
            serde_json::Value::Null => Ok(Value::Null),
            serde_json::Value::String(text) => Ok(Value::Text(text)),
            serde_json::Value::Number(number) => number
                .as_f64()
                .map(Value::Float)
                .ok_or_else(|| EnrichError::Ingest(format!("non-finite number: {number}"))),
            other => Err(EnrichError::Ingest(format!(
                "unsupported cell type: {other}"
            ))),
        }
    }
}

/// One named column of cells, aligned with frame row order.
pub type Column = Vec<Value>;

/// Ordered collection of records stored column-wise.
///
/// Columns are kept in insertion order. The first column appended fixes the
/// row count; every later column must match it exactly.
#[derive(Clone, Debug, Default)]
pub struct RecordFrame {
    columns: IndexMap<FieldName, Column>,
    len: usize,
}

impl RecordFrame {
    /// Create an empty frame.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records (rows).
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when the frame holds no records.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True when a column with this name exists.
    pub fn has_column(&self, field: &str) -> bool {
        self.columns.contains_key(field)
    }

    /// Column names in insertion order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    /// Borrow a column by name.
    pub fn column(&self, field: &str) -> Result<&Column, EnrichError> {
        self.columns
            .get(field)
            .ok_or_else(|| EnrichError::MissingColumn {
                field: field.to_string(),
            })
    }

    /// Borrow a single cell, or `None` when the column or row is missing.
    pub fn cell(&self, field: &str, row: usize) -> Option<&Value> {
        self.columns.get(field)?.get(row)
    }

    /// Install a whole column, adding it or replacing an existing one.
    ///
    /// The column length must equal the frame's row count; a mismatch is
    /// rejected before any state changes. An append into an empty frame
    /// fixes the row count.
    pub fn append_column(&mut self, field: &str, column: Column) -> Result<(), EnrichError> {
        if self.columns.is_empty() {
            self.len = column.len();
        } else if column.len() != self.len {
            return Err(EnrichError::ColumnLengthMismatch {
                field: field.to_string(),
                expected: self.len,
                actual: column.len(),
            });
        }
        self.columns.insert(field.to_string(), column);
        Ok(())
    }

    /// Replace a column with a per-value mapping of itself.
    ///
    /// The mapping runs in parallel across rows; output order always matches
    /// input order.
    pub fn map_column<F>(&mut self, field: &str, map: F) -> Result<(), EnrichError>
    where
        F: Fn(&Value) -> Value + Send + Sync,
    {
        let column = self
            .columns
            .get_mut(field)
            .ok_or_else(|| EnrichError::MissingColumn {
                field: field.to_string(),
            })?;
        let mapped: Column = column.par_iter().map(map).collect();
        *column = mapped;
        Ok(())
    }

    /// Derive a new column from an existing one via a per-value mapping.
    pub fn derive_column<F>(
        &mut self,
        source: &str,
        target: &str,
        map: F,
    ) -> Result<(), EnrichError>
    where
        F: FnMut(&Value) -> Value,
    {
        let derived: Column = self.column(source)?.iter().map(map).collect();
        self.append_column(target, derived)
    }

    /// Read newline-delimited JSON objects into a frame, one object per row.
    ///
    /// Fields appearing in later rows are backfilled with `Null` for earlier
    /// rows, and rows missing a known field get `Null` in that column, so
    /// all columns stay aligned. Column order follows first appearance.
    pub fn from_ndjson<R: BufRead>(reader: R) -> Result<Self, EnrichError> {
        let mut frame = RecordFrame::new();
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let object: serde_json::Map<String, serde_json::Value> =
                serde_json::from_str(&line).map_err(|err| EnrichError::Ingest(err.to_string()))?;
            frame.push_object(object)?;
        }
        Ok(frame)
    }

    fn push_object(
        &mut self,
        object: serde_json::Map<String, serde_json::Value>,
    ) -> Result<(), EnrichError> {
        let row = self.len;
        for (field, value) in object {
            let cell = Value::from_json(value)?;
            let column = self
                .columns
                .entry(field)
                .or_insert_with(|| vec![Value::Null; row]);
            column.push(cell);
        }
        self.len += 1;
        for column in self.columns.values_mut() {
            if column.len() < self.len {
                column.push(Value::Null);
            }
        }
        Ok(())
    }
}
