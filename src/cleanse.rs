//! Text cleanup shared by the enrichment stages.

use crate::errors::EnrichError;
use crate::frame::{RecordFrame, Value};

/// Normalize one text value: strip ASCII punctuation and digit characters,
/// trim surrounding whitespace, and lowercase.
///
/// Idempotent: a second pass over its own output changes nothing.
pub fn clean_text(text: &str) -> String {
    let mut stripped = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch.is_ascii_punctuation() || ch.is_numeric() {
            continue;
        }
        stripped.push(ch);
    }
    stripped.trim().to_lowercase()
}

/// Normalize a text column in place.
///
/// Runs per record with no ordering dependency, so rows are mapped in
/// parallel; output rows stay aligned with input rows. `Null` cells pass
/// through unchanged.
pub fn clean_text_column(frame: &mut RecordFrame, field: &str) -> Result<(), EnrichError> {
    frame.map_column(field, |cell| match cell.as_text() {
        Some(text) => Value::Text(clean_text(text)),
        None => cell.clone(),
    })
}
