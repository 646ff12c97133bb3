//! Aggregate helpers over enriched frames (computation only, no rendering).

use std::collections::BTreeMap;
use std::collections::HashMap;

use chrono::Datelike;

use crate::errors::EnrichError;
use crate::frame::{RecordFrame, Value};

/// Positions of rows whose cell value in `field` occurs more than once.
///
/// All members of a duplicate group are reported, in row order. `Null`
/// cells never count as duplicates of each other.
pub fn duplicate_positions(frame: &RecordFrame, field: &str) -> Result<Vec<usize>, EnrichError> {
    let mut groups: HashMap<String, Vec<usize>> = HashMap::new();
    for (row, cell) in frame.column(field)?.iter().enumerate() {
        let key = match cell {
            Value::Text(text) => text.clone(),
            Value::Instant(instant) => instant.to_rfc3339(),
            Value::Float(value) => value.to_string(),
            Value::Null => continue,
        };
        groups.entry(key).or_default().push(row);
    }
    let mut positions: Vec<usize> = groups
        .into_values()
        .filter(|rows| rows.len() > 1)
        .flatten()
        .collect();
    positions.sort_unstable();
    Ok(positions)
}

/// Distribution of records by calendar year of an instant column.
///
/// Rows whose cell is not a valid instant are ignored.
pub fn year_counts(frame: &RecordFrame, field: &str) -> Result<BTreeMap<i32, usize>, EnrichError> {
    let mut counts = BTreeMap::new();
    for cell in frame.column(field)? {
        if let Some(instant) = cell.as_instant() {
            *counts.entry(instant.year()).or_insert(0) += 1;
        }
    }
    Ok(counts)
}

/// Histogram of a score column over `[0, 1]`, split into `bins` equal
/// buckets.
///
/// A score of exactly 1.0 lands in the last bucket. Cells that are not
/// floats in `[0, 1]` are ignored. Zero `bins` yields an empty histogram.
pub fn score_counts(
    frame: &RecordFrame,
    field: &str,
    bins: usize,
) -> Result<Vec<usize>, EnrichError> {
    let mut counts = vec![0usize; bins];
    if bins == 0 {
        frame.column(field)?;
        return Ok(counts);
    }
    for cell in frame.column(field)? {
        let Some(score) = cell.as_float() else {
            continue;
        };
        if !(0.0..=1.0).contains(&score) {
            continue;
        }
        let bucket = ((score * bins as f64) as usize).min(bins - 1);
        counts[bucket] += 1;
    }
    Ok(counts)
}

/// Per-row character length of a text column, aligned with row order.
///
/// Non-text cells report length zero.
pub fn text_length_counts(frame: &RecordFrame, field: &str) -> Result<Vec<usize>, EnrichError> {
    Ok(frame
        .column(field)?
        .iter()
        .map(|cell| cell.as_text().map_or(0, |text| text.chars().count()))
        .collect())
}
