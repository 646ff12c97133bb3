//! Category extraction from URL-shaped record identifiers.

use std::sync::OnceLock;

use regex::Regex;

use crate::constants::category as consts;
use crate::errors::EnrichError;
use crate::frame::{RecordFrame, Value};
use crate::monitor::Monitor;
use crate::types::CategoryToken;

fn category_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(consts::CATEGORY_PATTERN).expect("valid category pattern"))
}

/// Extract the first path segment of a `scheme://host/segment/...` identifier.
///
/// Identifiers whose path stops after a single segment carry no category
/// (a bare feed URL is not categorized), so `https://example.com/feed`
/// yields `None` while `https://www.bbc.co.uk/sport/articles/abc123`
/// yields `Some("sport")`.
pub fn category_for(identifier: &str) -> Option<&str> {
    category_pattern()
        .captures(identifier)
        .and_then(|captures| captures.get(1))
        .map(|segment| segment.as_str())
}

/// Derive a category column from an identifier column.
///
/// Every record gets exactly one output cell: the extracted token, or
/// `Null` when the identifier has no match or is itself missing. Each
/// unmatched record emits one diagnostic and processing continues.
/// Returns the number of records left without a category.
pub fn extract_category(
    frame: &mut RecordFrame,
    identifier_field: &str,
    category_field: &str,
    monitor: &dyn Monitor,
) -> Result<usize, EnrichError> {
    let mut unmatched = 0usize;
    let mut row = 0usize;
    frame.derive_column(identifier_field, category_field, |cell| {
        let category: Option<CategoryToken> = match cell.as_text() {
            Some(identifier) => match category_for(identifier) {
                Some(token) => Some(token.to_string()),
                None => {
                    monitor.diagnostic(&format!("{}: {identifier}", consts::NO_MATCH_MSG));
                    None
                }
            },
            None => {
                monitor.diagnostic(&format!("{} (row {row})", consts::NO_IDENTIFIER_MSG));
                None
            }
        };
        row += 1;
        match category {
            Some(token) => Value::Text(token),
            None => {
                unmatched += 1;
                Value::Null
            }
        }
    })?;
    Ok(unmatched)
}
