/// Name of a column in a record frame.
/// Examples: `guid`, `description`, `positive_score`
pub type FieldName = String;
/// Topical category token extracted from an identifier.
/// Examples: `sport`, `news`, `culture`
pub type CategoryToken = String;
/// One-line diagnostic message text.
/// Example: `no category match for identifier: https://example.com/feed`
pub type LogMessage = String;
/// Unit label attached to progress updates.
/// Example: `text`
pub type ProgressUnit = String;
