/// Constants used by category extraction.
pub mod category {
    /// Pattern matching `scheme://host/segment/...` identifiers.
    ///
    /// The trailing `/` is deliberate: an identifier whose path is a single
    /// segment (for example a bare feed URL) carries no category.
    pub const CATEGORY_PATTERN: &str = r"^[A-Za-z][A-Za-z0-9+.-]*://[^/]+/([^/?#]+)/";
    /// Diagnostic prefix emitted when an identifier yields no category.
    pub const NO_MATCH_MSG: &str = "no category match for identifier";
    /// Diagnostic prefix emitted when a record has no textual identifier.
    pub const NO_IDENTIFIER_MSG: &str = "record has no identifier";
}

/// Constants used by timestamp normalization.
pub mod datetime {
    /// Naive date-time formats accepted after RFC 2822 and RFC 3339 fail.
    /// Values in these formats are assumed to already be UTC.
    pub const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];
    /// Date-only fallback format, normalized to midnight UTC.
    pub const NAIVE_DATE_FORMAT: &str = "%Y-%m-%d";
}

/// Constants used by the sentiment-scoring stage.
pub mod sentiment {
    /// Canonical label for the positive class.
    pub const LABEL_POSITIVE: &str = "positive";
    /// Canonical label for the neutral class.
    pub const LABEL_NEUTRAL: &str = "neutral";
    /// Canonical label for the negative class.
    pub const LABEL_NEGATIVE: &str = "negative";
    /// Output column holding per-record positive scores.
    pub const COLUMN_POSITIVE: &str = "positive_score";
    /// Output column holding per-record neutral scores.
    pub const COLUMN_NEUTRAL: &str = "neutral_score";
    /// Output column holding per-record negative scores.
    pub const COLUMN_NEGATIVE: &str = "negative_score";
    /// Unit label reported with scoring progress updates.
    pub const PROGRESS_UNIT: &str = "text";
}

/// Default field names for feed-shaped record frames.
pub mod fields {
    /// Default identifier column.
    pub const IDENTIFIER: &str = "guid";
    /// Default output column for extracted categories.
    pub const CATEGORY: &str = "category";
    /// Default headline column.
    pub const TITLE: &str = "title";
    /// Default body/summary column.
    pub const DESCRIPTION: &str = "description";
    /// Default publication timestamp column.
    pub const PUBLISHED_AT: &str = "published_at";
}
