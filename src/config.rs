use crate::constants::fields;
use crate::types::FieldName;

/// Policy for a classifier response that omits one of the three labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MissingLabelPolicy {
    /// Fail the whole batch with `EnrichError::MissingLabel`.
    Abort,
    /// Write a full `Null` triple for the affected record and continue.
    NullTriple,
}

/// Policy for a record whose text cell is null before scoring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmptyTextPolicy {
    /// Hand the classifier an empty string.
    ScoreAsEmpty,
    /// Write a full `Null` triple without invoking the classifier.
    NullTriple,
}

/// Policies applied uniformly across a scoring batch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScorePolicy {
    /// Response missing a required label.
    pub missing_label: MissingLabelPolicy,
    /// Null text cell reaching the scorer.
    pub empty_text: EmptyTextPolicy,
}

impl Default for ScorePolicy {
    fn default() -> Self {
        Self {
            // Loud failure over silent corruption of the label triple.
            missing_label: MissingLabelPolicy::Abort,
            empty_text: EmptyTextPolicy::ScoreAsEmpty,
        }
    }
}

/// Top-level enrichment pipeline configuration.
#[derive(Clone, Debug)]
pub struct EnrichConfig {
    /// Column holding the URL-shaped record identifier.
    pub identifier_field: FieldName,
    /// Output column for extracted category tokens.
    pub category_field: FieldName,
    /// Text columns normalized in place.
    pub text_fields: Vec<FieldName>,
    /// Column converted from raw strings to UTC instants in place.
    pub timestamp_field: FieldName,
    /// Text column submitted to the sentiment classifier.
    pub score_field: FieldName,
    /// Scoring policies, applied uniformly to every record.
    pub scoring: ScorePolicy,
}

impl Default for EnrichConfig {
    fn default() -> Self {
        Self {
            identifier_field: fields::IDENTIFIER.to_string(),
            category_field: fields::CATEGORY.to_string(),
            text_fields: vec![fields::TITLE.to_string(), fields::DESCRIPTION.to_string()],
            timestamp_field: fields::PUBLISHED_AT.to_string(),
            score_field: fields::DESCRIPTION.to_string(),
            scoring: ScorePolicy::default(),
        }
    }
}
