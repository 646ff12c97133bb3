//! Sentiment scoring orchestration.
//!
//! Ownership model:
//! - `SentimentModel` is the capability boundary to the external classifier;
//!   implementations are constructed once and injected, never global state.
//! - `add_sentiment_scores` owns the three lock-step accumulators and is the
//!   only writer of the score columns. One triple per input record, written
//!   in input order, or the operation fails; columns are never resized to
//!   paper over a bad record.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::{EmptyTextPolicy, MissingLabelPolicy, ScorePolicy};
use crate::constants::sentiment as consts;
use crate::errors::EnrichError;
use crate::frame::{Column, RecordFrame, Value};
use crate::monitor::Monitor;

/// The three sentiment classes, in canonical output order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    /// Canonical output order: positive, neutral, negative.
    pub const ALL: [SentimentLabel; 3] = [
        SentimentLabel::Positive,
        SentimentLabel::Neutral,
        SentimentLabel::Negative,
    ];

    /// Canonical lowercase label string used by the classifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => consts::LABEL_POSITIVE,
            SentimentLabel::Neutral => consts::LABEL_NEUTRAL,
            SentimentLabel::Negative => consts::LABEL_NEGATIVE,
        }
    }

    /// Output column name for this label's scores.
    pub fn column_name(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => consts::COLUMN_POSITIVE,
            SentimentLabel::Neutral => consts::COLUMN_NEUTRAL,
            SentimentLabel::Negative => consts::COLUMN_NEGATIVE,
        }
    }

    /// Parse a classifier label string, ignoring ASCII case.
    pub fn parse(label: &str) -> Option<Self> {
        SentimentLabel::ALL
            .into_iter()
            .find(|candidate| label.eq_ignore_ascii_case(candidate.as_str()))
    }

    fn slot(&self) -> usize {
        match self {
            SentimentLabel::Positive => 0,
            SentimentLabel::Neutral => 1,
            SentimentLabel::Negative => 2,
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `(label, score)` pair from a classifier response.
///
/// Responses are unordered; scores are matched to classes by label name,
/// never by position.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LabelScore {
    /// Label string as returned by the classifier.
    pub label: String,
    /// Score in `[0, 1]` for that label.
    pub score: f64,
}

/// Capability boundary to the external text classifier.
///
/// For a fixed input, implementations should be deterministic enough for
/// batch reruns to be comparable; the pipeline itself never renormalizes
/// or reinterprets the returned scores.
pub trait SentimentModel: Send + Sync {
    /// Classify text into an unordered set of label/score pairs covering
    /// the three sentiment classes.
    fn classify(&self, text: &str) -> Result<Vec<LabelScore>, EnrichError>;
}

/// Per-batch scoring outcome counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreOutcome {
    /// Records that received a real score triple.
    pub scored: usize,
    /// Records written as a `Null` triple under the configured policies.
    pub null_triples: usize,
}

/// Score every record's text and install three aligned score columns.
///
/// For each record in input order: classify, extract the three scores by
/// label name, push onto three lock-step accumulators, and report
/// `(processed, total)` progress with unit `"text"`. The configured
/// policies decide what a null text cell or a response with a missing
/// label does; either way every record yields exactly one triple (real or
/// `Null`), so the three output columns always have the input length.
pub fn add_sentiment_scores(
    frame: &mut RecordFrame,
    text_field: &str,
    model: &dyn SentimentModel,
    policy: ScorePolicy,
    monitor: &dyn Monitor,
) -> Result<ScoreOutcome, EnrichError> {
    let cells = frame.column(text_field)?.clone();
    let total = cells.len();

    let mut positive = Column::with_capacity(total);
    let mut neutral = Column::with_capacity(total);
    let mut negative = Column::with_capacity(total);
    let mut outcome = ScoreOutcome::default();

    for (index, cell) in cells.iter().enumerate() {
        let triple = match cell.as_text() {
            Some(text) => score_one(model, text, index, policy.missing_label)?,
            None => match policy.empty_text {
                EmptyTextPolicy::ScoreAsEmpty => {
                    score_one(model, "", index, policy.missing_label)?
                }
                EmptyTextPolicy::NullTriple => None,
            },
        };
        match triple {
            Some([p, u, n]) => {
                positive.push(Value::Float(p));
                neutral.push(Value::Float(u));
                negative.push(Value::Float(n));
                outcome.scored += 1;
            }
            None => {
                positive.push(Value::Null);
                neutral.push(Value::Null);
                negative.push(Value::Null);
                outcome.null_triples += 1;
            }
        }
        monitor.progress(index + 1, total, consts::PROGRESS_UNIT);
    }

    // append_column re-checks lengths against the frame, so a desynchronized
    // accumulator is rejected instead of silently installed.
    frame.append_column(consts::COLUMN_POSITIVE, positive)?;
    frame.append_column(consts::COLUMN_NEUTRAL, neutral)?;
    frame.append_column(consts::COLUMN_NEGATIVE, negative)?;
    Ok(outcome)
}

/// Classify one text and pull the triple out of the unordered response.
///
/// `Ok(None)` means the response was malformed and the policy substitutes
/// a `Null` triple for this record.
fn score_one(
    model: &dyn SentimentModel,
    text: &str,
    index: usize,
    policy: MissingLabelPolicy,
) -> Result<Option<[f64; 3]>, EnrichError> {
    let response = model.classify(text)?;
    match extract_triple(&response) {
        Ok(triple) => Ok(Some(triple)),
        Err(label) => match policy {
            MissingLabelPolicy::Abort => Err(EnrichError::MissingLabel { label, index }),
            MissingLabelPolicy::NullTriple => Ok(None),
        },
    }
}

/// Match scores to the three classes by label name.
///
/// Returns the first missing label (in canonical order) when the response
/// does not cover all three classes. Duplicate labels keep the last score.
fn extract_triple(response: &[LabelScore]) -> Result<[f64; 3], SentimentLabel> {
    let mut slots: [Option<f64>; 3] = [None; 3];
    for pair in response {
        if let Some(label) = SentimentLabel::parse(&pair.label) {
            slots[label.slot()] = Some(pair.score);
        }
    }
    match slots {
        [Some(p), Some(u), Some(n)] => Ok([p, u, n]),
        _ => {
            let missing = SentimentLabel::ALL
                .into_iter()
                .find(|label| slots[label.slot()].is_none())
                .unwrap_or(SentimentLabel::Positive);
            Err(missing)
        }
    }
}
