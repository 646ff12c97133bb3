#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Category extraction from record identifiers.
pub mod category;
/// Text cleanup helpers and the in-place column normalizer.
pub mod cleanse;
/// Pipeline configuration and scoring policies.
pub mod config;
/// Centralized constants shared across stages.
pub mod constants;
/// Timestamp parsing and UTC normalization.
pub mod datetime;
/// Ordered named-column record store.
pub mod frame;
/// Aggregate metrics over enriched frames.
pub mod metrics;
/// Diagnostics and progress reporting channel.
pub mod monitor;
/// Stage composition for full enrichment runs.
pub mod pipeline;
/// Sentiment scoring orchestration and the classifier boundary.
pub mod sentiment;
/// Shared type aliases.
pub mod types;

mod errors;

pub use category::{category_for, extract_category};
pub use cleanse::{clean_text, clean_text_column};
pub use config::{EmptyTextPolicy, EnrichConfig, MissingLabelPolicy, ScorePolicy};
pub use datetime::{convert_datetime_column, parse_instant};
pub use errors::EnrichError;
pub use frame::{Column, RecordFrame, Value};
pub use monitor::{Monitor, RecordingMonitor, TracingMonitor};
pub use pipeline::{EnrichmentPipeline, EnrichmentSummary};
pub use sentiment::{
    add_sentiment_scores, LabelScore, ScoreOutcome, SentimentLabel, SentimentModel,
};
pub use types::{CategoryToken, FieldName, LogMessage, ProgressUnit};
