//! Stage composition for the full enrichment run.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::category::extract_category;
use crate::cleanse::clean_text_column;
use crate::config::EnrichConfig;
use crate::datetime::convert_datetime_column;
use crate::errors::EnrichError;
use crate::frame::RecordFrame;
use crate::monitor::{Monitor, TracingMonitor};
use crate::sentiment::{add_sentiment_scores, SentimentModel};

/// Counters describing one pipeline run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichmentSummary {
    /// Records in the frame (unchanged by every stage).
    pub records: usize,
    /// Records whose identifier yielded no category.
    pub unmatched_categories: usize,
    /// Records whose timestamp could not be parsed.
    pub invalid_timestamps: usize,
    /// Records written as a `Null` score triple under the configured policies.
    pub null_triples: usize,
}

/// The full record-enrichment pipeline.
///
/// Owns the configuration, the injected classifier, and the monitor. The
/// classifier is acquired once at construction (model loading is the
/// expensive part) and shared across every run.
pub struct EnrichmentPipeline<M> {
    config: EnrichConfig,
    model: M,
    monitor: Arc<dyn Monitor>,
}

impl<M: SentimentModel> EnrichmentPipeline<M> {
    /// Build a pipeline reporting through the default tracing monitor.
    pub fn new(config: EnrichConfig, model: M) -> Self {
        Self::with_monitor(config, model, Arc::new(TracingMonitor))
    }

    /// Build a pipeline with an explicit monitor.
    pub fn with_monitor(config: EnrichConfig, model: M, monitor: Arc<dyn Monitor>) -> Self {
        Self {
            config,
            model,
            monitor,
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &EnrichConfig {
        &self.config
    }

    /// Run all stages over the frame in place.
    ///
    /// Order: category extraction, text cleanup (each configured field),
    /// timestamp normalization, sentiment scoring. Stages only add or
    /// normalize columns; the record count and row order never change.
    pub fn run(&self, frame: &mut RecordFrame) -> Result<EnrichmentSummary, EnrichError> {
        let records = frame.len();

        let unmatched_categories = extract_category(
            frame,
            &self.config.identifier_field,
            &self.config.category_field,
            self.monitor.as_ref(),
        )?;

        for field in &self.config.text_fields {
            clean_text_column(frame, field)?;
        }

        let invalid_timestamps = convert_datetime_column(frame, &self.config.timestamp_field)?;

        let outcome = add_sentiment_scores(
            frame,
            &self.config.score_field,
            &self.model,
            self.config.scoring,
            self.monitor.as_ref(),
        )?;

        let summary = EnrichmentSummary {
            records,
            unmatched_categories,
            invalid_timestamps,
            null_triples: outcome.null_triples,
        };
        info!(
            records = summary.records,
            unmatched_categories = summary.unmatched_categories,
            invalid_timestamps = summary.invalid_timestamps,
            null_triples = summary.null_triples,
            "enrichment run completed"
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::Value;
    use crate::monitor::RecordingMonitor;
    use crate::sentiment::LabelScore;

    struct EvenModel;

    impl SentimentModel for EvenModel {
        fn classify(&self, _text: &str) -> Result<Vec<LabelScore>, EnrichError> {
            Ok(vec![
                LabelScore {
                    label: "neutral".to_string(),
                    score: 0.4,
                },
                LabelScore {
                    label: "negative".to_string(),
                    score: 0.3,
                },
                LabelScore {
                    label: "positive".to_string(),
                    score: 0.3,
                },
            ])
        }
    }

    fn feed_frame() -> RecordFrame {
        let ndjson = concat!(
            r#"{"guid":"https://www.bbc.co.uk/sport/articles/abc123","title":"Big Win!","#,
            r#""description":"A 3-0 win.","published_at":"Wed, 02 Oct 2024 10:15:00 GMT"}"#,
            "\n",
            r#"{"guid":"https://example.com/feed","title":"Feed Item","#,
            r#""description":"Plain text","published_at":"not a date"}"#,
            "\n",
        );
        RecordFrame::from_ndjson(ndjson.as_bytes()).unwrap()
    }

    #[test]
    fn run_applies_all_stages_and_reports_counts() {
        let mut frame = feed_frame();
        let monitor = Arc::new(RecordingMonitor::new());
        let pipeline =
            EnrichmentPipeline::with_monitor(EnrichConfig::default(), EvenModel, monitor.clone());

        let summary = pipeline.run(&mut frame).unwrap();

        assert_eq!(
            summary,
            EnrichmentSummary {
                records: 2,
                unmatched_categories: 1,
                invalid_timestamps: 1,
                null_triples: 0,
            }
        );
        assert_eq!(frame.len(), 2);
        assert_eq!(
            frame.cell("category", 0),
            Some(&Value::Text("sport".to_string()))
        );
        assert_eq!(frame.cell("category", 1), Some(&Value::Null));
        assert_eq!(
            frame.cell("title", 0),
            Some(&Value::Text("big win".to_string()))
        );
        assert!(frame.cell("published_at", 0).unwrap().as_instant().is_some());
        assert_eq!(frame.cell("published_at", 1), Some(&Value::Null));
        assert_eq!(frame.cell("positive_score", 1), Some(&Value::Float(0.3)));
        assert_eq!(monitor.diagnostics().len(), 1);
        assert_eq!(monitor.progress_updates(), vec![(1, 2), (2, 2)]);
        assert_eq!(monitor.units(), vec!["text", "text"]);
    }

    #[test]
    fn run_fails_cleanly_when_a_configured_column_is_missing() {
        let mut frame = RecordFrame::new();
        frame
            .append_column("title", vec![Value::Text("only titles".to_string())])
            .unwrap();
        let pipeline = EnrichmentPipeline::new(EnrichConfig::default(), EvenModel);
        let result = pipeline.run(&mut frame);
        assert!(matches!(result, Err(EnrichError::MissingColumn { .. })));
    }
}
